use crate::admin::{CoursesTable, TableAction};
use crate::api::CourseApi;
use crate::app::Nav;
use crate::ui::layout::loading_panel;
use crate::ui::views::dialogs::ui_dialogs;
use egui::{CentralPanel, Context, Grid, RichText, ScrollArea};

pub fn ui_courses_table(
    table: &mut CoursesTable,
    api: &dyn CourseApi,
    ctx: &Context,
) -> Option<Nav> {
    if table.is_loading() {
        loading_panel(ctx);
        return None;
    }

    let mut action: Option<TableAction> = None;
    CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Cursos");
            ui.add_space(16.0);
            if ui.button("➕ Novo curso").clicked() {
                action = Some(TableAction::Create);
            }
        });
        ui.add_space(12.0);

        if table.courses().is_empty() {
            ui.label("Nenhum curso cadastrado.");
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            Grid::new("courses_table")
                .striped(true)
                .num_columns(4)
                .spacing([24.0, 10.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Título").strong());
                    ui.label(RichText::new("Descrição").strong());
                    ui.label(RichText::new("Módulos").strong());
                    ui.label(RichText::new("Ações").strong());
                    ui.end_row();

                    for course in table.courses() {
                        ui.label(&course.title);
                        ui.label(RichText::new(&course.description).weak());
                        ui.label(course.module_count().to_string());
                        ui.horizontal(|ui| {
                            if ui.button("✏").on_hover_text("Editar").clicked() {
                                action = Some(TableAction::Edit(course.clone()));
                            }
                            if ui.button("🗑").on_hover_text("Excluir").clicked() {
                                action = Some(TableAction::Delete(course.clone()));
                            }
                            if ui.button("📖").on_hover_text("Gerenciar módulos").clicked() {
                                action = Some(TableAction::ManageModules(course.id.clone()));
                            }
                        });
                        ui.end_row();
                    }
                });
        });
    });

    let nav = action
        .and_then(|action| table.apply(action))
        .map(Nav::ManageModules);

    ui_dialogs(table, api, ctx);
    nav
}
