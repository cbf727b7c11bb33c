use crate::app::Nav;
use crate::catalog::Catalog;
use crate::model::Route;
use crate::ui::layout::loading_panel;
use egui::{CentralPanel, Context, Frame, RichText, ScrollArea};

pub fn ui_catalog(catalog: &Catalog, ctx: &Context) -> Option<Nav> {
    if catalog.is_loading() {
        loading_panel(ctx);
        return None;
    }

    let mut nav = None;
    CentralPanel::default().show(ctx, |ui| {
        ui.heading("Cursos");
        ui.add_space(12.0);

        if catalog.courses().is_empty() {
            ui.label("Nenhum curso disponível.");
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for course in catalog.courses() {
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&course.title).strong().size(18.0));
                    if !course.description.is_empty() {
                        ui.label(&course.description);
                    }
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} módulos", course.module_count())).weak(),
                        );
                        if ui.button("▶ Assistir").clicked() {
                            nav = Some(Nav::Route(Route::Viewer {
                                course_id: course.id.clone(),
                            }));
                        }
                    });
                });
                ui.add_space(8.0);
            }
        });
    });
    nav
}
