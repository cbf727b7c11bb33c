use crate::admin::CoursesTable;
use crate::api::CourseApi;
use crate::ui::helpers::{course_form_fields, mutation_status};
use egui::{Align2, Button, Color32, Context, RichText, Window};

/// Diálogos de criar, editar e excluir. Cada um só existe enquanto a
/// tabela tem um alvo para ele.
pub fn ui_dialogs(table: &mut CoursesTable, api: &dyn CourseApi, ctx: &Context) {
    if table.is_create_open() {
        ui_create_dialog(table, api, ctx);
    }
    if table.is_edit_open() {
        ui_edit_dialog(table, api, ctx);
    }
    if table.is_delete_open() {
        ui_delete_dialog(table, api, ctx);
    }
}

fn ui_create_dialog(table: &mut CoursesTable, api: &dyn CourseApi, ctx: &Context) {
    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    Window::new("Novo curso")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            course_form_fields(ui, &mut table.create_form);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let busy = table.create_form.mutation.is_busy();
                save = ui.add_enabled(!busy, Button::new("Salvar")).clicked();
                cancel = ui.button("Cancelar").clicked();
            });
        });

    if save {
        table.submit_create(api);
    }
    if cancel || !open {
        table.close_create();
    }
}

fn ui_edit_dialog(table: &mut CoursesTable, api: &dyn CourseApi, ctx: &Context) {
    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    Window::new("Editar curso")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            course_form_fields(ui, &mut table.edit_form);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let busy = table.edit_form.mutation.is_busy();
                save = ui.add_enabled(!busy, Button::new("Salvar")).clicked();
                cancel = ui.button("Cancelar").clicked();
            });
        });

    if save {
        table.submit_edit(api);
    }
    if cancel || !open {
        table.close_edit();
    }
}

fn ui_delete_dialog(table: &mut CoursesTable, api: &dyn CourseApi, ctx: &Context) {
    let Some(title) = table.deleting().map(|course| course.title.clone()) else {
        return;
    };
    let mut open = true;
    let mut confirm = false;
    let mut cancel = false;

    Window::new("Excluir curso")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Tem certeza que deseja excluir \"{title}\"?"));
            ui.label(RichText::new("Essa ação não pode ser desfeita.").weak());
            ui.add_space(8.0);
            mutation_status(ui, table.delete.is_busy(), table.delete.error.as_deref());
            ui.horizontal(|ui| {
                let busy = table.delete.is_busy();
                confirm = ui
                    .add_enabled(
                        !busy,
                        Button::new(RichText::new("Excluir").color(Color32::WHITE))
                            .fill(Color32::from_rgb(185, 28, 28)),
                    )
                    .clicked();
                cancel = ui.button("Cancelar").clicked();
            });
        });

    if confirm {
        table.confirm_delete(api);
    }
    if cancel || !open {
        table.close_delete();
    }
}
