// src/ui/helpers.rs
use crate::admin::CourseForm;
use crate::view_models::LessonRow;
use egui::{Button, Color32, RichText, Spinner, Ui, Vec2};

/// Linha de aula no menu lateral. Devolve `true` se foi clicada.
pub fn lesson_button(ui: &mut Ui, row: &LessonRow, width: f32) -> bool {
    let mut text = RichText::new(row.label());
    if row.marker == crate::viewer::LessonMarker::Completed {
        text = text.color(Color32::from_rgb(16, 185, 129));
    }
    ui.add(
        Button::new(text)
            .selected(row.selected)
            .frame(row.selected)
            .min_size(Vec2::new(width, 28.0)),
    )
    .on_hover_text(row.marker.description())
    .clicked()
}

/// Campos título/descrição, mais erro e spinner da gravação.
pub fn course_form_fields(ui: &mut Ui, form: &mut CourseForm) {
    egui::Grid::new("course_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Título");
            ui.add(
                egui::TextEdit::singleline(&mut form.draft.title)
                    .hint_text("Nome do curso")
                    .desired_width(280.0),
            );
            ui.end_row();

            ui.label("Descrição");
            ui.add(
                egui::TextEdit::multiline(&mut form.draft.description)
                    .desired_rows(4)
                    .desired_width(280.0),
            );
            ui.end_row();
        });

    mutation_status(ui, form.mutation.is_busy(), form.mutation.error.as_deref());
}

pub fn mutation_status(ui: &mut Ui, busy: bool, error: Option<&str>) {
    if busy {
        ui.horizontal(|ui| {
            ui.add(Spinner::new());
            ui.label("Salvando...");
        });
    }
    if let Some(message) = error {
        ui.colored_label(Color32::LIGHT_RED, format!("⚠ {message}"));
    }
}
