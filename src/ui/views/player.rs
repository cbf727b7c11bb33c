use crate::model::Lesson;
use crate::player::video_url;
use egui::{Align, Button, Color32, Frame, Layout, RichText, Ui};

/// Região do vídeo + dados da aula. Devolve `true` quando o aluno marca a
/// aula como concluída.
pub fn ui_player(
    ui: &mut Ui,
    lesson: &Lesson,
    video_base_url: &str,
    finished: bool,
    saving: bool,
) -> bool {
    let width = ui.available_width();
    let height = (width * 9.0 / 16.0).min(420.0);

    Frame::default()
        .fill(Color32::from_gray(12))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(width, height));
            // Sem referência de vídeo o player fica vazio
            if let Some(url) = video_url(video_base_url, lesson) {
                ui.vertical_centered(|ui| {
                    ui.add_space((height / 2.0 - 30.0).max(0.0));
                    ui.label(RichText::new("🎬").size(32.0).color(Color32::WHITE));
                    ui.hyperlink_to("Abrir vídeo", url);
                    ui.label(RichText::new(lesson.video_ref()).small().color(Color32::GRAY));
                });
            }
        });

    ui.add_space(12.0);
    ui.label(RichText::new(&lesson.title).heading().strong());
    if !lesson.description.is_empty() {
        ui.label(RichText::new(&lesson.description).weak());
    }
    ui.add_space(8.0);

    let mut clicked = false;
    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
        let label = if finished {
            "✔ Aula concluída"
        } else {
            "✔ Marcar como concluída"
        };
        clicked = ui.add_enabled(!finished, Button::new(label)).clicked();
        if saving {
            ui.add(egui::Spinner::new());
        }
    });
    clicked
}
