use crate::api::CourseApi;
use crate::app::Nav;
use crate::config::Config;
use crate::model::Route;
use crate::ui::helpers::lesson_button;
use crate::ui::layout::{loading_panel, status_card};
use crate::ui::views::player::ui_player;
use crate::viewer::{CourseViewer, ViewPhase, ViewerEvent};
use egui::{Button, CentralPanel, CollapsingHeader, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_course_viewer(
    viewer: &mut CourseViewer,
    api: &dyn CourseApi,
    config: &Config,
    ctx: &Context,
) -> Option<Nav> {
    let back = || Nav::Route(Route::Catalog);
    let mut nav = None;
    let mut events: Vec<ViewerEvent> = Vec::new();
    let mut finished_lesson: Option<String> = None;

    let course = match viewer.phase() {
        ViewPhase::Loading => {
            loading_panel(ctx);
            return None;
        }
        ViewPhase::NotFound => {
            status_card(ctx, 360.0, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Curso não encontrado");
                    ui.add_space(12.0);
                    if ui.button("‹ Voltar aos cursos").clicked() {
                        nav = Some(back());
                    }
                });
            });
            return nav;
        }
        ViewPhase::Ready(course) => course,
    };

    // ----------- CONTEÚDO DO CURSO -----------
    let rows = viewer.module_rows();
    let (done, total) = viewer.progress();
    egui::SidePanel::right("course_content")
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Conteúdo do curso").strong());
            if total > 0 {
                ui.add(
                    ProgressBar::new(done as f32 / total as f32)
                        .text(format!("{done}/{total} aulas concluídas")),
                );
            }
            ui.add_space(8.0);

            ScrollArea::vertical().show(ui, |ui| {
                let width = ui.available_width();
                for module in &rows {
                    let header = format!("{}  {}", module.label(), module.title);
                    let response = CollapsingHeader::new(RichText::new(header).strong())
                        .id_salt(&module.id)
                        .open(Some(module.open))
                        .show(ui, |ui| {
                            for row in &module.lessons {
                                if lesson_button(ui, row, width) {
                                    events.push(ViewerEvent::SelectLesson(row.lesson.clone()));
                                }
                            }
                        });
                    if response.header_response.clicked() {
                        events.push(ViewerEvent::ToggleModule(module.id.clone()));
                    }
                }
            });
        });

    // ----------- VÍDEO E AULA -----------
    CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.add(Button::new("‹").min_size(egui::vec2(32.0, 32.0))).clicked() {
                nav = Some(back());
            }
            ui.vertical(|ui| {
                ui.label(RichText::new(&course.title).heading().strong());
                ui.label(RichText::new(&course.description).weak());
            });
        });
        ui.separator();

        if let Some(lesson) = viewer.selected_lesson() {
            ScrollArea::vertical().show(ui, |ui| {
                let finished = viewer.player.has_finished(&lesson.id);
                if ui_player(
                    ui,
                    lesson,
                    &config.video_base_url,
                    finished,
                    viewer.player.is_saving(),
                ) {
                    finished_lesson = Some(lesson.id.clone());
                }
            });
        }
    });

    if let Some(lesson_id) = finished_lesson {
        let course_id = viewer.course_id.clone();
        if let Some(event) = viewer.player.complete(api, &course_id, &lesson_id) {
            events.push(event);
        }
    }
    for event in events {
        viewer.handle(event);
    }
    nav
}
