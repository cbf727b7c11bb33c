// src/player.rs

use crate::api::{CourseApi, Pending};
use crate::model::{Lesson, ProgressUpdate};
use crate::viewer::ViewerEvent;
use std::collections::HashSet;

/// Player de vídeo da página do curso. O vídeo em si fica no serviço de
/// hospedagem; aqui só se decide quando a aula conta como concluída.
#[derive(Default)]
pub struct Player {
    reported: HashSet<String>,
    saves: Vec<(String, Pending<()>)>,
}

impl Player {
    /// Devolve o evento de conclusão só na primeira vez para cada aula.
    pub fn finish(&mut self, lesson_id: &str) -> Option<ViewerEvent> {
        if self.reported.insert(lesson_id.to_string()) {
            Some(ViewerEvent::LessonCompleted(lesson_id.to_string()))
        } else {
            None
        }
    }

    /// Como [`Player::finish`], mas também grava o progresso no servidor.
    pub fn complete(
        &mut self,
        api: &dyn CourseApi,
        course_id: &str,
        lesson_id: &str,
    ) -> Option<ViewerEvent> {
        let event = self.finish(lesson_id)?;
        let update = ProgressUpdate {
            course_id: course_id.to_string(),
            lesson_id: lesson_id.to_string(),
        };
        self.saves
            .push((lesson_id.to_string(), api.record_progress(&update)));
        Some(event)
    }

    pub fn poll(&mut self) {
        self.saves.retain(|(lesson_id, save)| match save.poll() {
            None => true,
            Some(Ok(())) => {
                log::info!("progresso da aula {lesson_id} gravado");
                false
            }
            Some(Err(err)) => {
                log::error!("erro ao gravar progresso da aula {lesson_id}: {err}");
                false
            }
        });
    }

    pub fn is_saving(&self) -> bool {
        !self.saves.is_empty()
    }

    pub fn has_finished(&self, lesson_id: &str) -> bool {
        self.reported.contains(lesson_id)
    }
}

/// Endereço público do vídeo, ou `None` se a aula não tem vídeo.
pub fn video_url(video_base_url: &str, lesson: &Lesson) -> Option<String> {
    let reference = lesson.video_ref().trim();
    if reference.is_empty() {
        return None;
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return Some(reference.to_string());
    }
    Some(format!(
        "{}/{}",
        video_base_url.trim_end_matches('/'),
        reference.trim_start_matches('/')
    ))
}
