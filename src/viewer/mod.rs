use crate::api::{CourseApi, Pending, take_ready};
use crate::error::ApiError;
use crate::model::{Course, Lesson, ProgressRecord};
use crate::player::Player;
use std::collections::HashSet;

pub mod queries;
pub mod view_models;

/// Eventos que a interface (e o player) entregam à página do curso.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    SelectLesson(Lesson),
    LessonCompleted(String),
    ToggleModule(String),
}

#[derive(Debug, PartialEq)]
pub enum ViewPhase<'a> {
    Loading,
    NotFound,
    Ready(&'a Course),
}

/// Ícone de cada aula no menu lateral. Concluída ganha de "tocando".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonMarker {
    Completed,
    Playing,
    NotStarted,
}

/// Estado da página de um curso. Vive enquanto a página estiver aberta;
/// nada disto é salvo no cliente.
pub struct CourseViewer {
    pub course_id: String,
    course: Option<Course>,
    loading: bool,
    selected: Option<Lesson>,
    completed: HashSet<String>,
    open_module: Option<String>,
    course_fetch: Option<Pending<Course>>,
    progress_fetch: Option<Pending<Vec<ProgressRecord>>>,
    pub player: Player,
}

impl CourseViewer {
    pub fn new(course_id: &str) -> Self {
        Self {
            course_id: course_id.to_string(),
            course: None,
            loading: true,
            selected: None,
            completed: HashSet::new(),
            open_module: None,
            course_fetch: None,
            progress_fetch: None,
            player: Player::default(),
        }
    }

    /// Dispara as duas buscas em paralelo; a ordem de chegada não importa.
    pub fn mount(api: &dyn CourseApi, course_id: &str) -> Self {
        let mut viewer = Self::new(course_id);
        viewer.course_fetch = Some(api.fetch_course(course_id));
        viewer.progress_fetch = Some(api.fetch_progress(course_id));
        viewer
    }

    pub fn poll(&mut self) {
        if let Some(result) = take_ready(&mut self.course_fetch) {
            self.on_course_loaded(result);
        }
        if let Some(result) = take_ready(&mut self.progress_fetch) {
            self.on_progress_loaded(result);
        }
        self.player.poll();
    }

    pub fn on_course_loaded(&mut self, result: Result<Course, ApiError>) {
        match result {
            Ok(course) => {
                if let Some(first) = course.first_lesson() {
                    self.selected = Some(first.clone());
                }
                log::info!(
                    "curso '{}' carregado: {} módulos, {} aulas",
                    course.id,
                    course.modules.len(),
                    course.lesson_count()
                );
                self.course = Some(course);
            }
            Err(err) => log::log!(
                err.log_level(),
                "erro ao carregar curso {}: {err}",
                self.course_id
            ),
        }
        self.loading = false;
    }

    pub fn on_progress_loaded(&mut self, result: Result<Vec<ProgressRecord>, ApiError>) {
        match result {
            Ok(records) => {
                self.completed = records.iter().map(|r| r.lesson_id().to_string()).collect();
            }
            Err(err) => log::error!("erro ao carregar progresso de {}: {err}", self.course_id),
        }
    }

    pub fn handle(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::SelectLesson(lesson) => self.select_lesson(lesson),
            ViewerEvent::LessonCompleted(lesson_id) => {
                self.complete_lesson(&lesson_id);
            }
            ViewerEvent::ToggleModule(module_id) => self.toggle_module(&module_id),
        }
    }

    pub fn select_lesson(&mut self, lesson: Lesson) {
        self.selected = Some(lesson);
    }

    pub fn next_lesson(&self, current_id: &str) -> Option<&Lesson> {
        self.course.as_ref()?.next_lesson(current_id)
    }

    /// Marca a aula como concluída e avança a partir da aula *selecionada*
    /// (que pode não ser `lesson_id`). Devolve `true` se a seleção mudou.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> bool {
        if !self.completed.contains(lesson_id) {
            self.completed.insert(lesson_id.to_string());
        }

        let next = self
            .selected
            .as_ref()
            .and_then(|current| self.next_lesson(&current.id))
            .cloned();
        match next {
            Some(lesson) => {
                self.selected = Some(lesson);
                true
            }
            None => false,
        }
    }

    pub fn toggle_module(&mut self, module_id: &str) {
        if self.open_module.as_deref() == Some(module_id) {
            self.open_module = None;
        } else {
            self.open_module = Some(module_id.to_string());
        }
    }

    pub fn is_module_open(&self, module_id: &str) -> bool {
        self.open_module.as_deref() == Some(module_id)
    }

    pub fn phase(&self) -> ViewPhase<'_> {
        if self.loading {
            return ViewPhase::Loading;
        }
        match &self.course {
            Some(course) => ViewPhase::Ready(course),
            None => ViewPhase::NotFound,
        }
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    pub fn selected_lesson(&self) -> Option<&Lesson> {
        self.selected.as_ref()
    }

    pub fn is_completed(&self, lesson_id: &str) -> bool {
        self.completed.contains(lesson_id)
    }

    pub fn completed_ids(&self) -> &HashSet<String> {
        &self.completed
    }

    pub fn marker(&self, lesson_id: &str) -> LessonMarker {
        if self.is_completed(lesson_id) {
            LessonMarker::Completed
        } else if self.selected.as_ref().is_some_and(|l| l.id == lesson_id) {
            LessonMarker::Playing
        } else {
            LessonMarker::NotStarted
        }
    }

    /// (concluídas, total) contando só aulas que existem no curso.
    pub fn progress(&self) -> (usize, usize) {
        match &self.course {
            Some(course) => {
                let done = course.lessons().filter(|l| self.is_completed(&l.id)).count();
                (done, course.lesson_count())
            }
            None => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::queries::tests::{course_with, lesson};
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::pending::pending;
    use crate::model::LessonRef;

    fn record(id: &str) -> ProgressRecord {
        ProgressRecord {
            lesson: LessonRef::Id(id.to_string()),
        }
    }

    fn loaded(modules: &[&[&str]]) -> CourseViewer {
        let mut viewer = CourseViewer::new("c1");
        viewer.on_course_loaded(Ok(course_with(modules)));
        viewer
    }

    fn selected_id(viewer: &CourseViewer) -> Option<&str> {
        viewer.selected_lesson().map(|l| l.id.as_str())
    }

    #[test]
    fn load_selects_first_lesson_of_first_module() {
        let viewer = loaded(&[&["L1", "L2"], &["L3"]]);
        assert_eq!(selected_id(&viewer), Some("L1"));
        assert!(matches!(viewer.phase(), ViewPhase::Ready(_)));
    }

    #[test]
    fn course_without_lessons_has_no_selection() {
        let viewer = loaded(&[&[]]);
        assert_eq!(selected_id(&viewer), None);
        assert!(matches!(viewer.phase(), ViewPhase::Ready(_)));
    }

    #[test]
    fn loading_until_course_arrives_even_if_progress_came_first() {
        let mut viewer = CourseViewer::new("c1");
        viewer.on_progress_loaded(Ok(vec![record("L1")]));
        assert_eq!(viewer.phase(), ViewPhase::Loading);
        viewer.on_course_loaded(Ok(course_with(&[&["L1"]])));
        assert_eq!(viewer.marker("L1"), LessonMarker::Completed);
    }

    #[test]
    fn failed_course_fetch_renders_not_found() {
        let mut viewer = CourseViewer::new("c1");
        viewer.on_course_loaded(Err(ApiError::Status {
            status: 404,
            url: "/api/courses/c1".into(),
        }));
        assert_eq!(viewer.phase(), ViewPhase::NotFound);
        assert!(viewer.course().is_none());
        assert_eq!(viewer.progress(), (0, 0));
    }

    #[test]
    fn progress_populates_completed_set_regardless_of_selection() {
        let mut viewer = loaded(&[&["L1", "L2"]]);
        viewer.select_lesson(lesson("L2"));
        viewer.on_progress_loaded(Ok(vec![record("L1")]));
        assert_eq!(viewer.completed_ids().len(), 1);
        assert!(viewer.is_completed("L1"));
        assert_eq!(selected_id(&viewer), Some("L2"));
    }

    #[test]
    fn failed_progress_fetch_keeps_previous_set() {
        let mut viewer = loaded(&[&["L1"]]);
        viewer.complete_lesson("L1");
        viewer.on_progress_loaded(Err(ApiError::Abandoned));
        assert!(viewer.is_completed("L1"));
    }

    #[test]
    fn completion_marks_and_advances_to_next_module() {
        let mut viewer = loaded(&[&["L1", "L2"], &["L3"]]);
        viewer.select_lesson(lesson("L2"));
        viewer.handle(ViewerEvent::LessonCompleted("L2".into()));
        assert_eq!(viewer.completed_ids().len(), 1);
        assert!(viewer.is_completed("L2"));
        assert_eq!(selected_id(&viewer), Some("L3"));
    }

    #[test]
    fn completion_is_idempotent() {
        let mut viewer = loaded(&[&["L1", "L2", "L3"]]);
        viewer.complete_lesson("L1");
        viewer.complete_lesson("L1");
        assert_eq!(viewer.completed_ids().len(), 1);
    }

    #[test]
    fn completing_last_lesson_keeps_selection() {
        let mut viewer = loaded(&[&["L1"], &["L2"]]);
        viewer.select_lesson(lesson("L2"));
        assert!(!viewer.complete_lesson("L2"));
        assert_eq!(selected_id(&viewer), Some("L2"));
    }

    #[test]
    fn completion_advances_relative_to_selected_lesson() {
        let mut viewer = loaded(&[&["L1", "L2", "L3"]]);
        viewer.select_lesson(lesson("L2"));
        viewer.complete_lesson("L1");
        assert!(viewer.is_completed("L1"));
        assert_eq!(selected_id(&viewer), Some("L3"));
    }

    #[test]
    fn completion_without_selection_only_marks() {
        let mut viewer = loaded(&[&[]]);
        assert!(!viewer.complete_lesson("L9"));
        assert!(viewer.is_completed("L9"));
        assert_eq!(selected_id(&viewer), None);
    }

    #[test]
    fn completed_marker_wins_over_playing() {
        let mut viewer = loaded(&[&["L1", "L2", "L3"]]);
        assert_eq!(viewer.marker("L1"), LessonMarker::Playing);
        assert_eq!(viewer.marker("L2"), LessonMarker::NotStarted);
        viewer.on_progress_loaded(Ok(vec![record("L1")]));
        assert_eq!(viewer.marker("L1"), LessonMarker::Completed);
    }

    #[test]
    fn accordion_keeps_a_single_module_open() {
        let mut viewer = loaded(&[&["L1"], &["L2"]]);
        viewer.handle(ViewerEvent::ToggleModule("m0".into()));
        assert!(viewer.is_module_open("m0"));
        viewer.handle(ViewerEvent::ToggleModule("m1".into()));
        assert!(!viewer.is_module_open("m0"));
        assert!(viewer.is_module_open("m1"));
        viewer.handle(ViewerEvent::ToggleModule("m1".into()));
        assert!(!viewer.is_module_open("m1"));
    }

    #[test]
    fn progress_ignores_ids_outside_the_course() {
        let mut viewer = loaded(&[&["L1", "L2"]]);
        viewer.on_progress_loaded(Ok(vec![record("L1"), record("other")]));
        assert_eq!(viewer.progress(), (1, 2));
    }

    #[test]
    fn poll_applies_each_fetch_once() {
        let (course_tx, course_rx) = pending::<Course>("/api/courses/c1", None);
        let (progress_tx, progress_rx) = pending::<Vec<ProgressRecord>>("/api/progress", None);
        let mut viewer = CourseViewer::new("c1");
        viewer.course_fetch = Some(course_rx);
        viewer.progress_fetch = Some(progress_rx);

        viewer.poll();
        assert_eq!(viewer.phase(), ViewPhase::Loading);

        progress_tx.respond(Ok(vec![record("L2")]));
        viewer.poll();
        assert!(viewer.is_completed("L2"));
        assert_eq!(viewer.phase(), ViewPhase::Loading);

        course_tx.respond(Ok(course_with(&[&["L1", "L2"]])));
        viewer.poll();
        assert_eq!(selected_id(&viewer), Some("L1"));
        assert!(viewer.course_fetch.is_none());
        assert!(viewer.progress_fetch.is_none());

        viewer.select_lesson(lesson("L2"));
        viewer.poll();
        assert_eq!(selected_id(&viewer), Some("L2"));
    }

    #[test]
    fn mount_requests_course_and_progress() {
        let api = FakeApi {
            course: Some(course_with(&[&["L1", "L2"]])),
            progress: vec![record("L1")],
            ..FakeApi::default()
        };
        let mut viewer = CourseViewer::mount(&api, "c1");
        assert_eq!(
            api.calls(),
            vec!["GET /api/courses/c1", "GET /api/progress?courseId=c1"]
        );
        viewer.poll();
        assert_eq!(viewer.marker("L1"), LessonMarker::Completed);
        assert_eq!(viewer.marker("L2"), LessonMarker::NotStarted);
        assert_eq!(viewer.progress(), (1, 2));
    }

    #[test]
    fn mount_for_missing_course_ends_in_not_found() {
        let api = FakeApi::default();
        let mut viewer = CourseViewer::mount(&api, "nope");
        viewer.poll();
        assert_eq!(viewer.phase(), ViewPhase::NotFound);
    }
}
