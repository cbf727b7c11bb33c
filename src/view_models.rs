// src/view_models.rs

use crate::model::Lesson;
use crate::viewer::LessonMarker;

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleRow {
    pub id: String,
    pub number: usize, // 1, 2, 3… na ordem da API
    pub title: String,
    pub open: bool,
    pub lessons: Vec<LessonRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonRow {
    pub lesson: Lesson,
    pub marker: LessonMarker,
    pub selected: bool,
}

impl ModuleRow {
    pub fn label(&self) -> String {
        format!("Módulo {}", self.number)
    }
}

impl LessonRow {
    pub fn icon(&self) -> &'static str {
        match self.marker {
            LessonMarker::Completed => "✔",
            LessonMarker::Playing => "▶",
            LessonMarker::NotStarted => "○",
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.lesson.title)
    }
}

impl LessonMarker {
    pub fn description(self) -> &'static str {
        match self {
            LessonMarker::Completed => "Concluída",
            LessonMarker::Playing => "Assistindo",
            LessonMarker::NotStarted => "Não iniciada",
        }
    }
}
