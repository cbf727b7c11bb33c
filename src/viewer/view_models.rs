use super::CourseViewer;
use crate::view_models::{LessonRow, ModuleRow};

impl CourseViewer {
    /// Linhas do menu lateral, na ordem de navegação.
    pub fn module_rows(&self) -> Vec<ModuleRow> {
        let course = match self.course() {
            Some(c) => c,
            None => return Vec::new(),
        };
        let selected_id = self.selected_lesson().map(|l| l.id.as_str());

        course
            .modules
            .iter()
            .enumerate()
            .map(|(mi, module)| ModuleRow {
                id: module.id.clone(),
                number: mi + 1,
                title: module.title.clone(),
                open: self.is_module_open(&module.id),
                lessons: module
                    .lessons
                    .iter()
                    .map(|lesson| LessonRow {
                        lesson: lesson.clone(),
                        marker: self.marker(&lesson.id),
                        selected: selected_id == Some(lesson.id.as_str()),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::queries::tests::{course_with, lesson};
    use super::*;
    use crate::viewer::LessonMarker;

    #[test]
    fn rows_number_modules_from_one_and_mark_lessons() {
        let mut viewer = CourseViewer::new("c1");
        viewer.on_course_loaded(Ok(course_with(&[&["L1", "L2"], &["L3"]])));
        viewer.complete_lesson("L1");
        viewer.toggle_module("m1");

        let rows = viewer.module_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label(), "Módulo 1");
        assert_eq!(rows[1].label(), "Módulo 2");
        assert!(!rows[0].open);
        assert!(rows[1].open);

        // L1 concluída fez a seleção andar para L2
        assert_eq!(rows[0].lessons[0].marker, LessonMarker::Completed);
        assert_eq!(rows[0].lessons[0].icon(), "✔");
        assert_eq!(rows[0].lessons[1].marker, LessonMarker::Playing);
        assert!(rows[0].lessons[1].selected);
        assert_eq!(rows[1].lessons[0].label(), "○ Aula L3");
    }

    #[test]
    fn selected_and_completed_row_shows_completed_icon() {
        let mut viewer = CourseViewer::new("c1");
        viewer.on_course_loaded(Ok(course_with(&[&["L1"]])));
        viewer.complete_lesson("L1");
        viewer.select_lesson(lesson("L1"));

        let row = &viewer.module_rows()[0].lessons[0];
        assert!(row.selected);
        assert_eq!(row.icon(), "✔");
    }

    #[test]
    fn no_rows_before_course_loads() {
        assert!(CourseViewer::new("c1").module_rows().is_empty());
    }
}
