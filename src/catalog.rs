// src/catalog.rs

use crate::api::{CourseApi, Pending, take_ready};
use crate::model::CourseSummary;

/// Página inicial do aluno: lista de cursos para assistir.
#[derive(Default)]
pub struct Catalog {
    courses: Vec<CourseSummary>,
    loading: bool,
    fetch: Option<Pending<Vec<CourseSummary>>>,
}

impl Catalog {
    pub fn mount(api: &dyn CourseApi) -> Self {
        Self {
            courses: Vec::new(),
            loading: true,
            fetch: Some(api.fetch_courses()),
        }
    }

    pub fn poll(&mut self) {
        if let Some(result) = take_ready(&mut self.fetch) {
            match result {
                Ok(courses) => self.courses = courses,
                Err(err) => log::error!("erro ao buscar cursos: {err}"),
            }
            self.loading = false;
        }
    }

    pub fn courses(&self) -> &[CourseSummary] {
        &self.courses
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;

    #[test]
    fn lists_courses_after_fetch() {
        let api = FakeApi {
            courses: vec![CourseSummary {
                id: "c1".into(),
                title: "Rust".into(),
                description: String::new(),
                modules: vec![],
                thumbnail: None,
            }],
            ..FakeApi::default()
        };
        let mut catalog = Catalog::mount(&api);
        assert!(catalog.is_loading());
        catalog.poll();
        assert!(!catalog.is_loading());
        assert_eq!(catalog.courses()[0].title, "Rust");
    }
}
