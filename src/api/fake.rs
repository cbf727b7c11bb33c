use super::{CourseApi, Pending};
use crate::error::ApiError;
use crate::model::{Course, CourseDraft, CourseSummary, ProgressRecord, ProgressUpdate};
use std::cell::RefCell;

/// API em memória: responde na hora e anota cada chamada.
#[derive(Default)]
pub struct FakeApi {
    pub course: Option<Course>,
    pub progress: Vec<ProgressRecord>,
    pub courses: Vec<CourseSummary>,
    pub fail_mutations: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn note(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation(&self, url: String) -> Pending<()> {
        if self.fail_mutations {
            Pending::ready(Err(ApiError::Status { status: 500, url }))
        } else {
            Pending::ready(Ok(()))
        }
    }
}

impl CourseApi for FakeApi {
    fn fetch_course(&self, course_id: &str) -> Pending<Course> {
        let url = format!("/api/courses/{course_id}");
        self.note(format!("GET {url}"));
        Pending::ready(self.course.clone().ok_or(ApiError::Status { status: 404, url }))
    }

    fn fetch_progress(&self, course_id: &str) -> Pending<Vec<ProgressRecord>> {
        self.note(format!("GET /api/progress?courseId={course_id}"));
        Pending::ready(Ok(self.progress.clone()))
    }

    fn fetch_courses(&self) -> Pending<Vec<CourseSummary>> {
        self.note("GET /api/courses".to_string());
        Pending::ready(Ok(self.courses.clone()))
    }

    fn create_course(&self, draft: &CourseDraft) -> Pending<()> {
        self.note(format!("POST /api/courses {}", draft.title));
        self.mutation("/api/courses".to_string())
    }

    fn update_course(&self, course_id: &str, draft: &CourseDraft) -> Pending<()> {
        self.note(format!("PUT /api/courses/{course_id} {}", draft.title));
        self.mutation(format!("/api/courses/{course_id}"))
    }

    fn delete_course(&self, course_id: &str) -> Pending<()> {
        self.note(format!("DELETE /api/courses/{course_id}"));
        self.mutation(format!("/api/courses/{course_id}"))
    }

    fn record_progress(&self, update: &ProgressUpdate) -> Pending<()> {
        self.note(format!("POST /api/progress {}", update.lesson_id));
        self.mutation("/api/progress".to_string())
    }
}
