use crate::error::ApiError;
use crate::model::{Course, CourseDraft, CourseSummary, ProgressRecord, ProgressUpdate};
use serde::Serialize;

#[cfg(test)]
pub(crate) mod fake;
pub mod pending;
pub mod transport;

pub use pending::{Pending, take_ready};
use transport::{Decoder, Method, Request, decode_json, dispatch, ignore_body};

/// Cliente do servidor REST. Cada chamada sai uma vez, sem retry nem
/// timeout, e devolve um [`Pending`] para a tela consultar.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    ctx: Option<egui::Context>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ctx: None,
        }
    }

    /// Pede repaint ao egui quando uma resposta chega.
    pub fn with_repaint(mut self, ctx: &egui::Context) -> Self {
        self.ctx = Some(ctx.clone());
        self
    }

    pub fn courses_url(&self) -> String {
        format!("{}/api/courses", self.base_url)
    }

    pub fn course_url(&self, course_id: &str) -> String {
        format!("{}/api/courses/{}", self.base_url, encode_component(course_id))
    }

    pub fn progress_url(&self, course_id: &str) -> String {
        format!(
            "{}/api/progress?courseId={}",
            self.base_url,
            encode_component(course_id)
        )
    }

    pub fn record_progress_url(&self) -> String {
        format!("{}/api/progress", self.base_url)
    }

    pub fn manage_modules_url(&self, course_id: &str) -> String {
        format!(
            "{}/admin/courses/{}/modules",
            self.base_url,
            encode_component(course_id)
        )
    }

    fn get<T>(&self, url: String) -> Pending<T>
    where
        T: serde::de::DeserializeOwned + Send + 'static,
    {
        let request = Request {
            method: Method::Get,
            url,
            body: None,
        };
        self.start(request, decode_json::<T>)
    }

    fn send<B: Serialize>(&self, method: Method, url: String, body: &B) -> Pending<()> {
        match serde_json::to_value(body) {
            Ok(body) => self.start(
                Request {
                    method,
                    url,
                    body: Some(body),
                },
                ignore_body,
            ),
            Err(err) => Pending::ready(Err(ApiError::Decode {
                url,
                message: err.to_string(),
            })),
        }
    }

    fn start<T: Send + 'static>(&self, request: Request, decode: Decoder<T>) -> Pending<T> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let (responder, pending) = pending::pending(&request.url, self.ctx.clone());
        dispatch(request, responder, decode);
        pending
    }
}

/// Operações que as telas usam. Separado do cliente HTTP para que os testes
/// possam responder sem rede.
pub trait CourseApi {
    fn fetch_course(&self, course_id: &str) -> Pending<Course>;
    fn fetch_progress(&self, course_id: &str) -> Pending<Vec<ProgressRecord>>;
    fn fetch_courses(&self) -> Pending<Vec<CourseSummary>>;
    fn create_course(&self, draft: &CourseDraft) -> Pending<()>;
    fn update_course(&self, course_id: &str, draft: &CourseDraft) -> Pending<()>;
    fn delete_course(&self, course_id: &str) -> Pending<()>;
    fn record_progress(&self, update: &ProgressUpdate) -> Pending<()>;
}

impl CourseApi for ApiClient {
    fn fetch_course(&self, course_id: &str) -> Pending<Course> {
        self.get(self.course_url(course_id))
    }

    fn fetch_progress(&self, course_id: &str) -> Pending<Vec<ProgressRecord>> {
        self.get(self.progress_url(course_id))
    }

    fn fetch_courses(&self) -> Pending<Vec<CourseSummary>> {
        self.get(self.courses_url())
    }

    fn create_course(&self, draft: &CourseDraft) -> Pending<()> {
        self.send(Method::Post, self.courses_url(), draft)
    }

    fn update_course(&self, course_id: &str, draft: &CourseDraft) -> Pending<()> {
        self.send(Method::Put, self.course_url(course_id), draft)
    }

    fn delete_course(&self, course_id: &str) -> Pending<()> {
        let request = Request {
            method: Method::Delete,
            url: self.course_url(course_id),
            body: None,
        };
        self.start(request, ignore_body)
    }

    fn record_progress(&self, update: &ProgressUpdate) -> Pending<()> {
        self.send(Method::Post, self.record_progress_url(), update)
    }
}

/// Escapa um segmento de URL (ids e query string).
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_rest_layout() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.courses_url(), "http://localhost:3000/api/courses");
        assert_eq!(
            client.course_url("65f1c0"),
            "http://localhost:3000/api/courses/65f1c0"
        );
        assert_eq!(
            client.progress_url("65f1c0"),
            "http://localhost:3000/api/progress?courseId=65f1c0"
        );
        assert_eq!(
            client.manage_modules_url("65f1c0"),
            "http://localhost:3000/admin/courses/65f1c0/modules"
        );
    }

    #[test]
    fn same_origin_client_uses_relative_paths() {
        let client = ApiClient::new("");
        assert_eq!(client.courses_url(), "/api/courses");
        assert_eq!(client.record_progress_url(), "/api/progress");
    }

    #[test]
    fn ids_are_escaped() {
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_component("curso/1"), "curso%2F1");
        assert_eq!(encode_component("abc-_.~"), "abc-_.~");
    }
}
