use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "videoPublicId")]
    pub video_public_id: Option<String>,
}

impl Lesson {
    /// Referência do vídeo; sem referência o player fica vazio.
    pub fn video_ref(&self) -> &str {
        self.video_public_id.as_deref().unwrap_or("")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Module {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// Linha de `/api/courses`. Os módulos podem vir resumidos (só ids), por
/// isso só interessa quantos são.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CourseSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modules: Vec<serde_json::Value>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl CourseSummary {
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LessonRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl LessonRef {
    pub fn id(&self) -> &str {
        match self {
            LessonRef::Id(id) => id,
            LessonRef::Populated { id } => id,
        }
    }
}

/// Registro de `/api/progress`: marca uma aula como concluída pelo aluno
/// da sessão. O resto dos campos não é usado.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub lesson: LessonRef,
}

impl ProgressRecord {
    pub fn lesson_id(&self) -> &str {
        self.lesson.id()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub course_id: String,
    pub lesson_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
}

impl From<&CourseSummary> for CourseDraft {
    fn from(course: &CourseSummary) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Catalog,
    Viewer { course_id: String },
    Admin,
}
