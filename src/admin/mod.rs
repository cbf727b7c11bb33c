use crate::api::{CourseApi, Pending, take_ready};
use crate::error::ApiError;
use crate::model::{CourseDraft, CourseSummary};

pub mod dialogs;

pub use dialogs::{CourseForm, DialogOutcome, Mutation};

/// Ações de cada linha da tabela (e o botão de criar).
#[derive(Clone, Debug, PartialEq)]
pub enum TableAction {
    Create,
    Edit(CourseSummary),
    Delete(CourseSummary),
    ManageModules(String),
}

/// Tabela de cursos do administrador. O curso em `editing`/`deleting` é o
/// que abre cada diálogo: aberto ⇔ `Some`.
#[derive(Default)]
pub struct CoursesTable {
    courses: Vec<CourseSummary>,
    loading: bool,
    editing: Option<CourseSummary>,
    deleting: Option<CourseSummary>,
    creating: bool,
    fetch: Option<Pending<Vec<CourseSummary>>>,
    // Gravações de diálogos fechados antes de a resposta chegar.
    settling: Vec<Pending<()>>,
    pub create_form: CourseForm,
    pub edit_form: CourseForm,
    pub delete: Mutation,
}

impl CoursesTable {
    pub fn mount(api: &dyn CourseApi) -> Self {
        let mut table = Self {
            loading: true,
            ..Self::default()
        };
        table.reload(api);
        table
    }

    /// Busca a lista inteira de novo. É o único efeito de um diálogo que
    /// terminou bem.
    pub fn reload(&mut self, api: &dyn CourseApi) {
        self.fetch = Some(api.fetch_courses());
    }

    pub fn on_courses_loaded(&mut self, result: Result<Vec<CourseSummary>, ApiError>) {
        match result {
            Ok(courses) => self.courses = courses,
            Err(err) => log::error!("erro ao buscar cursos: {err}"),
        }
        self.loading = false;
    }

    pub fn poll(&mut self, api: &dyn CourseApi) {
        if let Some(result) = take_ready(&mut self.fetch) {
            self.on_courses_loaded(result);
        }

        if self.create_form.poll() == DialogOutcome::Succeeded {
            log::info!("curso criado");
            self.close_create();
            self.reload(api);
        }
        if self.edit_form.poll() == DialogOutcome::Succeeded {
            log::info!("curso atualizado");
            self.close_edit();
            self.reload(api);
        }
        if self.delete.poll() == DialogOutcome::Succeeded {
            log::info!("curso removido");
            self.close_delete();
            self.reload(api);
        }

        let mut refetch = false;
        self.settling.retain(|save| match save.poll() {
            None => true,
            Some(Ok(())) => {
                refetch = true;
                false
            }
            Some(Err(err)) => {
                log::error!("gravação de diálogo fechado falhou: {err}");
                false
            }
        });
        if refetch {
            self.reload(api);
        }
    }

    /// Gravações que ainda correm depois de o diálogo ter sido fechado.
    pub fn settling_count(&self) -> usize {
        self.settling.len()
    }

    fn keep_settling(&mut self, pending: Option<Pending<()>>) {
        if let Some(pending) = pending {
            log::debug!("diálogo fechado com gravação em andamento");
            self.settling.push(pending);
        }
    }

    pub fn apply(&mut self, action: TableAction) -> Option<String> {
        match action {
            TableAction::Create => self.open_create(),
            TableAction::Edit(course) => self.open_edit(course),
            TableAction::Delete(course) => self.open_delete(course),
            TableAction::ManageModules(course_id) => return Some(course_id),
        }
        None
    }

    pub fn courses(&self) -> &[CourseSummary] {
        &self.courses
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn open_create(&mut self) {
        self.creating = true;
        self.create_form.reset(CourseDraft::default());
    }

    pub fn close_create(&mut self) {
        let inflight = self.create_form.mutation.detach();
        self.keep_settling(inflight);
        self.creating = false;
        self.create_form.reset(CourseDraft::default());
    }

    pub fn is_create_open(&self) -> bool {
        self.creating
    }

    pub fn submit_create(&mut self, api: &dyn CourseApi) {
        self.create_form.submit(|draft| api.create_course(draft));
    }

    pub fn open_edit(&mut self, course: CourseSummary) {
        self.edit_form.reset(CourseDraft::from(&course));
        self.editing = Some(course);
    }

    pub fn close_edit(&mut self) {
        let inflight = self.edit_form.mutation.detach();
        self.keep_settling(inflight);
        self.editing = None;
        self.edit_form.reset(CourseDraft::default());
    }

    pub fn editing(&self) -> Option<&CourseSummary> {
        self.editing.as_ref()
    }

    pub fn is_edit_open(&self) -> bool {
        self.editing.is_some()
    }

    pub fn submit_edit(&mut self, api: &dyn CourseApi) {
        if let Some(course) = &self.editing {
            let course_id = course.id.clone();
            self.edit_form
                .submit(|draft| api.update_course(&course_id, draft));
        }
    }

    pub fn open_delete(&mut self, course: CourseSummary) {
        self.delete.reset();
        self.deleting = Some(course);
    }

    pub fn close_delete(&mut self) {
        let inflight = self.delete.detach();
        self.keep_settling(inflight);
        self.deleting = None;
        self.delete.reset();
    }

    pub fn deleting(&self) -> Option<&CourseSummary> {
        self.deleting.as_ref()
    }

    pub fn is_delete_open(&self) -> bool {
        self.deleting.is_some()
    }

    pub fn confirm_delete(&mut self, api: &dyn CourseApi) {
        if self.delete.is_busy() {
            return;
        }
        if let Some(course) = &self.deleting {
            self.delete.start(api.delete_course(&course.id));
        }
    }
}
