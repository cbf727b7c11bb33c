use crate::api::{Pending, take_ready};
use crate::model::CourseDraft;

#[derive(Clone, Debug, PartialEq)]
pub enum DialogOutcome {
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// Mutação disparada por um diálogo. O erro fica no próprio diálogo;
/// a tabela nunca mostra erros.
#[derive(Default)]
pub struct Mutation {
    pending: Option<Pending<()>>,
    pub error: Option<String>,
}

impl Mutation {
    pub fn start(&mut self, pending: Pending<()>) {
        self.error = None;
        self.pending = Some(pending);
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self) -> DialogOutcome {
        match take_ready(&mut self.pending) {
            Some(Ok(())) => DialogOutcome::Succeeded,
            Some(Err(err)) => {
                let message = err.to_string();
                self.error = Some(message.clone());
                DialogOutcome::Failed(message)
            }
            None if self.pending.is_some() => DialogOutcome::Pending,
            None => DialogOutcome::Idle,
        }
    }

    pub fn reset(&mut self) {
        self.pending = None;
        self.error = None;
    }

    /// Solta a gravação em andamento para que outro dono a acompanhe.
    pub fn detach(&mut self) -> Option<Pending<()>> {
        self.error = None;
        self.pending.take()
    }
}

/// Formulário de criação/edição de curso.
#[derive(Default)]
pub struct CourseForm {
    pub draft: CourseDraft,
    pub mutation: Mutation,
}

impl CourseForm {
    pub fn reset(&mut self, draft: CourseDraft) {
        self.draft = draft;
        self.mutation.reset();
    }

    pub fn validated(&self) -> Result<CourseDraft, String> {
        let title = self.draft.title.trim();
        if title.is_empty() {
            return Err("O título é obrigatório.".to_string());
        }
        Ok(CourseDraft {
            title: title.to_string(),
            description: self.draft.description.trim().to_string(),
        })
    }

    /// Valida e, se estiver tudo certo, dispara `send`. Ignorado enquanto
    /// outra gravação estiver em andamento.
    pub fn submit(&mut self, send: impl FnOnce(&CourseDraft) -> Pending<()>) {
        if self.mutation.is_busy() {
            return;
        }
        match self.validated() {
            Ok(draft) => self.mutation.start(send(&draft)),
            Err(message) => self.mutation.error = Some(message),
        }
    }

    pub fn poll(&mut self) -> DialogOutcome {
        self.mutation.poll()
    }
}
