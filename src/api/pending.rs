use crate::error::ApiError;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Resultado de uma requisição em andamento. Entrega no máximo um valor;
/// a tela dona consulta com [`Pending::poll`] a cada frame.
pub struct Pending<T> {
    rx: Receiver<Result<T, ApiError>>,
}

/// Lado do worker. Se a tela já foi descartada o resultado é jogado fora.
pub struct Responder<T> {
    tx: Sender<Result<T, ApiError>>,
    url: String,
    ctx: Option<egui::Context>,
}

pub fn pending<T>(url: &str, ctx: Option<egui::Context>) -> (Responder<T>, Pending<T>) {
    let (tx, rx) = mpsc::channel();
    (
        Responder {
            tx,
            url: url.to_string(),
            ctx,
        },
        Pending { rx },
    )
}

impl<T> Pending<T> {
    /// Já resolvido; útil quando a requisição nem chega a sair.
    pub fn ready(result: Result<T, ApiError>) -> Self {
        let (responder, pending) = pending("", None);
        responder.respond(result);
        pending
    }

    pub fn poll(&self) -> Option<Result<T, ApiError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ApiError::Abandoned)),
        }
    }
}

impl<T> Responder<T> {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn respond(self, result: Result<T, ApiError>) {
        if self.tx.send(result).is_err() {
            log::debug!("resposta de {} descartada: a tela já foi fechada", self.url);
            return;
        }
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

/// Consome o resultado do slot quando estiver pronto, deixando-o vazio.
pub fn take_ready<T>(slot: &mut Option<Pending<T>>) -> Option<Result<T, ApiError>> {
    let result = slot.as_ref()?.poll()?;
    *slot = None;
    Some(result)
}
