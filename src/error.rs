use thiserror::Error;

/// Falha de uma chamada ao servidor. "Não existe" e "erro de rede" não se
/// distinguem: a tela cai no mesmo estado vazio.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("falha de conexão com {url}: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP {status} em {url}")]
    Status { status: u16, url: String },

    #[error("resposta JSON inválida de {url}: {message}")]
    Decode { url: String, message: String },

    #[error("requisição abandonada antes de responder")]
    Abandoned,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Nível de log para a tela que recebe o erro. O transporte só registra
    /// em debug; quem decide a severidade é a página.
    pub fn log_level(&self) -> log::Level {
        match self.status() {
            Some(404) => log::Level::Warn,
            _ => log::Level::Error,
        }
    }
}
