// src/config.rs

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_API_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_VIDEO_URL: &str = "https://res.cloudinary.com/demo/video/upload";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Origem da API REST, sem barra final. Vazio = mesma origem (web).
    pub api_base_url: String,
    /// Prefixo onde o `videoPublicId` de cada aula é publicado.
    pub video_base_url: String,
}

impl Config {
    pub fn new(api_base_url: &str, video_base_url: &str) -> Self {
        Self {
            api_base_url: trim_trailing_slashes(api_base_url),
            video_base_url: trim_trailing_slashes(video_base_url),
        }
    }

    pub fn load() -> Self {
        let config = Self::new(&api_base_url(), &video_base_url());
        log::info!(
            "API em '{}', vídeos em '{}'",
            config.api_base_url,
            config.video_base_url
        );
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load()
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn trim_trailing_slashes(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn api_base_url() -> String {
    std::env::var("COURSE_PORTAL_API_URL")
        .ok()
        .and_then(|v| normalize(&v))
        .unwrap_or_else(|| DEFAULT_NATIVE_API_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn video_base_url() -> String {
    std::env::var("COURSE_PORTAL_VIDEO_URL")
        .ok()
        .and_then(|v| normalize(&v))
        .unwrap_or_else(|| DEFAULT_VIDEO_URL.to_string())
}

// Na web as chamadas vão para a mesma origem que serviu a página.
#[cfg(target_arch = "wasm32")]
fn api_base_url() -> String {
    option_env!("COURSE_PORTAL_API_URL")
        .and_then(normalize)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn video_base_url() -> String {
    option_env!("COURSE_PORTAL_VIDEO_URL")
        .and_then(normalize)
        .unwrap_or_else(|| DEFAULT_VIDEO_URL.to_string())
}
