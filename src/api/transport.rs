use super::pending::Responder;
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// Converte o corpo da resposta no tipo esperado.
pub type Decoder<T> = fn(&str, &str) -> Result<T, ApiError>;

pub fn decode_json<T: serde::de::DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}

pub fn ignore_body(_url: &str, _body: &str) -> Result<(), ApiError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn dispatch<T: Send + 'static>(request: Request, responder: Responder<T>, decode: Decoder<T>) {
    std::thread::spawn(move || {
        let result = fetch_text(&request).and_then(|body| decode(&request.url, &body));
        if let Err(err) = &result {
            log::debug!("{} {}: {err}", request.method.as_str(), responder.url());
        }
        responder.respond(result);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_text(request: &Request) -> Result<String, ApiError> {
    let transport = |err: reqwest::Error| ApiError::Transport {
        url: request.url.clone(),
        message: err.to_string(),
    };

    let client = reqwest::blocking::Client::new();
    let mut builder = match request.method {
        Method::Get => client.get(&request.url),
        Method::Post => client.post(&request.url),
        Method::Put => client.put(&request.url),
        Method::Delete => client.delete(&request.url),
    };
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }

    let response = builder.send().map_err(transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: request.url.clone(),
        });
    }
    response.text().map_err(transport)
}

#[cfg(target_arch = "wasm32")]
pub fn dispatch<T: 'static>(request: Request, responder: Responder<T>, decode: Decoder<T>) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = match fetch_text(&request).await {
            Ok(body) => decode(&request.url, &body),
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            log::debug!("{} {}: {err}", request.method.as_str(), responder.url());
        }
        responder.respond(result);
    });
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(request: &Request) -> Result<String, ApiError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{RequestInit, RequestMode, Response};

    let transport = |err: JsValue| ApiError::Transport {
        url: request.url.clone(),
        message: format!("{err:?}"),
    };

    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(&body.to_string()));
    }

    let req = web_sys::Request::new_with_str_and_init(&request.url, &opts).map_err(transport)?;
    if request.body.is_some() {
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport {
        url: request.url.clone(),
        message: "não existe window no ambiente WASM".into(),
    })?;

    let value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(transport)?;
    let response: Response = value.dyn_into().map_err(transport)?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: request.url.clone(),
        });
    }

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text.as_string().ok_or_else(|| ApiError::Decode {
        url: request.url.clone(),
        message: "response.text() não devolveu string".into(),
    })
}
