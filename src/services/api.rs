use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::FormData;

use crate::services::Session;

const API_BASE: &str = match option_env!("BLOODLINK_API_BASE") {
    Some(base) => base,
    None => "http://127.0.0.1:8080/api",
};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    NetworkError(String),
    ServerError(String),
    ValidationError(String),
    Unauthorized,
    NotFound,
}

impl From<gloo::net::Error> for ApiError {
    fn from(error: gloo::net::Error) -> Self {
        ApiError::NetworkError(error.to_string())
    }
}

impl ApiError {
    pub fn describe(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::NotFound => "The requested record was not found".to_string(),
            ApiError::ValidationError(msg) => msg.clone(),
            ApiError::NetworkError(msg) => format!("Network error: {}", msg),
            ApiError::ServerError(msg) => format!("Server error: {}", msg),
        }
    }
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match Session::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub async fn get_json<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = authorize(Request::get(&url(path)))
        .header("Content-Type", "application/json")
        .send()
        .await?;

    handle_response(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = authorize(Request::post(&url(path)))
        .header("Content-Type", "application/json")
        .json(body)?
        .send()
        .await?;

    handle_response(response).await
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = authorize(Request::put(&url(path)))
        .header("Content-Type", "application/json")
        .json(body)?
        .send()
        .await?;

    handle_response(response).await
}

/// PUT with an empty body, for status-flip endpoints like closing a
/// market post.
pub async fn put_empty<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = authorize(Request::put(&url(path)))
        .header("Content-Type", "application/json")
        .send()
        .await?;

    handle_response(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&url(path))).send().await?;

    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

/// Multipart upload. The Content-Type header is left to the browser so
/// it can set the form boundary.
pub async fn post_form<T>(path: &str, form: FormData) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = authorize(Request::post(&url(path)))
        .body(form)?
        .send()
        .await?;

    handle_response(response).await
}

async fn handle_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();

    match status {
        200..=299 => {
            let body: serde_json::Value = response.json().await?;
            // Most endpoints wrap the payload in { data }; auth and a few
            // admin routes return the object bare.
            let payload = match body.get("data") {
                Some(data) if !data.is_null() => data.clone(),
                _ => body,
            };
            serde_json::from_value(payload).map_err(|e| {
                log::error!("response decode failed: {}", e);
                ApiError::ServerError(format!("Unexpected response shape: {}", e))
            })
        }
        _ => Err(status_error(response).await),
    }
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let error = match status {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        400..=499 => ApiError::ValidationError(error_message(response, status).await),
        500..=599 => ApiError::ServerError(error_message(response, status).await),
        _ => ApiError::NetworkError(format!("Unexpected status: {}", status)),
    };
    log::warn!("request failed: {:?}", error);
    error
}

/// Backend errors carry a message string; fall back to the status code
/// when the body is not JSON or has no message.
async fn error_message(response: Response, status: u16) -> String {
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status)),
        Err(_) => format!("HTTP {}", status),
    }
}
