//! HTTP helpers for the auth API with a consistent timeout and error
//! mapping. Feature clients go through [`post_json`] so request setup stays
//! in one place. The helpers attach nothing beyond what callers put in the
//! body; token persistence is the auth feature's job.

use super::{config::AppConfig, errors::AppError};
use serde::{Serialize, de::DeserializeOwned};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
#[cfg(any(test, target_arch = "wasm32"))]
const MAX_ERROR_CHARS: usize = 200;

/// Posts JSON to the configured API and parses a JSON response. Non-2xx
/// responses become [`AppError::Http`] with a sanitized body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    send_post_json(&url, payload).await
}

#[cfg(target_arch = "wasm32")]
async fn send_post_json<T: DeserializeOwned>(url: &str, payload: String) -> Result<T, AppError> {
    use gloo_net::http::Request;

    let response = send_with_timeout(move |signal| {
        Request::post(url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

#[cfg(not(target_arch = "wasm32"))]
async fn send_post_json<T: DeserializeOwned>(url: &str, payload: String) -> Result<T, AppError> {
    let _ = (url, payload);
    Err(AppError::Network(
        "HTTP requests require a browser environment.".to_string(),
    ))
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(|err| {
        let mapped = classify_send_error(&err.to_string());
        log::warn!("request failed: {mapped}");
        mapped
    })
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(http_error(status, body))
    }
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path. An empty
/// base yields a same-origin relative URL.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into user-facing variants with timeout detection.
#[cfg(any(test, target_arch = "wasm32"))]
fn classify_send_error(message: &str) -> AppError {
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Wraps a non-2xx status and its body as an [`AppError::Http`].
#[cfg(any(test, target_arch = "wasm32"))]
fn http_error(status: u16, body: String) -> AppError {
    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and
/// truncating.
#[cfg(any(test, target_arch = "wasm32"))]
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, build_url_with_base, classify_send_error, http_error, sanitize_body};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.anteroom.dev/", "/auth/login"),
            "https://api.anteroom.dev/auth/login"
        );
        assert_eq!(
            build_url_with_base("https://api.anteroom.dev", "auth/login"),
            "https://api.anteroom.dev/auth/login"
        );
    }

    #[test]
    fn build_url_falls_back_to_relative_path() {
        assert_eq!(build_url_with_base("", "/auth/register"), "/auth/register");
        assert_eq!(build_url_with_base("   ", "/auth/verify"), "/auth/verify");
    }

    #[test]
    fn classify_send_error_detects_timeouts() {
        assert!(matches!(
            classify_send_error("The operation was aborted"),
            AppError::Timeout(_)
        ));
        assert!(matches!(
            classify_send_error("connection timeout"),
            AppError::Timeout(_)
        ));
        assert!(matches!(
            classify_send_error("dns failure"),
            AppError::Network(_)
        ));
    }

    #[test]
    fn http_error_sanitizes_bodies() {
        let err = http_error(500, "   ".to_string());
        assert_eq!(
            err,
            AppError::Http {
                status: 500,
                message: "Request failed.".to_string()
            }
        );

        let long = "x".repeat(400);
        match http_error(400, long) {
            AppError::Http { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.len(), 200);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn sanitize_body_trims_whitespace() {
        assert_eq!(sanitize_body("  oops \n".to_string()), "oops");
    }
}
