//! HTTP accessors for the certificate service.
//!
//! Every call is a single request: no retry, no caching. Non-2xx answers are
//! turned into [`ApiError`] with the message the service put in its
//! `{"error": ...}` body, so callers only have to log and notify.

pub mod candidates;
pub mod certificate_templates;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub const CANDIDATES_PATH: &str = "/api/candidats";
pub const CERTIFICATE_TEMPLATES_PATH: &str = "/api/certificate-templates";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decodes a successful JSON response, or maps the failure status.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Accepts any 2xx answer and ignores the body.
async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    if status == 404 {
        ApiError::NotFound(message)
    } else {
        ApiError::Status { status, message }
    }
}

/// Extracts `error` from a service error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn prefers_json_error_field() {
        assert_eq!(
            error_message(r#"{"error":"Candidate 4 not found"}"#),
            "Candidate 4 not found"
        );
    }

    #[test]
    fn falls_back_to_plain_body() {
        assert_eq!(error_message("  Bad gateway \n"), "Bad gateway");
        assert_eq!(error_message(""), "");
    }
}
