use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ValidationError;
use log::{error, warn};
use thiserror::Error;

/// Every failure a handler can report. Rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Invalid upload: {0}")]
    BadUpload(String),
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    pub fn candidate_not_found(id: i64) -> Self {
        ServiceError::NotFound(format!("Candidate {}", id))
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_)
            | ServiceError::BadRequest(_)
            | ServiceError::BadUpload(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) | ServiceError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        HttpResponse::build(status).json(serde_json::json!({ "error": self.to_string() }))
    }
}
