//! Error handling - converts failures into the contract's JSON error bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use scribe_shared::ErrorBody;
use std::fmt;
use uuid::Uuid;

use scribe_core::error::{DomainError, RepoError};

/// Application-level error type behind every non-2xx response.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(Uuid),
    Store { message: String, error: String },
}

impl AppError {
    /// Wrap a store fault with the route's 500 message.
    pub fn store(message: impl Into<String>, err: RepoError) -> Self {
        AppError::Store {
            message: message.into(),
            error: err.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(id) => write!(f, "Blog not found with ID: {}", id),
            AppError::Store { message, error } => write!(f, "{}: {}", message, error),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(msg) => ErrorBody::new(msg.clone()),
            AppError::NotFound(id) => {
                tracing::error!("Blog not found with ID: {}", id);
                ErrorBody::new("Blog not found")
            }
            AppError::Store { message, error } => {
                tracing::error!("{}: {}", message, error);
                ErrorBody::new(message.clone()).with_error(error.clone())
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(id) => AppError::NotFound(id),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
