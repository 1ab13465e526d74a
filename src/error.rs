use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Request-terminal error taxonomy. Every variant maps to exactly one
/// status code; bodies use the `{"message": ...}` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("Unauthorized.")]
    Forbidden,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("{0}")]
    InvalidTransition(&'static str),
    #[error("Internal server error.")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::InvalidCredentials
            | ApiError::Conflict(_)
            | ApiError::InvalidTransition(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(ref e) = self {
            error!(error = %e, "internal error");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

/// Postgres unique_violation, used to surface duplicate email/slug as 400.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_contractual_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Unauthorized("missing token").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::NotFound("List not found.").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("User already exists.").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidTransition("Gift is not available.").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn forbidden_body_is_generic() {
        // A non-owner who knows the id must learn nothing beyond "no".
        assert_eq!(ApiError::Forbidden.to_string(), "Unauthorized.");
    }

    #[test]
    fn internal_hides_the_source_message() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused to db at 10.0.0.3"));
        assert_eq!(err.to_string(), "Internal server error.");
    }
}
