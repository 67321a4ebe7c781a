use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use minijinja::HtmlEscape;
use thiserror::Error as ThisError;
use tracing::error;

use super::validation::ValidationError;

#[derive(Debug, ThisError)]
pub enum DashError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl DashError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DashError::Validation(_))
    }
}

impl IntoResponse for DashError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            DashError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            DashError::TemplateError(_)
            | DashError::IoError(_)
            | DashError::HttpClientError(_)
            | DashError::RactorError(_)
            | DashError::DatabaseError(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        let body = format!(
            "<!doctype html><title>{code}</title><h1>{code}</h1><p>{message}</p>",
            code = status.as_u16(),
            message = HtmlEscape(&message),
        );
        (status, Html(body)).into_response()
    }
}
