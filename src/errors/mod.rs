use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error types for the wiki application
#[derive(Debug)]
pub enum WikiError {
    Io(io::Error),
    /// No `<title>.txt` file exists. View and edit handlers intercept this
    /// before it reaches the response layer.
    PageNotFound,
    /// Title contains characters outside the allowed set. Reported as a
    /// plain not-found so the URL space leaks nothing about the filesystem.
    InvalidTitle,
    Template(String),
}

impl From<io::Error> for WikiError {
    fn from(err: io::Error) -> Self {
        WikiError::Io(err)
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match self {
            WikiError::PageNotFound => (StatusCode::NOT_FOUND, "Page not found").into_response(),
            WikiError::InvalidTitle => (StatusCode::NOT_FOUND, "Not found").into_response(),
            WikiError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("I/O error: {}", e),
            )
                .into_response(),
            WikiError::Template(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response(),
        }
    }
}
