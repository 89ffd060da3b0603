use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{error, warn};

use crate::render;

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid value {value:?} for field `{field}`")]
    InvalidField { field: &'static str, value: String },
}

impl From<figment::Error> for RegistryError {
    fn from(e: figment::Error) -> Self {
        RegistryError::Config(Box::new(e))
    }
}

impl RegistryError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        RegistryError::InvalidField {
            field,
            value: value.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RegistryError::MissingField(_) | RegistryError::InvalidField { .. } => {
                StatusCode::BAD_REQUEST
            }
            RegistryError::Database(_) | RegistryError::Io(_) | RegistryError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match status {
            StatusCode::BAD_REQUEST => {
                warn!(error = %self, "rejected form submission");
                self.to_string()
            }
            _ => {
                error!(error = %self, "request failed");
                "An internal server error occurred.".to_string()
            }
        };
        (status, Html(render::error_page(status, &message))).into_response()
    }
}
