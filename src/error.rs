use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("Internal Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Convert into the `{ success, message, field }` failure envelope the
    /// surrounding app consumes.
    pub fn to_response<T: serde::Serialize>(&self) -> ApiResponse<T> {
        let field = match self {
            AppError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };
        ApiResponse::error(self.to_string(), field)
    }
}

pub type AppResult<T> = Result<T, AppError>;
