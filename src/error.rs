use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    ValidationFailed(HashMap<String, String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let message = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string());
                (field.to_string(), message)
            })
            .collect();

        AppError::ValidationFailed(field_errors)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationFailed(field_errors) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": "ValidationFailed",
                    "message": "Invalid request.",
                    "details": field_errors,
                }),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": "BadRequest",
                    "message": msg,
                }),
            ),
            AppError::RecipeNotFound(id) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({
                    "error": "NotFound",
                    "message": format!("Recipe {id} not found"),
                }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": "InternalServerError",
                        "message": "An unexpected error occurred. Please try again later.",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
