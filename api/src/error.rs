//! Unified error types for the DSCatalog API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Persistence signals raised by repositories
//! - `AppError`: Service layer errors, rendered as HTTP responses
//!
//! Repositories never return `AppError`, and services never let a
//! `DomainError` escape: the `From` impl below is the translation point.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Repository layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The row does not exist (empty delete, missing reference, no row updated)
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// A foreign key or unique constraint rejected the statement
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                DomainError::IntegrityViolation(msg)
            }
            _ => match e {
                sea_orm::DbErr::RecordNotFound(msg) => DomainError::NotFound(msg),
                sea_orm::DbErr::RecordNotUpdated => {
                    DomainError::NotFound("No row was updated".to_string())
                }
                e => DomainError::Database(e.to_string()),
            },
        }
    }
}

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMessage {
    pub field_name: String,
    pub message: String,
}

impl FieldMessage {
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}

/// Application layer errors - returned by services and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Integrity or dependency conflict, e.g. deleting a referenced row
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldMessage>),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(msg) => AppError::ResourceNotFound(msg),
            DomainError::IntegrityViolation(msg) => AppError::Database(msg),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Database(msg) => AppError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    timestamp: DateTime<Utc>,
    status: u16,
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldMessage>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, errors) = match self {
            AppError::ResourceNotFound(msg) => {
                (StatusCode::NOT_FOUND, "Resource not found", msg, Vec::new())
            }
            AppError::Database(msg) => {
                (StatusCode::BAD_REQUEST, "Database exception", msg, Vec::new())
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation exception",
                "Invalid data".to_string(),
                errors,
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", msg, Vec::new()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    "Unexpected error".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error,
            message,
            errors,
        });

        (status, body).into_response()
    }
}
