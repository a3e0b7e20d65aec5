use actix_web::{HttpResponse, ResponseError};
use log::error;
use rusqlite::Error as SqliteError;
use serde::Serialize;
use std::io;
use thiserror::Error;
/// HTTP error response body
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    // ==== business failures ====
    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Devi accettare l'Informativa sulla Privacy per procedere.")]
    ConsentMissing,

    #[error("Unauthorized access")]
    Unauthorized(String),

    #[error("biz error: {0}")]
    BizError(String),

    #[error("File upload failed: {0}")]
    FileUpload(String),

    // ==== system failures ====
    #[error("SQLite error: {0}")]
    Sqlite(#[from] SqliteError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Internal server error")]
    Internal(String),
}
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("{}", e))
    }
}
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, msg) = match self {
            AppError::NotFound => (actix_web::http::StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation(_) => (actix_web::http::StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ConsentMissing => (actix_web::http::StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Unauthorized(msg) => (actix_web::http::StatusCode::UNAUTHORIZED, msg.to_string()),
            AppError::FileUpload(_) => (actix_web::http::StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Sqlite(e) => {
                error!("{:?}", e);
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, "Service error".to_string())
            }
            AppError::Json(e) => {
                error!("{:?}", e);
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, "Service error".to_string())
            }
            AppError::Io(e) => {
                error!("{:?}", e);
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, "Service error".to_string())
            }
            AppError::Internal(e) => {
                error!("{:?}", e);
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, "Service error".to_string())
            }
            AppError::BizError(e) => {
                error!("{:?}", e);
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        HttpResponse::build(status).json(ErrorResponse { code: status.as_u16(), message: msg })
    }
}
