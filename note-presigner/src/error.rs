// note-presigner/src/error.rs

use serde::Serialize;
use thiserror::Error;

/// 呼び出し境界でクライアントに返す固定メッセージ
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to process request";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// 種別の接頭辞を除いた原因の文言
    pub fn cause(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::ConfigError(msg)
            | AppError::InternalServerError(msg) => msg,
        }
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 呼び出し元に返すエラーペイロード `{error, message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.cause().to_string(),
            message: REQUEST_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}
