// ==========================================
// Система управления логистикой - API errors
// ==========================================
// Converts engine/store errors into user-facing errors. Every
// message carries the explicit reason; a failed operation is a
// no-op for the board.
// ==========================================

use thiserror::Error;

use crate::engine::error::AcceptError;
use crate::repository::error::StoreError;

/// API layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Input validation
    // ==========================================
    #[error("неверный ввод: {0}")]
    InvalidInput(String),

    #[error("неизвестная колонка: {0}")]
    UnknownStage(String),

    #[error("неизвестное действие: {0}")]
    UnknownAction(String),

    // ==========================================
    // Mutation rejections
    // ==========================================
    #[error("строка не выбрана: {0}")]
    InvalidSelector(String),

    #[error("ресурс не найден: {0}")]
    NotFound(String),

    // ==========================================
    // Generic
    // ==========================================
    #[error("внутренняя ошибка: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AcceptError> for ApiError {
    fn from(err: AcceptError) -> Self {
        match err {
            AcceptError::IndexOutOfRange { .. } => ApiError::InvalidSelector(err.to_string()),
            AcceptError::RowNotFound { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
