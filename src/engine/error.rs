// ==========================================
// Система управления логистикой - engine errors
// ==========================================
// A rejected mutation is a no-op: the caller keeps the previous
// board snapshot. Nothing here is fatal.
// ==========================================

use thiserror::Error;

use crate::domain::types::StageId;

/// Errors produced by the plan mutation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcceptError {
    /// Legacy index addressing pointed outside the stage.
    #[error("индекс строки вне диапазона: stage={stage}, index={index}, len={len}")]
    IndexOutOfRange {
        stage: StageId,
        index: usize,
        len: usize,
    },

    /// Key addressing matched no row in the source stage.
    #[error("строка не найдена: stage={stage}, selector={selector}")]
    RowNotFound { stage: StageId, selector: String },
}
