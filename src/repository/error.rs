// ==========================================
// Система управления логистикой - store errors
// ==========================================

use thiserror::Error;

/// Errors of the in-memory stores. The only failure mode is a
/// poisoned lock (a writer panicked mid-swap); it is surfaced, not
/// propagated as a panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("блокировка хранилища отравлена: {0}")]
    LockPoisoned(String),
}
