// ==========================================
// Система управления логистикой - board store
// ==========================================
// Holds the single live board snapshot. Readers receive the current
// `Arc<Board>` and keep it valid for as long as they like; writers
// replace the snapshot wholesale (copy-on-write). The mutex guards
// only the swap - operations themselves run on plain references.
// ==========================================

use std::sync::{Arc, Mutex};

use crate::domain::row::Board;

use super::error::StoreError;

/// Snapshot container for the live board.
pub struct BoardStore {
    /// Seed the session started from; `reset` restores it.
    seed: Arc<Board>,
    current: Mutex<Arc<Board>>,
}

impl BoardStore {
    pub fn new(seed: Board) -> Self {
        let seed = Arc::new(seed);
        BoardStore {
            current: Mutex::new(seed.clone()),
            seed,
        }
    }

    /// Current snapshot. Cheap; hands out the `Arc`, never a copy.
    pub fn load(&self) -> Result<Arc<Board>, StoreError> {
        let guard = self
            .current
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(guard.clone())
    }

    /// Replace the live snapshot wholesale. Returns the new `Arc`.
    pub fn replace(&self, next: Board) -> Result<Arc<Board>, StoreError> {
        let next = Arc::new(next);
        let mut guard = self
            .current
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        *guard = next.clone();
        Ok(next)
    }

    /// Restore the seed snapshot (session restart).
    pub fn reset(&self) -> Result<Arc<Board>, StoreError> {
        let mut guard = self
            .current
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        *guard = self.seed.clone();
        Ok(self.seed.clone())
    }
}
