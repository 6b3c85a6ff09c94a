// ==========================================
// Система управления логистикой - action log store
// ==========================================
// Append-only audit trail of board mutations, session-scoped.
// ==========================================

use std::sync::Mutex;

use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::types::StageId;

use super::error::StoreError;

#[derive(Default)]
struct LogState {
    entries: Vec<ActionLog>,
    next_id: u64,
}

/// In-memory audit trail. Ids are a session-local monotonic counter.
#[derive(Default)]
pub struct ActionLogStore {
    state: Mutex<LogState>,
}

impl ActionLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; returns its id.
    pub fn append(
        &self,
        action_type: ActionType,
        source_stage: Option<StageId>,
        detail: impl Into<String>,
    ) -> Result<u64, StoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        state.next_id += 1;
        let id = state.next_id;
        state
            .entries
            .push(ActionLog::new(id, action_type, source_stage, detail));
        Ok(id)
    }

    /// Most recent entries, newest first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Result<Vec<ActionLog>, StoreError> {
        let state = self
            .state
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(state
            .entries
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let state = self
            .state
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(state.entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_recent_order() {
        let store = ActionLogStore::new();
        store
            .append(ActionType::AcceptSingle, Some(StageId::Demand), "first")
            .unwrap();
        store
            .append(ActionType::AcceptAll, Some(StageId::OptimizerPlan), "second")
            .unwrap();
        store.append(ActionType::ResetBoard, None, "third").unwrap();

        let recent = store.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].detail, "third");
        assert_eq!(recent[1].detail, "second");
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let store = ActionLogStore::new();
        let a = store.append(ActionType::AcceptSingle, None, "a").unwrap();
        let b = store.append(ActionType::AcceptSingle, None, "b").unwrap();
        assert!(b > a);
    }
}
