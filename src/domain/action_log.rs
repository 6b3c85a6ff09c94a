// ==========================================
// Система управления логистикой - action log
// ==========================================
// Audit trail of user-triggered board mutations. Session-scoped,
// kept by the action log store; surfaced on the dashboard.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::StageId;

/// Kind of a logged operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    AcceptSingle,
    AcceptAll,
    ResetBoard,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::AcceptSingle => write!(f, "ACCEPT_SINGLE"),
            ActionType::AcceptAll => write!(f, "ACCEPT_ALL"),
            ActionType::ResetBoard => write!(f, "RESET_BOARD"),
        }
    }
}

/// One audit entry. `detail` is a human-readable summary of the
/// selector/action involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLog {
    pub action_id: u64,
    pub action_type: ActionType,
    pub source_stage: Option<StageId>,
    pub detail: String,
    pub action_ts: DateTime<Utc>,
}

impl ActionLog {
    pub fn new(
        action_id: u64,
        action_type: ActionType,
        source_stage: Option<StageId>,
        detail: impl Into<String>,
    ) -> Self {
        ActionLog {
            action_id,
            action_type,
            source_stage,
            detail: detail.into(),
            action_ts: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_type_wire_form() {
        let json = serde_json::to_value(ActionType::AcceptAll).unwrap();
        assert_eq!(json, "ACCEPT_ALL");
    }

    #[test]
    fn test_action_log_shape() {
        let entry = ActionLog::new(
            1,
            ActionType::AcceptSingle,
            Some(StageId::OptimizerPlan),
            "index=0, action=acceptWagon",
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["actionType"], "ACCEPT_SINGLE");
        assert_eq!(json["sourceStage"], "optimizerPlan");
    }
}
