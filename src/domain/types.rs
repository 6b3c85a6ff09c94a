// ==========================================
// Система управления логистикой - domain types
// ==========================================
// Closed vocabularies of the planning pipeline. Stage names and
// action names keep their historical camelCase wire forms - they
// are the contract of the presentation shell.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Plan stage (board column)
// ==========================================
// The stage set is fixed; there are no dynamic stages. Order is
// the pipeline order and is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StageId {
    Demand,
    OptimizerPlan,
    ProjectPlan,
    ApprovedPlan,
    Execution,
}

impl StageId {
    /// All stages in pipeline order.
    pub const ALL: [StageId; 5] = [
        StageId::Demand,
        StageId::OptimizerPlan,
        StageId::ProjectPlan,
        StageId::ApprovedPlan,
        StageId::Execution,
    ];

    /// Historical wire name (frontend contract).
    pub fn as_str(&self) -> &'static str {
        match self {
            StageId::Demand => "demand",
            StageId::OptimizerPlan => "optimizerPlan",
            StageId::ProjectPlan => "projectPlan",
            StageId::ApprovedPlan => "approvedPlan",
            StageId::Execution => "execution",
        }
    }

    /// Parse a wire name. Unknown names are a boundary error,
    /// handled by the API layer.
    pub fn parse(name: &str) -> Option<StageId> {
        match name {
            "demand" => Some(StageId::Demand),
            "optimizerPlan" => Some(StageId::OptimizerPlan),
            "projectPlan" => Some(StageId::ProjectPlan),
            "approvedPlan" => Some(StageId::ApprovedPlan),
            "execution" => Some(StageId::Execution),
            _ => None,
        }
    }

    /// Localized stage title (i18n key `stage.*`).
    pub fn title(&self) -> String {
        let key = match self {
            StageId::Demand => "stage.demand",
            StageId::OptimizerPlan => "stage.optimizer_plan",
            StageId::ProjectPlan => "stage.project_plan",
            StageId::ApprovedPlan => "stage.approved_plan",
            StageId::Execution => "stage.execution",
        };
        crate::i18n::t(key)
    }

    /// Index of the stage in pipeline order.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Accept action
// ==========================================
// Two acceptance flavors exposed by the board UI:
// - acceptRequest: take the row into the project plan as-is
// - acceptWagon:   take the wagon, status forced to "выгрузка +3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AcceptAction {
    AcceptRequest,
    AcceptWagon,
}

impl AcceptAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcceptAction::AcceptRequest => "acceptRequest",
            AcceptAction::AcceptWagon => "acceptWagon",
        }
    }

    pub fn parse(name: &str) -> Option<AcceptAction> {
        match name {
            "acceptRequest" => Some(AcceptAction::AcceptRequest),
            "acceptWagon" => Some(AcceptAction::AcceptWagon),
            _ => None,
        }
    }
}

impl fmt::Display for AcceptAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Row selector
// ==========================================
// Canonical addressing is by key (row id plus wagon number, wagon
// number optional). Index addressing survives as a legacy shim for
// callers that render stage-local lists; do not use it in new code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum RowSelector {
    /// Stage-local position (legacy).
    #[serde(rename_all = "camelCase")]
    ByIndex { index: usize },
    /// Row id, optionally narrowed by wagon number for the
    /// duplicate placeholder ids ("любой").
    #[serde(rename_all = "camelCase")]
    ByKey {
        id: String,
        #[serde(default)]
        wagon_number: String,
    },
}

impl RowSelector {
    pub fn by_index(index: usize) -> Self {
        RowSelector::ByIndex { index }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        RowSelector::ByKey {
            id: id.into(),
            wagon_number: String::new(),
        }
    }

    pub fn by_key(id: impl Into<String>, wagon_number: impl Into<String>) -> Self {
        RowSelector::ByKey {
            id: id.into(),
            wagon_number: wagon_number.into(),
        }
    }
}

impl fmt::Display for RowSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSelector::ByIndex { index } => write!(f, "index={}", index),
            RowSelector::ByKey { id, wagon_number } if wagon_number.is_empty() => {
                write!(f, "id={}", id)
            }
            RowSelector::ByKey { id, wagon_number } => {
                write!(f, "id={}, wagon={}", id, wagon_number)
            }
        }
    }
}

pub use super::status::StatusCategory;
