// ==========================================
// Система управления логистикой - board entities
// ==========================================
// Row / StageData / Board. The board is the single live dataset:
// it is replaced wholesale on every mutation (copy-on-write), which
// is the change-detection signal the presentation shell relies on.
// ==========================================

use serde::{Deserialize, Serialize};

use super::types::StageId;

/// Placeholder id used by generic demand lines ("any wagon").
/// Multiple rows within one stage may share it; the wagon number is
/// the reliable join key for those rows.
pub const ANY_ROW_ID: &str = "любой";

// ==========================================
// Row
// ==========================================

/// One plan line: request id, status value, free-form note and the
/// assigned wagon number (empty until a wagon is bound).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub wagon_number: String,
}

impl Row {
    pub fn new(
        id: impl Into<String>,
        status: impl Into<String>,
        note: impl Into<String>,
        wagon_number: impl Into<String>,
    ) -> Self {
        Row {
            id: id.into(),
            status: status.into(),
            note: note.into(),
            wagon_number: wagon_number.into(),
        }
    }

    /// Join key for cross-stage alignment: wagon number when bound,
    /// otherwise the row id.
    pub fn join_key(&self) -> &str {
        if self.wagon_number.is_empty() {
            &self.id
        } else {
            &self.wagon_number
        }
    }
}

// ==========================================
// StageData
// ==========================================

/// Ordered row list of one stage. Row order is display order chosen
/// by the upstream process; mutations must not silently reorder rows
/// the user did not act on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageData {
    pub rows: Vec<Row>,
}

impl StageData {
    pub fn new(rows: Vec<Row>) -> Self {
        StageData { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row with the given id (ids are not unique; index
    /// addressing exists for one-to-one needs).
    pub fn find_by_id(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// First row with the given wagon number (non-empty).
    pub fn find_by_wagon(&self, wagon_number: &str) -> Option<&Row> {
        if wagon_number.is_empty() {
            return None;
        }
        self.rows.iter().find(|row| row.wagon_number == wagon_number)
    }
}

// ==========================================
// Board
// ==========================================

/// The full dataset: one `StageData` per fixed stage. Exactly one
/// instance is live at a time (held by the board store); mutation
/// engines take `&Board` and return a new `Board`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub demand: StageData,
    pub optimizer_plan: StageData,
    pub project_plan: StageData,
    pub approved_plan: StageData,
    pub execution: StageData,
}

impl Board {
    pub fn stage(&self, id: StageId) -> &StageData {
        match id {
            StageId::Demand => &self.demand,
            StageId::OptimizerPlan => &self.optimizer_plan,
            StageId::ProjectPlan => &self.project_plan,
            StageId::ApprovedPlan => &self.approved_plan,
            StageId::Execution => &self.execution,
        }
    }

    pub fn stage_mut(&mut self, id: StageId) -> &mut StageData {
        match id {
            StageId::Demand => &mut self.demand,
            StageId::OptimizerPlan => &mut self.optimizer_plan,
            StageId::ProjectPlan => &mut self.project_plan,
            StageId::ApprovedPlan => &mut self.approved_plan,
            StageId::Execution => &mut self.execution,
        }
    }

    /// Stages in pipeline order.
    pub fn stages(&self) -> impl Iterator<Item = (StageId, &StageData)> {
        StageId::ALL.iter().map(move |&id| (id, self.stage(id)))
    }

    /// Total row count across all stages.
    pub fn row_count(&self) -> usize {
        self.stages().map(|(_, stage)| stage.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_join_key_prefers_wagon() {
        let bound = Row::new(ANY_ROW_ID, "обеспечен", "", "111111");
        assert_eq!(bound.join_key(), "111111");

        let unbound = Row::new("№82 от 18.09.2024", "обеспечен", "", "");
        assert_eq!(unbound.join_key(), "№82 от 18.09.2024");
    }

    #[test]
    fn test_board_serde_uses_wire_names() {
        let mut board = Board::default();
        board
            .stage_mut(StageId::OptimizerPlan)
            .rows
            .push(Row::new("любой", "обеспечен", "", "44444"));

        let json = serde_json::to_value(&board).unwrap();
        assert!(json.get("optimizerPlan").is_some());
        assert_eq!(json["optimizerPlan"]["rows"][0]["wagonNumber"], "44444");
    }

    #[test]
    fn test_stage_lookup_by_id_and_wagon() {
        let stage = StageData::new(vec![
            Row::new("любой", "обеспечен", "", "111111"),
            Row::new("любой", "не обеспечен, по ограничениям", "1234, 33", ""),
        ]);

        assert_eq!(stage.find_by_id("любой").unwrap().wagon_number, "111111");
        assert!(stage.find_by_wagon("").is_none());
        assert_eq!(stage.find_by_wagon("111111").unwrap().status, "обеспечен");
    }
}
