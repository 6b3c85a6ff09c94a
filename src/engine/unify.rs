// ==========================================
// Система управления логистикой - row unification
// ==========================================
// Pivots the board for side-by-side rendering: the union of row ids
// across all stages, each id mapped to its per-stage row (or an
// explicit absence). Only the id union is deduplicated; a caller
// that needs one-to-one correspondence for duplicate ids falls back
// to index addressing.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::row::{Board, Row};
use crate::domain::types::StageId;

/// One unified line: a row id and its cell in every stage. A `None`
/// cell means the id is absent from that stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedRow {
    pub id: String,
    pub cells: BTreeMap<StageId, Option<Row>>,
}

impl UnifiedRow {
    /// Cell of one stage, flattened.
    pub fn cell(&self, stage: StageId) -> Option<&Row> {
        self.cells.get(&stage).and_then(|cell| cell.as_ref())
    }

    /// Stages in which this id is present.
    pub fn present_in(&self) -> Vec<StageId> {
        StageId::ALL
            .iter()
            .copied()
            .filter(|stage| self.cell(*stage).is_some())
            .collect()
    }

    /// Case-insensitive substring search across all cell fields
    /// (the unified table's search box).
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        if self.id.to_lowercase().contains(&needle) {
            return true;
        }
        self.cells.values().flatten().any(|row| {
            row.id.to_lowercase().contains(&needle)
                || row.status.to_lowercase().contains(&needle)
                || row.note.to_lowercase().contains(&needle)
                || row.wagon_number.to_lowercase().contains(&needle)
        })
    }
}

/// Unify the board: one `UnifiedRow` per distinct id, ordered by
/// first appearance across stages (stages iterated in pipeline
/// order). Per stage the first row with the id wins - duplicate ids
/// within a stage stay reachable only through index addressing.
pub fn unify(board: &Board) -> Vec<UnifiedRow> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut order: Vec<&str> = Vec::new();

    for (_, stage) in board.stages() {
        for row in &stage.rows {
            if seen.insert(row.id.as_str()) {
                order.push(row.id.as_str());
            }
        }
    }

    order
        .into_iter()
        .map(|id| {
            let cells = StageId::ALL
                .iter()
                .map(|&stage| (stage, board.stage(stage).find_by_id(id).cloned()))
                .collect();
            UnifiedRow {
                id: id.to_string(),
                cells,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::StageData;
    use crate::domain::status;

    fn sample_board() -> Board {
        let mut board = Board::default();
        board.demand = StageData::new(vec![
            Row::new("№82 от 18.09.2024", status::FULFILLED_3_OF_10, "", ""),
            Row::new("любой", status::FULFILLED, "1234, 33", "111111"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "резерв", ""),
        ]);
        board.execution = StageData::new(vec![
            Row::new("любой", status::TIMING_EQUAL, "", "3434345"),
            Row::new("№83 от 19.09.2024", status::UNASSIGNED, "", ""),
        ]);
        board
    }

    #[test]
    fn test_union_is_exact_and_deduplicated() {
        let unified = unify(&sample_board());
        let ids: Vec<&str> = unified.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["№82 от 18.09.2024", "любой", "№83 от 19.09.2024"]);
    }

    #[test]
    fn test_absent_cells_are_explicit() {
        let unified = unify(&sample_board());
        let last = &unified[2];
        assert!(last.cell(StageId::Demand).is_none());
        assert!(last.cell(StageId::Execution).is_some());
        // All five stages have a cell entry, present or not.
        assert_eq!(last.cells.len(), StageId::ALL.len());
    }

    #[test]
    fn test_first_row_wins_for_duplicate_ids() {
        let unified = unify(&sample_board());
        let any = unified.iter().find(|u| u.id == "любой").unwrap();
        assert_eq!(any.cell(StageId::Demand).unwrap().wagon_number, "111111");
    }

    #[test]
    fn test_present_in_lists_stages() {
        let unified = unify(&sample_board());
        assert_eq!(
            unified[0].present_in(),
            vec![StageId::Demand],
        );
        assert_eq!(
            unified[1].present_in(),
            vec![StageId::Demand, StageId::Execution],
        );
    }

    #[test]
    fn test_search_matches_any_field() {
        let unified = unify(&sample_board());
        let any = unified.iter().find(|u| u.id == "любой").unwrap();
        assert!(any.matches("1234"));
        assert!(any.matches("РАВНО"));
        assert!(any.matches("равно"));
        assert!(!any.matches("нет такого"));
        assert!(any.matches(""));
        // Duplicate rows dropped by first-row-wins are not part of
        // the unified line, so their fields are not searched.
        assert!(!any.matches("резерв"));
    }

    #[test]
    fn test_empty_board_unifies_to_nothing() {
        assert!(unify(&Board::default()).is_empty());
    }
}
