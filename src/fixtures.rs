// ==========================================
// Система управления логистикой - seed fixtures
// ==========================================
// The session starts from this fixed dataset and lives in memory
// only; there is no persistence step. Data values are kept verbatim
// from the historical mock fixture, including the duplicate
// placeholder ids ("любой") - those are intentional generic demand
// lines, joined by wagon number where one is bound.
// ==========================================

use crate::api::dashboard_api::RouteSummary;
use crate::domain::row::{Board, Row, StageData};
use crate::domain::status;

/// Request id of the dated demand line in the seed.
pub const SEED_REQUEST_ID: &str = "№82 от 18.09.2024";

/// Seed board for a new session.
pub fn seed_board() -> Board {
    Board {
        demand: StageData::new(vec![
            Row::new(SEED_REQUEST_ID, status::FULFILLED_3_OF_10, "", ""),
            Row::new("любой", status::FULFILLED, "", "111111"),
            Row::new("любой", status::FULFILLED_ADJUSTED, "", "222222"),
            Row::new("любой", status::FULFILLED_ADJUSTED_BY_CONSTRAINT, "", "333333"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "1234, 33", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "1234, 33", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "1234, 33", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "1234, 33", ""),
            Row::new("любой", status::FULFILLED, "", "44444"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "1234, 33", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "1234, 33", ""),
        ]),
        optimizer_plan: StageData::new(vec![
            Row::new(SEED_REQUEST_ID, status::FULFILLED, "", "111111"),
            Row::new("любой", status::FULFILLED, "", "222222"),
            Row::new("любой", status::FULFILLED, "", "333333"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::FULFILLED, "", "44444"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
        ]),
        project_plan: StageData::new(vec![
            Row::new(SEED_REQUEST_ID, status::UNLOADING_PLUS_3_PLANNED, "", ""),
            Row::new("любой", status::UNLOADING_PLUS_3, status::NOTE_ACCEPTED, "22222"),
            Row::new("любой", status::UNLOADING_PLUS_3, status::NOTE_ACCEPTED, "33333"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::FULFILLED, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
        ]),
        approved_plan: StageData::new(vec![
            Row::new(SEED_REQUEST_ID, status::TIMING_LATER, "", "3423423"),
            Row::new("любой", status::TIMING_EQUAL, "", "3434345"),
            Row::new("любой", status::TIMING_EARLIER, "", "2342344"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::FULFILLED, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
        ]),
        execution: StageData::new(vec![
            Row::new(SEED_REQUEST_ID, status::TIMING_LATER, "", "3423423"),
            Row::new("любой", status::TIMING_EQUAL, "", "3434345"),
            Row::new("любой", status::TIMING_EQUAL, "", "2342344"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::FULFILLED, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", ""),
        ]),
    }
}

/// Route stubs backing the map tab.
pub fn seed_routes() -> Vec<RouteSummary> {
    vec![
        RouteSummary {
            id: 1,
            from: "Шубарколь".to_string(),
            to: "Лужская".to_string(),
            status: status::FULFILLED.to_string(),
            wagon_count: 3,
            distance: 1250,
        },
        RouteSummary {
            id: 2,
            from: "Магдаля".to_string(),
            to: "Шубарколь".to_string(),
            status: status::UNFULFILLED_BY_CONSTRAINT.to_string(),
            wagon_count: 2,
            distance: 850,
        },
        RouteSummary {
            id: 3,
            from: "Лужская".to_string(),
            to: "Магдаля".to_string(),
            status: status::FULFILLED_ADJUSTED.to_string(),
            wagon_count: 1,
            distance: 1100,
        },
        RouteSummary {
            id: 4,
            from: "Шубарколь".to_string(),
            to: "Магдаля".to_string(),
            status: status::TIMING_LATER.to_string(),
            wagon_count: 4,
            distance: 950,
        },
        RouteSummary {
            id: 5,
            from: "Магдаля".to_string(),
            to: "Лужская".to_string(),
            status: status::TIMING_EQUAL.to_string(),
            wagon_count: 2,
            distance: 1300,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::StageId;

    #[test]
    fn test_seed_has_all_stages_populated() {
        let board = seed_board();
        for (stage_id, stage) in board.stages() {
            assert!(!stage.is_empty(), "seed stage {} must not be empty", stage_id);
        }
        assert_eq!(board.demand.len(), 11);
        assert_eq!(board.approved_plan.len(), 9);
    }

    #[test]
    fn test_seed_request_id_spans_all_stages() {
        let board = seed_board();
        for stage in StageId::ALL {
            assert!(
                board.stage(stage).find_by_id(SEED_REQUEST_ID).is_some(),
                "request must appear in {}",
                stage
            );
        }
    }

    #[test]
    fn test_seed_statuses_are_known() {
        use crate::domain::status::{classify, StatusCategory};
        let board = seed_board();
        for (_, stage) in board.stages() {
            for row in &stage.rows {
                assert_ne!(
                    classify(&row.status),
                    StatusCategory::Other,
                    "unexpected unknown status in seed: {}",
                    row.status
                );
            }
        }
    }

    #[test]
    fn test_seed_routes_shape() {
        let routes = seed_routes();
        assert_eq!(routes.len(), 5);
        assert!(routes.iter().all(|r| r.wagon_count > 0 && r.distance > 0));
    }
}
