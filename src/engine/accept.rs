// ==========================================
// Система управления логистикой - plan mutation engine
// ==========================================
// The only stateful logic with real invariants on the board:
// "accept" copies a row from a source stage into the project plan,
// one row at a time or in bulk. Both operations are total over a
// valid selector; invalid input is rejected and the board is left
// untouched. The target is always the project plan - every other
// stage is read-only here.
// ==========================================

use crate::domain::row::{Board, Row, StageData};
use crate::domain::status::{FULFILLED_MARKER, NOTE_ACCEPTED, UNLOADING_PLUS_3};
use crate::domain::types::{AcceptAction, RowSelector, StageId};

use super::error::AcceptError;

/// Accept a single row from `source` into the project plan.
///
/// Addressing:
/// - `ByKey` (canonical): the source row is resolved by id, narrowed
///   by wagon number when one is given. The project-plan match is by
///   id for `AcceptRequest` and by wagon number for `AcceptWagon`
///   (falling back to id for rows without a wagon).
/// - `ByIndex` (legacy shim): the source row is the stage-local
///   position; the project-plan match is by (id AND wagon number),
///   and a missing match inserts at the same position when in
///   bounds, else appends.
///
/// Exactly one project-plan row is added or updated per call; the
/// returned board shares no mutation with the input.
pub fn accept_single(
    board: &Board,
    source: StageId,
    selector: &RowSelector,
    action: AcceptAction,
) -> Result<Board, AcceptError> {
    let source_stage = board.stage(source);

    let (source_row, source_index) = resolve_source_row(source_stage, source, selector)?;
    let accepted = build_accepted_row(source_row, action);

    let mut next = board.clone();
    let target = next.stage_mut(StageId::ProjectPlan);

    match find_target_index(target, source_row, selector, action) {
        Some(existing) => {
            tracing::debug!(
                stage = %source,
                target_index = existing,
                "accept_single: replacing existing project-plan row"
            );
            target.rows[existing] = accepted;
        }
        None => match source_index {
            // Index-addressed inserts keep the source position when
            // it is within the current project-plan bounds.
            Some(index) if index < target.rows.len() => {
                tracing::debug!(stage = %source, index, "accept_single: inserting at source position");
                target.rows.insert(index, accepted);
            }
            _ => {
                tracing::debug!(stage = %source, "accept_single: appending to project plan");
                target.rows.push(accepted);
            }
        },
    }

    Ok(next)
}

/// Accept an entire stage: the project plan is overwritten (not
/// merged) with a transform of the source stage, source order
/// preserved. Every status containing the fulfilled marker is forced
/// to "выгрузка +3" - by the historical substring rule this also
/// covers "не обеспечен, по ограничениям". Every row gets the
/// accepted note.
pub fn accept_all(board: &Board, source: StageId) -> Board {
    let mut next = board.clone();

    let rows: Vec<Row> = board
        .stage(source)
        .rows
        .iter()
        .map(|row| {
            let mut accepted = row.clone();
            if accepted.status.contains(FULFILLED_MARKER) {
                accepted.status = UNLOADING_PLUS_3.to_string();
            }
            accepted.note = NOTE_ACCEPTED.to_string();
            accepted
        })
        .collect();

    tracing::debug!(stage = %source, count = rows.len(), "accept_all: overwriting project plan");
    next.project_plan = StageData::new(rows);
    next
}

// ==========================================
// Internals
// ==========================================

fn resolve_source_row<'a>(
    stage: &'a StageData,
    stage_id: StageId,
    selector: &RowSelector,
) -> Result<(&'a Row, Option<usize>), AcceptError> {
    match selector {
        RowSelector::ByIndex { index } => match stage.rows.get(*index) {
            Some(row) => Ok((row, Some(*index))),
            None => Err(AcceptError::IndexOutOfRange {
                stage: stage_id,
                index: *index,
                len: stage.rows.len(),
            }),
        },
        RowSelector::ByKey { id, wagon_number } => {
            let found = if wagon_number.is_empty() {
                stage.find_by_id(id)
            } else {
                stage
                    .rows
                    .iter()
                    .find(|row| row.id == *id && row.wagon_number == *wagon_number)
            };
            found.map(|row| (row, None)).ok_or_else(|| AcceptError::RowNotFound {
                stage: stage_id,
                selector: selector.to_string(),
            })
        }
    }
}

fn build_accepted_row(source: &Row, action: AcceptAction) -> Row {
    Row {
        id: source.id.clone(),
        status: match action {
            AcceptAction::AcceptRequest => source.status.clone(),
            AcceptAction::AcceptWagon => UNLOADING_PLUS_3.to_string(),
        },
        note: NOTE_ACCEPTED.to_string(),
        wagon_number: source.wagon_number.clone(),
    }
}

fn find_target_index(
    target: &StageData,
    source_row: &Row,
    selector: &RowSelector,
    action: AcceptAction,
) -> Option<usize> {
    match selector {
        RowSelector::ByIndex { .. } => target
            .rows
            .iter()
            .position(|row| row.id == source_row.id && row.wagon_number == source_row.wagon_number),
        RowSelector::ByKey { .. } => match action {
            AcceptAction::AcceptRequest => {
                target.rows.iter().position(|row| row.id == source_row.id)
            }
            AcceptAction::AcceptWagon if !source_row.wagon_number.is_empty() => target
                .rows
                .iter()
                .position(|row| row.wagon_number == source_row.wagon_number),
            // Wagon-less rows cannot be matched by wagon number.
            AcceptAction::AcceptWagon => {
                target.rows.iter().position(|row| row.id == source_row.id)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status;

    fn board_with_source(rows: Vec<Row>) -> Board {
        let mut board = Board::default();
        board.optimizer_plan = StageData::new(rows);
        board
    }

    #[test]
    fn test_accept_wagon_into_empty_project_plan() {
        let board = board_with_source(vec![Row::new("X", status::FULFILLED, "", "111")]);

        let next = accept_single(
            &board,
            StageId::OptimizerPlan,
            &RowSelector::by_index(0),
            AcceptAction::AcceptWagon,
        )
        .unwrap();

        assert_eq!(next.project_plan.rows.len(), 1);
        let row = &next.project_plan.rows[0];
        assert_eq!(row.id, "X");
        assert_eq!(row.status, status::UNLOADING_PLUS_3);
        assert_eq!(row.note, status::NOTE_ACCEPTED);
        assert_eq!(row.wagon_number, "111");
    }

    #[test]
    fn test_accept_request_preserves_status() {
        let board = board_with_source(vec![Row::new(
            "любой",
            status::FULFILLED_ADJUSTED,
            "",
            "222222",
        )]);

        let next = accept_single(
            &board,
            StageId::OptimizerPlan,
            &RowSelector::by_key("любой", "222222"),
            AcceptAction::AcceptRequest,
        )
        .unwrap();

        let row = &next.project_plan.rows[0];
        assert_eq!(row.status, status::FULFILLED_ADJUSTED);
        assert_eq!(row.note, status::NOTE_ACCEPTED);
    }

    #[test]
    fn test_index_out_of_range_is_rejected() {
        let board = board_with_source(vec![Row::new("X", status::FULFILLED, "", "111")]);

        let err = accept_single(
            &board,
            StageId::OptimizerPlan,
            &RowSelector::by_index(5),
            AcceptAction::AcceptWagon,
        )
        .unwrap_err();

        assert_eq!(
            err,
            AcceptError::IndexOutOfRange {
                stage: StageId::OptimizerPlan,
                index: 5,
                len: 1,
            }
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let board = board_with_source(vec![Row::new("X", status::FULFILLED, "", "111")]);

        let err = accept_single(
            &board,
            StageId::OptimizerPlan,
            &RowSelector::by_id("Y"),
            AcceptAction::AcceptRequest,
        )
        .unwrap_err();

        assert!(matches!(err, AcceptError::RowNotFound { .. }));
    }

    #[test]
    fn test_index_addressed_replace_preserves_position() {
        let mut board = board_with_source(vec![
            Row::new("любой", status::FULFILLED, "", "111111"),
            Row::new("любой", status::FULFILLED, "", "222222"),
        ]);
        board.project_plan = StageData::new(vec![
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", "999"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "", "222222"),
        ]);

        let next = accept_single(
            &board,
            StageId::OptimizerPlan,
            &RowSelector::by_index(1),
            AcceptAction::AcceptWagon,
        )
        .unwrap();

        // Matched by (id AND wagon) at position 1: replaced in place.
        assert_eq!(next.project_plan.rows.len(), 2);
        assert_eq!(next.project_plan.rows[1].status, status::UNLOADING_PLUS_3);
        assert_eq!(next.project_plan.rows[0].wagon_number, "999");
    }

    #[test]
    fn test_index_addressed_insert_within_bounds() {
        let mut board = board_with_source(vec![
            Row::new("A", status::FULFILLED, "", "1"),
            Row::new("B", status::FULFILLED, "", "2"),
        ]);
        board.project_plan = StageData::new(vec![
            Row::new("C", status::UNASSIGNED, "", "3"),
            Row::new("D", status::UNASSIGNED, "", "4"),
            Row::new("E", status::UNASSIGNED, "", "5"),
        ]);

        let next = accept_single(
            &board,
            StageId::OptimizerPlan,
            &RowSelector::by_index(1),
            AcceptAction::AcceptRequest,
        )
        .unwrap();

        assert_eq!(next.project_plan.rows.len(), 4);
        assert_eq!(next.project_plan.rows[1].id, "B");
        assert_eq!(next.project_plan.rows[2].id, "D");
    }

    #[test]
    fn test_accept_all_overwrites_project_plan() {
        let mut board = board_with_source(vec![
            Row::new("любой", status::FULFILLED, "", "111111"),
            Row::new("любой", status::UNFULFILLED_BY_CONSTRAINT, "1234, 33", ""),
            Row::new("любой", status::TIMING_LATER, "", "3423423"),
        ]);
        board.project_plan = StageData::new(vec![Row::new("old", status::UNASSIGNED, "", "")]);

        let next = accept_all(&board, StageId::OptimizerPlan);

        assert_eq!(next.project_plan.rows.len(), 3);
        // Substring rule: the negated status also contains the marker.
        assert_eq!(next.project_plan.rows[0].status, status::UNLOADING_PLUS_3);
        assert_eq!(next.project_plan.rows[1].status, status::UNLOADING_PLUS_3);
        // Timing statuses are untouched.
        assert_eq!(next.project_plan.rows[2].status, status::TIMING_LATER);
        for row in &next.project_plan.rows {
            assert_eq!(row.note, status::NOTE_ACCEPTED);
        }
    }

    #[test]
    fn test_only_project_plan_changes() {
        let board = board_with_source(vec![Row::new("X", status::FULFILLED, "", "111")]);

        let next = accept_single(
            &board,
            StageId::OptimizerPlan,
            &RowSelector::by_index(0),
            AcceptAction::AcceptWagon,
        )
        .unwrap();

        for (stage_id, stage) in board.stages() {
            if stage_id == StageId::ProjectPlan {
                continue;
            }
            assert_eq!(stage, next.stage(stage_id), "stage {} must be unchanged", stage_id);
        }
    }
}
