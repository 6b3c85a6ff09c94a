// ==========================================
// Система управления логистикой - plan API
// ==========================================
// Acceptance, comparison, unification and read-side queries over
// the board. The presentation shell addresses stages and actions by
// their historical wire names; parsing happens here, engines only
// see typed values. Every successful mutation swaps the snapshot
// and leaves an audit entry.
// ==========================================

use std::sync::Arc;

use crate::domain::action_log::ActionType;
use crate::domain::row::{Board, StageData};
use crate::domain::types::{AcceptAction, RowSelector, StageId};
use crate::engine;
use crate::engine::{ComparisonReport, UnifiedRow};
use crate::repository::{ActionLogStore, BoardStore};

use super::error::{ApiError, ApiResult};

/// Plan board API.
///
/// Responsibilities:
/// 1. Single-row and bulk acceptance into the project plan
/// 2. Stage comparison and cross-stage unification
/// 3. Read-side board queries
/// 4. Audit logging of every mutation
pub struct PlanApi {
    board_store: Arc<BoardStore>,
    action_log_store: Arc<ActionLogStore>,
}

impl PlanApi {
    pub fn new(board_store: Arc<BoardStore>, action_log_store: Arc<ActionLogStore>) -> Self {
        PlanApi {
            board_store,
            action_log_store,
        }
    }

    // ==========================================
    // Mutations
    // ==========================================

    /// Accept one row from `stage_name` into the project plan.
    ///
    /// On success the new snapshot is live and returned; on any
    /// error the previous snapshot stays live.
    pub fn accept_single(
        &self,
        stage_name: &str,
        selector: &RowSelector,
        action_name: &str,
    ) -> ApiResult<Arc<Board>> {
        let stage = parse_stage(stage_name)?;
        let action = AcceptAction::parse(action_name)
            .ok_or_else(|| ApiError::UnknownAction(action_name.to_string()))?;

        let current = self.board_store.load()?;
        let next = engine::accept_single(&current, stage, selector, action).map_err(|err| {
            tracing::warn!(stage = %stage, %selector, %action, error = %err, "accept_single rejected");
            err
        })?;
        let snapshot = self.board_store.replace(next)?;

        self.action_log_store.append(
            ActionType::AcceptSingle,
            Some(stage),
            format!("{selector}, action={action}"),
        )?;
        tracing::info!(stage = %stage, %selector, %action, "accept_single applied");

        Ok(snapshot)
    }

    /// Accept an entire stage: full overwrite of the project plan.
    pub fn accept_all(&self, stage_name: &str) -> ApiResult<Arc<Board>> {
        let stage = parse_stage(stage_name)?;

        let current = self.board_store.load()?;
        let next = engine::accept_all(&current, stage);
        let count = next.project_plan.len();
        let snapshot = self.board_store.replace(next)?;

        self.action_log_store.append(
            ActionType::AcceptAll,
            Some(stage),
            format!("rows={count}"),
        )?;
        tracing::info!(stage = %stage, rows = count, "accept_all applied");

        Ok(snapshot)
    }

    /// Restore the seed board (session restart).
    pub fn reset_board(&self) -> ApiResult<Arc<Board>> {
        let snapshot = self.board_store.reset()?;
        self.action_log_store
            .append(ActionType::ResetBoard, None, "seed restored")?;
        tracing::info!("board reset to seed");
        Ok(snapshot)
    }

    // ==========================================
    // Read side
    // ==========================================

    /// Current board snapshot.
    pub fn get_board(&self) -> ApiResult<Arc<Board>> {
        Ok(self.board_store.load()?)
    }

    /// Row list of one stage.
    pub fn list_stage(&self, stage_name: &str) -> ApiResult<StageData> {
        let stage = parse_stage(stage_name)?;
        let board = self.board_store.load()?;
        Ok(board.stage(stage).clone())
    }

    /// Unified cross-stage rows (see `engine::unify`).
    pub fn unified_rows(&self) -> ApiResult<Vec<UnifiedRow>> {
        let board = self.board_store.load()?;
        Ok(engine::unify(&board))
    }

    /// Compare two stages by join key. Comparing a stage with itself
    /// is allowed and yields an all-matching report.
    pub fn compare_stages(
        &self,
        source_name: &str,
        target_name: &str,
    ) -> ApiResult<ComparisonReport> {
        let source = parse_stage(source_name)?;
        let target = parse_stage(target_name)?;

        let board = self.board_store.load()?;
        let report = engine::compare(board.stage(source), board.stage(target));
        tracing::debug!(
            source = %source,
            target = %target,
            different = report.different_count,
            matching = report.match_count,
            "stages compared"
        );
        Ok(report)
    }
}

fn parse_stage(name: &str) -> ApiResult<StageId> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput("имя колонки не может быть пустым".to_string()));
    }
    StageId::parse(trimmed).ok_or_else(|| ApiError::UnknownStage(trimmed.to_string()))
}
