// ==========================================
// Система управления логистикой - dashboard API
// ==========================================
// Aggregated read models for the chart and map tabs plus the audit
// trail. Delegates computation to the chart engine; nothing here
// mutates the board.
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::domain::action_log::ActionLog;
use crate::domain::status::{self, StatusCategory};
use crate::engine::{self, StageBreakdown, StatusCount, TrendPoint};
use crate::repository::{ActionLogStore, BoardStore};

use super::error::{ApiError, ApiResult};

/// One stub route of the map view. Fixed fixture data; there is no
/// real geographic mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub id: u32,
    pub from: String,
    pub to: String,
    pub status: String,
    pub wagon_count: u32,
    pub distance: u32,
}

impl RouteSummary {
    pub fn category(&self) -> StatusCategory {
        status::classify(&self.status)
    }
}

/// Dashboard API.
///
/// Responsibilities:
/// 1. Chart aggregates (status distribution, stage breakdown, trend)
/// 2. Map route stubs
/// 3. Recent audit entries
pub struct DashboardApi {
    board_store: Arc<BoardStore>,
    action_log_store: Arc<ActionLogStore>,
    config: Arc<BoardConfig>,
    routes: Vec<RouteSummary>,
}

impl DashboardApi {
    pub fn new(
        board_store: Arc<BoardStore>,
        action_log_store: Arc<ActionLogStore>,
        config: Arc<BoardConfig>,
        routes: Vec<RouteSummary>,
    ) -> Self {
        DashboardApi {
            board_store,
            action_log_store,
            config,
            routes,
        }
    }

    /// Status value counts over all stages, first-seen order.
    pub fn status_distribution(&self) -> ApiResult<Vec<StatusCount>> {
        let board = self.board_store.load()?;
        Ok(engine::status_distribution(&board))
    }

    /// Fulfilled / unfulfilled / adjusted counts per stage.
    pub fn stage_breakdown(&self) -> ApiResult<Vec<StageBreakdown>> {
        let board = self.board_store.load()?;
        Ok(engine::stage_breakdown(&board))
    }

    /// Delivery trend around the configured planning date.
    ///
    /// `days` must be positive and within the configured window cap.
    pub fn delivery_trend(&self, days: u32) -> ApiResult<Vec<TrendPoint>> {
        if days == 0 {
            return Err(ApiError::InvalidInput(
                "окно тренда должно быть положительным".to_string(),
            ));
        }
        if days > self.config.max_trend_days {
            return Err(ApiError::InvalidInput(format!(
                "окно тренда не может превышать {} дней",
                self.config.max_trend_days
            )));
        }
        let board = self.board_store.load()?;
        Ok(engine::delivery_trend(
            &board,
            self.config.planning_date,
            days,
        ))
    }

    /// Route stubs, optionally narrowed to one status category.
    pub fn list_routes(&self, category: Option<StatusCategory>) -> Vec<RouteSummary> {
        match category {
            None => self.routes.clone(),
            Some(wanted) => self
                .routes
                .iter()
                .filter(|route| route.category() == wanted)
                .cloned()
                .collect(),
        }
    }

    /// Most recent audit entries, newest first.
    pub fn recent_actions(&self, limit: usize) -> ApiResult<Vec<ActionLog>> {
        Ok(self.action_log_store.recent(limit)?)
    }
}
