// ==========================================
// Система управления логистикой - application state
// ==========================================
// Wires stores and API instances for the presentation shell. The
// shell holds one AppState for the whole session and calls the APIs
// from its event handlers; everything runs synchronously within one
// interaction turn.
// ==========================================

use std::sync::Arc;

use crate::api::{DashboardApi, PlanApi};
use crate::config::BoardConfig;
use crate::fixtures;
use crate::repository::{ActionLogStore, BoardStore};

/// Application state.
///
/// Contains all API instances and shared stores.
pub struct AppState {
    /// Session configuration
    pub config: Arc<BoardConfig>,

    /// Plan board API
    pub plan_api: Arc<PlanApi>,

    /// Dashboard API
    pub dashboard_api: Arc<DashboardApi>,

    /// Board snapshot store (shared by both APIs)
    pub board_store: Arc<BoardStore>,

    /// Audit trail store
    pub action_log_store: Arc<ActionLogStore>,
}

impl AppState {
    /// Build the application state from a configuration and the seed
    /// dataset.
    ///
    /// Construction order mirrors the layering: stores first, then
    /// the APIs on top of them.
    pub fn new(config: BoardConfig) -> Self {
        tracing::info!(locale = %config.locale, planning_date = %config.planning_date, "initializing AppState");

        crate::i18n::set_locale(&config.locale);
        let config = Arc::new(config);

        // ==========================================
        // Store layer
        // ==========================================
        let board_store = Arc::new(BoardStore::new(fixtures::seed_board()));
        let action_log_store = Arc::new(ActionLogStore::new());

        // ==========================================
        // API layer
        // ==========================================
        let plan_api = Arc::new(PlanApi::new(
            board_store.clone(),
            action_log_store.clone(),
        ));

        let dashboard_api = Arc::new(DashboardApi::new(
            board_store.clone(),
            action_log_store.clone(),
            config.clone(),
            fixtures::seed_routes(),
        ));

        tracing::info!("AppState initialized");

        AppState {
            config,
            plan_api,
            dashboard_api,
            board_store,
            action_log_store,
        }
    }

    /// State with default configuration (tests, demo binary).
    pub fn with_defaults() -> Self {
        Self::new(BoardConfig::default())
    }
}
