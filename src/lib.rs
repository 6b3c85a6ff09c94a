// ==========================================
// Система управления логистикой - core library
// ==========================================
// Planning board decision-support core: five fixed plan stages,
// row acceptance, cross-stage unification, plan comparison and
// dashboard aggregates. The presentation shell is an external
// collaborator; this crate exposes a synchronous in-process API.
// ==========================================

// Initialize i18n (stage titles and UI labels, Russian default)
rust_i18n::i18n!("locales", fallback = "ru");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and closed type vocabulary
pub mod domain;

// Repository layer - in-memory snapshot stores
pub mod repository;

// Engine layer - business rules (accept / unify / compare / charts)
pub mod engine;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// API layer - business interfaces consumed by the presentation shell
pub mod api;

// Application layer - state wiring
pub mod app;

// Seed fixtures (mock dataset, session-scoped)
pub mod fixtures;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{AcceptAction, RowSelector, StageId, StatusCategory};

// Domain entities
pub use domain::{ActionLog, ActionType, Board, Row, StageData};

// Engines
pub use engine::{
    accept_all, accept_single, compare, unify, ComparisonEntry, ComparisonReport, UnifiedRow,
};

// API
pub use api::{ApiError, ApiResult, DashboardApi, PlanApi};

// ==========================================
// Constants
// ==========================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application display name
pub const APP_NAME: &str = "Система управления логистикой";
