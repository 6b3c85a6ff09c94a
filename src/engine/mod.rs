// ==========================================
// Система управления логистикой - engine layer
// ==========================================
// Pure business rules over the board snapshot. Engines take
// `&Board` and either compute a read model or return a brand-new
// board; they never mutate in place and never touch stores.
// ==========================================

pub mod accept;
pub mod charts;
pub mod compare;
pub mod error;
pub mod unify;

pub use accept::{accept_all, accept_single};
pub use charts::{delivery_trend, stage_breakdown, status_distribution};
pub use charts::{StageBreakdown, StatusCount, TrendPoint};
pub use compare::{compare, ComparisonEntry, ComparisonReport};
pub use error::AcceptError;
pub use unify::{unify, UnifiedRow};
