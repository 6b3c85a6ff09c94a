// ==========================================
// Система управления логистикой - API layer
// ==========================================
// Business interfaces consumed by the presentation shell. Input is
// validated at the string boundary (stage names, action names);
// beyond it everything is typed.
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod plan_api;

pub use dashboard_api::{DashboardApi, RouteSummary};
pub use error::{ApiError, ApiResult};
pub use plan_api::PlanApi;
