// ==========================================
// Система управления логистикой - domain layer
// ==========================================
// Entities and the closed type vocabulary of the planning board.
// ==========================================

pub mod action_log;
pub mod row;
pub mod status;
pub mod types;

pub use action_log::{ActionLog, ActionType};
pub use row::{Board, Row, StageData};
pub use status::StatusCategory;
