// ==========================================
// Система управления логистикой - application layer
// ==========================================

pub mod state;

pub use state::AppState;
