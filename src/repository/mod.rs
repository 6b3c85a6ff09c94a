// ==========================================
// Система управления логистикой - repository layer
// ==========================================
// Session-scoped in-memory stores. There is no persistence by
// design: the board lives from seed to session end, and the stores
// only guard the snapshot swap.
// ==========================================

pub mod action_log_store;
pub mod board_store;
pub mod error;

pub use action_log_store::ActionLogStore;
pub use board_store::BoardStore;
pub use error::StoreError;
