// ==========================================
// Система управления логистикой - configuration layer
// ==========================================

pub mod board_config;

pub use board_config::BoardConfig;
