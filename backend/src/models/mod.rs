//! Database models for the StockFlow server
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
