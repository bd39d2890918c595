//! Shared types and domain logic for the StockFlow inventory platform
//!
//! This crate contains the value types and pure stock-alert rules shared
//! between the backend and any other components of the system.

pub mod models;
pub mod stock;
pub mod validation;

pub use models::*;
pub use stock::*;
pub use validation::*;
