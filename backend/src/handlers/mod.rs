//! HTTP handlers for the StockFlow server

pub mod alerts;
pub mod health;
pub mod products;

pub use alerts::*;
pub use health::*;
pub use products::*;
