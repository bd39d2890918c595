//! Route definitions for the StockFlow server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Company-scoped alert reporting
        .nest("/companies", company_routes())
        // Product catalog
        .nest("/products", product_routes())
}

/// Company routes
fn company_routes() -> Router<AppState> {
    Router::new().route(
        "/:company_id/alerts/low-stock",
        get(handlers::get_low_stock_alerts),
    )
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::create_product))
}
