//! HTTP handlers for low-stock alert reporting

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::LowStockAlertsResponse;
use crate::services::alerts::AlertService;
use crate::AppState;

/// Report products at risk of stocking out across a company's warehouses.
///
/// An unknown company returns an empty report with status 200.
pub async fn get_low_stock_alerts(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
) -> AppResult<Json<LowStockAlertsResponse>> {
    let service = AlertService::new(state.db);
    let report = service.low_stock_alerts(company_id).await?;
    Ok(Json(report))
}
