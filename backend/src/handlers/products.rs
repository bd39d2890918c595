//! HTTP handlers for product catalog endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::services::products::{CreateProductInput, CreateProductResponse, ProductService};
use crate::AppState;

/// Create a product with its initial inventory row
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> AppResult<(StatusCode, Json<CreateProductResponse>)> {
    let service = ProductService::new(state.db);
    let response = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
