//! Product creation service
//!
//! Creates a product together with its initial inventory row in a single
//! transaction. A product that exists always has exactly one inventory row
//! at its initial warehouse; the alert report relies on that.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use shared::validation::{
    validate_initial_quantity, validate_price, validate_product_name, validate_sku,
};

/// Product service for catalog writes
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating a product.
///
/// Required fields are optional here so a missing field reports a 400 with
/// the field name instead of failing at deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<Decimal>,
    pub warehouse_id: Option<i64>,
    pub initial_quantity: Option<i64>,
    pub product_type: Option<String>,
}

/// Response for a successfully created product
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub message: String,
    pub product_id: i64,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a product and its initial inventory row.
    ///
    /// The product insert and the inventory insert commit together or not at
    /// all. Initial quantity defaults to 0 when omitted.
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> AppResult<CreateProductResponse> {
        let name = input
            .name
            .ok_or_else(|| AppError::MissingField("name".to_string()))?;
        let sku = input
            .sku
            .ok_or_else(|| AppError::MissingField("sku".to_string()))?;
        let price = input
            .price
            .ok_or_else(|| AppError::MissingField("price".to_string()))?;
        let warehouse_id = input
            .warehouse_id
            .ok_or_else(|| AppError::MissingField("warehouse_id".to_string()))?;
        let initial_quantity = input.initial_quantity.unwrap_or(0);

        validate_product_name(&name).map_err(|e| AppError::Validation {
            field: "name".to_string(),
            message: e.to_string(),
        })?;
        validate_sku(&sku).map_err(|e| AppError::Validation {
            field: "sku".to_string(),
            message: e.to_string(),
        })?;
        validate_price(price).map_err(|e| AppError::Validation {
            field: "price".to_string(),
            message: e.to_string(),
        })?;
        validate_initial_quantity(initial_quantity).map_err(|e| AppError::Validation {
            field: "initial_quantity".to_string(),
            message: e.to_string(),
        })?;

        // Validate warehouse exists
        let warehouse_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM warehouses WHERE id = $1)",
        )
        .bind(warehouse_id)
        .fetch_one(&self.db)
        .await?;

        if !warehouse_exists {
            return Err(AppError::NotFound("Warehouse".to_string()));
        }

        // Check SKU uniqueness
        let sku_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE sku = $1)",
        )
        .bind(&sku)
        .fetch_one(&self.db)
        .await?;

        if sku_exists {
            return Err(AppError::DuplicateEntry("sku".to_string()));
        }

        // Start transaction
        let mut tx = self.db.begin().await?;

        let product_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO products (name, sku, price, product_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&name)
        .bind(&sku)
        .bind(price)
        .bind(&input.product_type)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO inventory (product_id, warehouse_id, quantity)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(product_id)
        .bind(warehouse_id)
        .bind(initial_quantity)
        .execute(&mut *tx)
        .await?;

        // Commit transaction
        tx.commit().await?;

        tracing::info!("Created product {} with SKU {}", product_id, sku);

        Ok(CreateProductResponse {
            message: "Product created successfully".to_string(),
            product_id,
        })
    }
}
