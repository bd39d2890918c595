//! Low-stock alert service
//!
//! Joins the inventory snapshot with products, warehouses, and suppliers for
//! one company, then applies the stock rules from the shared crate to build
//! the alert report. Read-only; any query failure aborts the request.

use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;
use crate::models::{
    LowStockAlertsResponse, MovementReason, StockPosition, SupplierContact,
};
use shared::stock::{evaluate_position, SALES_WINDOW_DAYS};

/// Alert service computing the per-company low-stock report
#[derive(Clone)]
pub struct AlertService {
    db: PgPool,
}

/// One row of the inventory join, before supplier grouping.
///
/// Supplier columns are nullable: a product without any linked supplier
/// still appears, with all three set to NULL.
#[derive(Debug, FromRow)]
struct StockRow {
    product_id: i64,
    product_name: String,
    sku: String,
    product_type: Option<String>,
    warehouse_id: i64,
    warehouse_name: String,
    quantity: i64,
    supplier_id: Option<i64>,
    supplier_name: Option<String>,
    supplier_email: Option<String>,
}

impl AlertService {
    /// Create a new AlertService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Compute the low-stock alert report for a company.
    ///
    /// An unknown company yields an empty report, not an error. Positions are
    /// evaluated in warehouse/product order so the response is deterministic
    /// for identical data.
    pub async fn low_stock_alerts(&self, company_id: i64) -> AppResult<LowStockAlertsResponse> {
        let since = Utc::now() - Duration::days(SALES_WINDOW_DAYS);
        let positions = self.stock_positions(company_id).await?;

        let mut alerts = Vec::new();
        for position in &positions {
            let units_sold = self
                .sales_total(position.product_id, position.warehouse_id, since)
                .await?;

            if let Some(alert) = evaluate_position(position, units_sold) {
                alerts.push(alert);
            }
        }

        Ok(LowStockAlertsResponse {
            total_alerts: alerts.len(),
            alerts,
        })
    }

    /// Fetch the stock positions for every warehouse of a company.
    ///
    /// One position per (product, warehouse) pair, with the suppliers linked
    /// to the product collapsed into a list.
    pub async fn stock_positions(&self, company_id: i64) -> AppResult<Vec<StockPosition>> {
        let rows = sqlx::query_as::<_, StockRow>(
            r#"
            SELECT p.id AS product_id, p.name AS product_name, p.sku, p.product_type,
                   w.id AS warehouse_id, w.name AS warehouse_name,
                   i.quantity,
                   s.id AS supplier_id, s.name AS supplier_name,
                   s.contact_email AS supplier_email
            FROM inventory i
            JOIN products p ON p.id = i.product_id
            JOIN warehouses w ON w.id = i.warehouse_id
            LEFT JOIN product_suppliers ps ON ps.product_id = p.id
            LEFT JOIN suppliers s ON s.id = ps.supplier_id
            WHERE w.company_id = $1
            ORDER BY w.id, p.id, s.id
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.db)
        .await?;

        Ok(group_stock_rows(rows))
    }

    /// Total units sold for a product at a warehouse since `since`.
    ///
    /// Sales are recorded as negative quantity changes; the result is the
    /// absolute sum, or 0 when no matching movements exist.
    pub async fn sales_total(
        &self,
        product_id: i64,
        warehouse_id: i64,
        since: DateTime<Utc>,
    ) -> AppResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(ABS(SUM(quantity_change)), 0)::BIGINT
            FROM inventory_movements
            WHERE product_id = $1
              AND warehouse_id = $2
              AND reason = $3
              AND created_at >= $4
            "#,
        )
        .bind(product_id)
        .bind(warehouse_id)
        .bind(MovementReason::Sale.as_str())
        .bind(since)
        .fetch_one(&self.db)
        .await?;

        Ok(total)
    }
}

/// Collapse supplier join rows into one position per (product, warehouse).
///
/// Rows must arrive ordered by (warehouse, product); supplier rows for the
/// same pair are consecutive and merge into the previous position's list.
fn group_stock_rows(rows: Vec<StockRow>) -> Vec<StockPosition> {
    let mut positions: Vec<StockPosition> = Vec::new();

    for row in rows {
        let supplier = match (row.supplier_id, row.supplier_name, row.supplier_email) {
            (Some(id), Some(name), Some(contact_email)) => Some(SupplierContact {
                id,
                name,
                contact_email,
            }),
            _ => None,
        };

        match positions.last_mut() {
            Some(last)
                if last.product_id == row.product_id
                    && last.warehouse_id == row.warehouse_id =>
            {
                last.suppliers.extend(supplier);
            }
            _ => {
                positions.push(StockPosition {
                    product_id: row.product_id,
                    product_name: row.product_name,
                    sku: row.sku,
                    product_type: row.product_type,
                    warehouse_id: row.warehouse_id,
                    warehouse_name: row.warehouse_name,
                    quantity: row.quantity,
                    suppliers: supplier.into_iter().collect(),
                });
            }
        }
    }

    positions
}
