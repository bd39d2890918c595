//! Low-stock alert types

use serde::{Deserialize, Serialize};

/// Supplier details carried on an alert for reordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierContact {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
}

/// One product's stock at one warehouse, with reorder suppliers attached.
///
/// Produced by the repository layer after collapsing the supplier join; a
/// product without suppliers carries an empty list rather than being dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPosition {
    pub product_id: i64,
    pub product_name: String,
    pub sku: String,
    pub product_type: Option<String>,
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub quantity: i64,
    pub suppliers: Vec<SupplierContact>,
}

/// A single low-stock alert for one (product, warehouse) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub product_id: i64,
    pub product_name: String,
    pub sku: String,
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub current_stock: i64,
    pub threshold: i64,
    pub days_until_stockout: i64,
    pub suppliers: Vec<SupplierContact>,
}

/// Response body for the low-stock alerts endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockAlertsResponse {
    pub alerts: Vec<LowStockAlert>,
    pub total_alerts: usize,
}
