//! Product and supplier models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable product identified by its SKU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unique business key
    pub sku: String,
    pub price: Decimal,
    /// Free-form category (e.g. "simple", "bundle"); may be absent
    pub product_type: Option<String>,
}

/// A supplier that can be contacted for reorders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
}

/// Association between a product and one of its suppliers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProductSupplier {
    pub product_id: i64,
    pub supplier_id: i64,
}
