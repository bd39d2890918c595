//! Company and warehouse models

use serde::{Deserialize, Serialize};

/// A company owning zero or more warehouses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// A warehouse belonging to a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub company_id: i64,
}
