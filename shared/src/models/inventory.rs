//! Inventory snapshot and movement-ledger models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current on-hand stock for one product at one warehouse.
///
/// At most one record exists per (product, warehouse) pair. The quantity is
/// maintained by movement processing; readers treat it as a snapshot and
/// never derive it from the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
}

/// Reason attached to a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementReason {
    Sale,
    Restock,
}

impl MovementReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementReason::Sale => "sale",
            MovementReason::Restock => "restock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sale" => Some(MovementReason::Sale),
            "restock" => Some(MovementReason::Restock),
            _ => None,
        }
    }
}

/// One entry in the append-only movement ledger.
///
/// A sale carries a quantity_change <= 0; the writer enforces the sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryMovement {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity_change: i64,
    pub reason: MovementReason,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_reason_string_round_trip() {
        for reason in [MovementReason::Sale, MovementReason::Restock] {
            assert_eq!(MovementReason::from_str(reason.as_str()), Some(reason));
        }
        assert_eq!(MovementReason::from_str("transfer"), None);
    }

    #[test]
    fn movement_reason_serializes_snake_case() {
        let json = serde_json::to_string(&MovementReason::Sale).unwrap();
        assert_eq!(json, r#""sale""#);
        let parsed: MovementReason = serde_json::from_str(r#""restock""#).unwrap();
        assert_eq!(parsed, MovementReason::Restock);
    }
}
