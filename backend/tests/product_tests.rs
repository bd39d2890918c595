//! Product creation tests
//!
//! Tests for the catalog write path:
//! - required-field validation
//! - SKU uniqueness
//! - initial inventory row defaulting

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{validate_initial_quantity, validate_price, validate_product_name, validate_sku};
use std::collections::HashSet;

// ============================================================================
// Field Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_sku_rules() {
        assert!(validate_sku("WID-001").is_ok());
        assert!(validate_sku("").is_err());
        assert!(validate_sku(" padded ").is_err());
        assert!(validate_sku(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_name_rules() {
        assert!(validate_product_name("Widget").is_ok());
        assert!(validate_product_name("  ").is_err());
    }

    #[test]
    fn test_price_rules() {
        assert!(validate_price(Decimal::new(1099, 2)).is_ok());
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(-100, 2)).is_err());
    }

    #[test]
    fn test_initial_quantity_rules() {
        assert!(validate_initial_quantity(0).is_ok());
        assert!(validate_initial_quantity(500).is_ok());
        assert!(validate_initial_quantity(-1).is_err());
    }
}

// ============================================================================
// Creation Flow Simulation
// ============================================================================

mod creation_flow {
    use super::*;

    /// Minimal creation request as the endpoint sees it
    #[derive(Debug, Clone)]
    struct CreateRequest {
        name: Option<String>,
        sku: Option<String>,
        price: Option<Decimal>,
        warehouse_id: Option<i64>,
        initial_quantity: Option<i64>,
    }

    /// An inventory row as written alongside the product
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct InventoryRow {
        product_id: i64,
        warehouse_id: i64,
        quantity: i64,
    }

    /// First missing required field, in declaration order
    fn missing_required_field(req: &CreateRequest) -> Option<&'static str> {
        if req.name.is_none() {
            return Some("name");
        }
        if req.sku.is_none() {
            return Some("sku");
        }
        if req.price.is_none() {
            return Some("price");
        }
        if req.warehouse_id.is_none() {
            return Some("warehouse_id");
        }
        None
    }

    /// Simulate the transactional create against an in-memory SKU set.
    ///
    /// Returns the new inventory row; a duplicate SKU leaves the store
    /// untouched.
    fn simulate_create(
        existing_skus: &mut HashSet<String>,
        next_product_id: i64,
        req: &CreateRequest,
    ) -> Result<InventoryRow, &'static str> {
        if let Some(field) = missing_required_field(req) {
            return Err(field);
        }

        let sku = req.sku.clone().unwrap();
        if existing_skus.contains(&sku) {
            return Err("duplicate sku");
        }

        existing_skus.insert(sku);
        Ok(InventoryRow {
            product_id: next_product_id,
            warehouse_id: req.warehouse_id.unwrap(),
            quantity: req.initial_quantity.unwrap_or(0),
        })
    }

    fn valid_request() -> CreateRequest {
        CreateRequest {
            name: Some("Widget".to_string()),
            sku: Some("WID-001".to_string()),
            price: Some(Decimal::new(1999, 2)),
            warehouse_id: Some(7),
            initial_quantity: None,
        }
    }

    #[test]
    fn test_all_fields_present_passes() {
        assert!(missing_required_field(&valid_request()).is_none());
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let mut req = valid_request();
        req.name = None;
        assert_eq!(missing_required_field(&req), Some("name"));

        let mut req = valid_request();
        req.sku = None;
        assert_eq!(missing_required_field(&req), Some("sku"));

        let mut req = valid_request();
        req.price = None;
        assert_eq!(missing_required_field(&req), Some("price"));

        let mut req = valid_request();
        req.warehouse_id = None;
        assert_eq!(missing_required_field(&req), Some("warehouse_id"));
    }

    #[test]
    fn test_omitted_initial_quantity_defaults_to_zero() {
        let mut skus = HashSet::new();
        let row = simulate_create(&mut skus, 1, &valid_request()).unwrap();
        assert_eq!(row.quantity, 0);
        assert_eq!(row.warehouse_id, 7);
    }

    #[test]
    fn test_explicit_initial_quantity_is_kept() {
        let mut skus = HashSet::new();
        let mut req = valid_request();
        req.initial_quantity = Some(250);
        let row = simulate_create(&mut skus, 1, &req).unwrap();
        assert_eq!(row.quantity, 250);
    }

    #[test]
    fn test_duplicate_sku_rejected_without_state_change() {
        let mut skus = HashSet::new();
        simulate_create(&mut skus, 1, &valid_request()).unwrap();
        let before = skus.clone();

        let result = simulate_create(&mut skus, 2, &valid_request());

        assert!(result.is_err());
        assert_eq!(skus, before);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any persisted initial quantity equals the requested one, or zero
        #[test]
        fn prop_initial_quantity_roundtrip(quantity in prop::option::of(0i64..=10_000)) {
            let mut skus = HashSet::new();
            let mut req = valid_request();
            req.initial_quantity = quantity;

            let row = simulate_create(&mut skus, 1, &req).unwrap();
            prop_assert_eq!(row.quantity, quantity.unwrap_or(0));
        }

        /// Distinct SKUs always create; repeated SKUs always conflict
        #[test]
        fn prop_sku_uniqueness(skus_in in prop::collection::vec("[A-Z]{3}-[0-9]{3}", 1..20)) {
            let mut store = HashSet::new();
            for (i, sku) in skus_in.iter().enumerate() {
                let mut req = valid_request();
                req.sku = Some(sku.clone());
                let seen = store.contains(sku);
                let result = simulate_create(&mut store, i as i64 + 1, &req);
                prop_assert_eq!(result.is_err(), seen);
            }
        }
    }
}
