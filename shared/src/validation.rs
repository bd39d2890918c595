//! Validation utilities for product and inventory inputs

use rust_decimal::Decimal;

/// Validate a SKU: non-empty, at most 50 characters, no surrounding whitespace
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.is_empty() {
        return Err("SKU must not be empty");
    }
    if sku.len() > 50 {
        return Err("SKU must be at most 50 characters");
    }
    if sku.trim() != sku {
        return Err("SKU must not contain leading or trailing whitespace");
    }
    Ok(())
}

/// Validate a product name: non-empty, at most 100 characters
pub fn validate_product_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Product name must not be empty");
    }
    if name.len() > 100 {
        return Err("Product name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a product price is not negative
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate an initial stock quantity is not negative
pub fn validate_initial_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("Initial quantity cannot be negative");
    }
    Ok(())
}
