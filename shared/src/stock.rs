//! Low-stock alert rules
//!
//! Pure functions and types behind the low-stock report: per-type thresholds,
//! sales velocity over a trailing window, and stockout estimation. All
//! arithmetic is integer-exact so results are reproducible across runs.

use crate::models::{LowStockAlert, StockPosition};

/// Trailing window used to judge recent sales activity, in days
pub const SALES_WINDOW_DAYS: i64 = 30;

/// Threshold applied when the product type is missing or unknown
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 20;

/// Minimum acceptable on-hand quantity for a product type.
///
/// Known types: "simple" and "bundle". Anything else, including a missing
/// type, falls back to the default.
pub fn threshold_for(product_type: Option<&str>) -> i64 {
    match product_type {
        Some("simple") => 20,
        Some("bundle") => 10,
        _ => DEFAULT_LOW_STOCK_THRESHOLD,
    }
}

/// Average daily sales over a trailing window, kept as an exact ratio.
///
/// Construction fails for a window without sales, so holding a value of this
/// type guarantees a strictly positive rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesVelocity {
    units_sold: i64,
    window_days: i64,
}

impl SalesVelocity {
    /// Build a velocity from total units sold over `window_days`.
    ///
    /// Returns `None` when nothing was sold in the window. A dormant product
    /// is excluded from alerting altogether, which is different from a rate
    /// of zero.
    pub fn from_window(units_sold: i64, window_days: i64) -> Option<Self> {
        if units_sold <= 0 || window_days <= 0 {
            return None;
        }
        Some(Self {
            units_sold,
            window_days,
        })
    }

    /// Estimated whole days until the given stock runs out at this rate.
    ///
    /// Integer floor of `current_stock / (units_sold / window_days)`. Zero
    /// stock yields zero days.
    pub fn days_until_stockout(&self, current_stock: i64) -> i64 {
        if current_stock <= 0 {
            return 0;
        }
        current_stock * self.window_days / self.units_sold
    }
}

/// Evaluate one stock position against the low-stock rules.
///
/// Returns `None` when the position had no sales in the trailing window or
/// its stock is still above the threshold for its product type. Otherwise
/// returns one alert carrying the position's full supplier list.
pub fn evaluate_position(
    position: &StockPosition,
    units_sold_in_window: i64,
) -> Option<LowStockAlert> {
    let threshold = threshold_for(position.product_type.as_deref());

    let velocity = SalesVelocity::from_window(units_sold_in_window, SALES_WINDOW_DAYS)?;

    if position.quantity > threshold {
        return None;
    }

    Some(LowStockAlert {
        product_id: position.product_id,
        product_name: position.product_name.clone(),
        sku: position.sku.clone(),
        warehouse_id: position.warehouse_id,
        warehouse_name: position.warehouse_name.clone(),
        current_stock: position.quantity,
        threshold,
        days_until_stockout: velocity.days_until_stockout(position.quantity),
        suppliers: position.suppliers.clone(),
    })
}
