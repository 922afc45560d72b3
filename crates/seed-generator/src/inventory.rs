//! Randomized warehouse stock levels.

use crate::generators::int_range;
use chrono::{DateTime, Utc};
use rand::Rng;
use seed_core::{InventoryRecord, WAREHOUSE_LOCATION};

/// Fixed safety-stock threshold for every product.
const SAFETY_STOCK: i32 = 50;

/// Build the companion inventory record for a product at the single
/// fixed warehouse, with bounded-uniform stock quantities.
pub fn warehouse_stock<R: Rng>(
    rng: &mut R,
    product_id: &str,
    now: DateTime<Utc>,
) -> InventoryRecord {
    InventoryRecord {
        product_id: product_id.to_string(),
        location_id: WAREHOUSE_LOCATION.to_string(),
        on_hand: int_range(rng, 100, 500) as i32,
        on_order: int_range(rng, 0, 100) as i32,
        safety_stock: SAFETY_STOCK,
        updated_at: now,
    }
}
