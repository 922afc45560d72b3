//! Warehouse inventory records.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inventory document keyed by `(product_id, location_id)`.
///
/// Upsert semantics keep exactly one record per key pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: String,
    pub location_id: String,
    pub on_hand: i32,
    pub on_order: i32,
    pub safety_stock: i32,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}
