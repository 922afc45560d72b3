//! Domain model shared by the sales seeder crates.
//!
//! Entities mirror the documents stored in the `sales` database:
//! customers, vendors, products, inventory records, and orders.
//! All monetary values are 2-decimal currency amounts; see [`money`].

pub mod catalog;
pub mod customer;
pub mod inventory;
pub mod money;
pub mod order;
pub mod product;
pub mod vendor;

pub use customer::{Address, Customer, LoyaltyTier};
pub use inventory::InventoryRecord;
pub use order::{LineItem, Order, OrderStatus, PaymentMethod, SalesChannel};
pub use product::Product;
pub use vendor::{PaymentTerms, Vendor};

use serde::{Deserialize, Serialize};

/// Name of the document database all collections live in.
pub const DB_NAME: &str = "sales";

/// The single warehouse location inventory records are keyed to.
pub const WAREHOUSE_LOCATION: &str = "WH-CHI-01";

/// Prefix for generated order identifiers (`SO-00000001`, ...).
pub const ORDER_ID_PREFIX: &str = "SO-";

/// Currency code stamped on every generated order.
pub const CURRENCY_USD: &str = "USD";

/// Collection names in the `sales` database.
pub mod collections {
    pub const CUSTOMERS: &str = "customers";
    pub const VENDORS: &str = "vendors";
    pub const PRODUCTS: &str = "products";
    pub const INVENTORY: &str = "inventory";
    pub const ORDERS: &str = "orders";
}

/// Lifecycle status shared by customers and vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl EntityStatus {
    /// String form as stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "active",
            EntityStatus::Inactive => "inactive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_status_serde() {
        let json = serde_json::to_string(&EntityStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let back: EntityStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(back, EntityStatus::Inactive);
    }
}
