//! Customer documents and their addresses.

use crate::EntityStatus;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A postal address attached to a customer.
///
/// Orders snapshot the customer's first address by value at generation
/// time; the snapshot never references back into the customer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address_id: String,
    /// Address kind, e.g. "shipping".
    #[serde(rename = "type")]
    pub kind: String,
    pub line1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
}

/// Loyalty program tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    /// All tiers, for uniform random assignment.
    pub const ALL: [LoyaltyTier; 4] = [
        LoyaltyTier::Bronze,
        LoyaltyTier::Silver,
        LoyaltyTier::Gold,
        LoyaltyTier::Platinum,
    ];
}

/// A customer document in the `customers` collection.
///
/// `customer_id` is the natural business key and globally unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub addresses: Vec<Address>,
    pub status: EntityStatus,
    pub loyalty_level: LoyaltyTier,
    pub marketing_opt_in: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// The address snapshotted onto generated orders, if any.
    pub fn primary_address(&self) -> Option<&Address> {
        self.addresses.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loyalty_tier_serde() {
        let json = serde_json::to_string(&LoyaltyTier::Platinum).unwrap();
        assert_eq!(json, "\"platinum\"");
    }

    #[test]
    fn test_address_type_field_name() {
        let addr = Address {
            address_id: "ADDR-1".to_string(),
            kind: "shipping".to_string(),
            line1: "123 Main St".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            postal_code: "60601".to_string(),
            country: "US".to_string(),
            is_default: true,
        };

        let doc = bson::to_document(&addr).unwrap();
        assert_eq!(doc.get_str("type").unwrap(), "shipping");
        assert!(doc.get("kind").is_none());
    }
}
