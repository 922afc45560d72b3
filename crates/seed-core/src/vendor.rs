//! Vendor documents.

use crate::EntityStatus;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment terms code agreed with a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTerms {
    #[serde(rename = "NET_30")]
    Net30,
    #[serde(rename = "NET_45")]
    Net45,
}

/// A vendor document in the `vendors` collection, keyed by `vendor_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub vendor_id: String,
    pub name: String,
    pub contact_email: String,
    pub status: EntityStatus,
    pub terms: PaymentTerms,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}
