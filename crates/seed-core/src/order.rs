//! Sales order documents and their line items.

use crate::customer::Address;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status, assigned by percentile roll at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    New,
    Paid,
    Shipped,
    Cancelled,
}

/// Payment method recorded on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Visa,
    Mastercard,
    Amex,
    Paypal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Visa,
        PaymentMethod::Mastercard,
        PaymentMethod::Amex,
        PaymentMethod::Paypal,
    ];
}

/// Channel the order came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesChannel {
    Web,
    Mobile,
    Phone,
    Store,
}

impl SalesChannel {
    pub const ALL: [SalesChannel; 4] = [
        SalesChannel::Web,
        SalesChannel::Mobile,
        SalesChannel::Phone,
        SalesChannel::Store,
    ];
}

/// One line of an order.
///
/// `unit_price` is the catalog price perturbed at generation time and
/// rounded to 2 decimals; `extended_price == round2(quantity * unit_price)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub extended_price: f64,
}

/// An order document in the `orders` collection.
///
/// `order_total == round2(sum of extended prices)`. Shipping and billing
/// addresses are value snapshots of the customer's first address taken at
/// generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub vendor_id: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub line_items: Vec<LineItem>,
    pub order_total: f64,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub sales_channel: SalesChannel,
    pub shipping_address: Address,
    pub billing_address: Address,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"NEW\"").unwrap(),
            OrderStatus::New
        );
    }

    #[test]
    fn test_channel_and_payment_serde() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Mastercard).unwrap(),
            "\"mastercard\""
        );
        assert_eq!(
            serde_json::to_string(&SalesChannel::Store).unwrap(),
            "\"store\""
        );
    }
}
