//! Hardcoded reference data: the baseline customers, vendors, and
//! products every run upserts before generating orders.

use crate::customer::{Address, Customer, LoyaltyTier};
use crate::product::Product;
use crate::vendor::{PaymentTerms, Vendor};
use crate::EntityStatus;
use chrono::{DateTime, Utc};

fn shipping_address(
    address_id: &str,
    line1: &str,
    city: &str,
    state: &str,
    postal_code: &str,
) -> Address {
    Address {
        address_id: address_id.to_string(),
        kind: "shipping".to_string(),
        line1: line1.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        postal_code: postal_code.to_string(),
        country: "US".to_string(),
        is_default: true,
    }
}

#[allow(clippy::too_many_arguments)]
fn customer(
    customer_id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    address: Address,
    loyalty_level: LoyaltyTier,
    marketing_opt_in: bool,
    now: DateTime<Utc>,
) -> Customer {
    Customer {
        customer_id: customer_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        addresses: vec![address],
        status: EntityStatus::Active,
        loyalty_level,
        marketing_opt_in,
        created_at: now,
        updated_at: now,
    }
}

/// The five baseline customers, timestamped at `now`.
pub fn base_customers(now: DateTime<Utc>) -> Vec<Customer> {
    vec![
        customer(
            "C100001",
            "Jane",
            "Doe",
            "jane.doe@example.com",
            "+1-312-555-0101",
            shipping_address("ADDR-1", "123 Main St", "Chicago", "IL", "60601"),
            LoyaltyTier::Gold,
            true,
            now,
        ),
        customer(
            "C100002",
            "John",
            "Smith",
            "john.smith@example.com",
            "+1-415-555-0199",
            shipping_address("ADDR-2", "500 W Madison", "Chicago", "IL", "60661"),
            LoyaltyTier::Silver,
            false,
            now,
        ),
        customer(
            "C100003",
            "Alice",
            "Nguyen",
            "alice.nguyen@example.com",
            "+1-617-555-0123",
            shipping_address("ADDR-3", "1 Market St", "San Francisco", "CA", "94105"),
            LoyaltyTier::Platinum,
            true,
            now,
        ),
        customer(
            "C100004",
            "Robert",
            "Garcia",
            "robert.garcia@example.com",
            "+1-773-555-0456",
            shipping_address("ADDR-4", "750 N Rush St", "Chicago", "IL", "60611"),
            LoyaltyTier::Bronze,
            true,
            now,
        ),
        customer(
            "C100005",
            "Emily",
            "Chen",
            "emily.chen@example.com",
            "+1-213-555-0789",
            shipping_address("ADDR-5", "200 Spring St", "Los Angeles", "CA", "90013"),
            LoyaltyTier::Bronze,
            false,
            now,
        ),
    ]
}

fn vendor(
    vendor_id: &str,
    name: &str,
    contact_email: &str,
    terms: PaymentTerms,
    now: DateTime<Utc>,
) -> Vendor {
    Vendor {
        vendor_id: vendor_id.to_string(),
        name: name.to_string(),
        contact_email: contact_email.to_string(),
        status: EntityStatus::Active,
        terms,
        created_at: now,
        updated_at: now,
    }
}

/// The three baseline vendors.
pub fn base_vendors(now: DateTime<Utc>) -> Vec<Vendor> {
    vec![
        vendor(
            "V1001",
            "Acme Supplies",
            "sales@acmesupplies.com",
            PaymentTerms::Net30,
            now,
        ),
        vendor(
            "V1002",
            "Global Tech Distributors",
            "accounts@globaltech.example",
            PaymentTerms::Net45,
            now,
        ),
        vendor(
            "V1003",
            "Midwest Retail Partners",
            "info@midwestretail.example",
            PaymentTerms::Net30,
            now,
        ),
    ]
}

fn product(
    product_id: &str,
    name: &str,
    category: &str,
    unit_price: f64,
    vendor_id: &str,
    now: DateTime<Utc>,
) -> Product {
    Product {
        product_id: product_id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        unit_price,
        vendor_id: vendor_id.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// The five baseline products. Every `vendor_id` resolves to a vendor
/// from [`base_vendors`].
pub fn base_products(now: DateTime<Utc>) -> Vec<Product> {
    vec![
        product("P1001", "Wireless Mouse", "Electronics", 24.99, "V1001", now),
        product(
            "P1002",
            "Mechanical Keyboard",
            "Electronics",
            89.99,
            "V1001",
            now,
        ),
        product(
            "P1003",
            "USB-C Docking Station",
            "Accessories",
            149.99,
            "V1002",
            now,
        ),
        product("P1004", "27\" 4K Monitor", "Displays", 329.99, "V1002", now),
        product(
            "P1005",
            "Noise-Cancelling Headphones",
            "Audio",
            199.99,
            "V1003",
            now,
        ),
    ]
}
