//! Synthetic customer expansion.
//!
//! Generated customers continue the numeric id sequence from the current
//! collection size. They are inserted unconditionally by the pipeline, so
//! a rerun without a reset duplicates them; that is accepted behavior
//! (see DESIGN.md), controlled by the `--extra-customers` flag.

use crate::generators::{int_range, pick};
use chrono::{DateTime, Utc};
use rand::Rng;
use seed_core::{Address, Customer, EntityStatus, LoyaltyTier};

// City and state are drawn independently, so mismatched pairs occur;
// the data is synthetic and nothing downstream joins on them.
const CITIES: [&str; 4] = ["Chicago", "New York", "Los Angeles", "Dallas"];
const STATES: [&str; 4] = ["IL", "NY", "CA", "TX"];

/// Probability (percent) that a synthetic customer opts into marketing.
const MARKETING_OPT_IN_PCT: i64 = 60;

/// Generate one synthetic customer with sequence number `n`.
fn synthetic_customer<R: Rng>(rng: &mut R, n: u64, now: DateTime<Utc>) -> Customer {
    let city = *pick(rng, &CITIES);
    let state = *pick(rng, &STATES);

    Customer {
        customer_id: format!("C{}", 100_000 + n),
        first_name: format!("Cust{n}"),
        last_name: "Demo".to_string(),
        email: format!("customer{n}@example.com"),
        phone: format!("+1-555-000-{n:04}"),
        addresses: vec![Address {
            address_id: format!("ADDR-{n}"),
            kind: "shipping".to_string(),
            line1: format!("{} Demo St", 100 + (n % 900)),
            city: city.to_string(),
            state: state.to_string(),
            postal_code: "60601".to_string(),
            country: "US".to_string(),
            is_default: true,
        }],
        status: EntityStatus::Active,
        loyalty_level: *pick(rng, &LoyaltyTier::ALL),
        marketing_opt_in: int_range(rng, 0, 100) < MARKETING_OPT_IN_PCT,
        created_at: now,
        updated_at: now,
    }
}

/// Generate `count` synthetic customers whose sequence numbers continue
/// from `existing` (the current customer count).
pub fn synthetic_customers<R: Rng>(
    rng: &mut R,
    existing: u64,
    count: u64,
    now: DateTime<Utc>,
) -> Vec<Customer> {
    (0..count)
        .map(|i| synthetic_customer(rng, existing + i + 1, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ids_continue_from_existing_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let customers = synthetic_customers(&mut rng, 205, 3, Utc::now());

        let ids: Vec<_> = customers.iter().map(|c| c.customer_id.as_str()).collect();
        assert_eq!(ids, ["C100206", "C100207", "C100208"]);
    }

    #[test]
    fn test_synthesized_fields() {
        let mut rng = StdRng::seed_from_u64(42);
        let customers = synthetic_customers(&mut rng, 0, 50, Utc::now());

        for (i, c) in customers.iter().enumerate() {
            let n = i as u64 + 1;
            assert_eq!(c.email, format!("customer{n}@example.com"));
            assert_eq!(c.phone, format!("+1-555-000-{n:04}"));
            assert_eq!(c.status, EntityStatus::Active);

            let addr = c.primary_address().expect("synthetic customer address");
            assert!(addr.is_default);
            assert_eq!(addr.postal_code, "60601");
            assert_eq!(addr.line1, format!("{} Demo St", 100 + (n % 900)));
        }
    }

    #[test]
    fn test_marketing_opt_in_bias() {
        let mut rng = StdRng::seed_from_u64(42);
        let customers = synthetic_customers(&mut rng, 0, 2000, Utc::now());

        let opted_in = customers.iter().filter(|c| c.marketing_opt_in).count();
        let rate = opted_in as f64 / customers.len() as f64;
        assert!((0.54..=0.66).contains(&rate), "opt-in rate {rate} off bias");
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let now = Utc::now();
        let mut rng1 = StdRng::seed_from_u64(9);
        let mut rng2 = StdRng::seed_from_u64(9);

        let a = synthetic_customers(&mut rng1, 10, 20, now);
        let b = synthetic_customers(&mut rng2, 10, 20, now);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.customer_id, y.customer_id);
            assert_eq!(x.loyalty_level, y.loyalty_level);
            assert_eq!(x.marketing_opt_in, y.marketing_opt_in);
            assert_eq!(x.addresses[0].city, y.addresses[0].city);
        }
    }
}
