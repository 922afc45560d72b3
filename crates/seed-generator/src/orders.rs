//! The order synthesizer.
//!
//! Produces a historically-distributed order set over a trailing window
//! of days, referencing only entities from the snapshots it was built
//! with. Daily volume follows a weekday/weekend baseline with a bounded
//! random perturbation; every order reconciles arithmetically (extended
//! prices and the order total are re-derivable from quantities and unit
//! prices at currency precision).

use crate::generators::{int_range, pick, price_factor, time_in_day};
use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use seed_core::money::round2;
use seed_core::{
    Customer, LineItem, Order, OrderStatus, PaymentMethod, Product, SalesChannel, Vendor,
    CURRENCY_USD, ORDER_ID_PREFIX,
};
use std::collections::HashSet;

/// Daily perturbation added to the weekday/weekend baseline.
const DAILY_OFFSET_MIN: i64 = -10;
const DAILY_OFFSET_MAX: i64 = 25;

/// Attempts at drawing a product not already used in the order before a
/// duplicate is accepted. Distinctness is best-effort by design.
const DISTINCT_PICK_ATTEMPTS: usize = 5;

/// Tunable parameters for the generation window and daily volume.
#[derive(Debug, Clone)]
pub struct OrderPlan {
    /// Trailing window length in days, ending at "now".
    pub days_back: u32,
    /// Baseline order count on weekdays.
    pub weekday_base: i64,
    /// Baseline order count on weekends.
    pub weekend_base: i64,
    /// Floor applied after perturbation.
    pub min_daily_orders: i64,
}

impl Default for OrderPlan {
    fn default() -> Self {
        Self {
            days_back: 180,
            weekday_base: 80,
            weekend_base: 40,
            min_daily_orders: 20,
        }
    }
}

/// Errors raised before any order is generated.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No active customers with at least one address to snapshot.
    #[error("no active customers available; seed reference data first")]
    NoCustomers,

    /// No active vendors to reference.
    #[error("no active vendors available; seed reference data first")]
    NoVendors,

    /// Empty product catalog.
    #[error("no products available; seed reference data first")]
    NoProducts,
}

/// Perturbed daily order count: baseline plus offset, floored.
fn perturbed_count(base: i64, offset: i64, floor: i64) -> i64 {
    (base + offset).max(floor)
}

/// Generates orders day by day, keeping a globally increasing sequence
/// number across the whole run.
pub struct OrderSynthesizer {
    plan: OrderPlan,
    customers: Vec<Customer>,
    vendors: Vec<Vendor>,
    products: Vec<Product>,
    seq: u64,
}

impl OrderSynthesizer {
    /// Build a synthesizer over entity snapshots.
    ///
    /// Customers without an address cannot receive an address snapshot
    /// and are dropped from the pool. Fails fast if any of the three
    /// pools ends up empty, before anything is generated.
    pub fn new(
        plan: OrderPlan,
        customers: Vec<Customer>,
        vendors: Vec<Vendor>,
        products: Vec<Product>,
    ) -> Result<Self, GeneratorError> {
        let customers: Vec<Customer> = customers
            .into_iter()
            .filter(|c| !c.addresses.is_empty())
            .collect();

        if customers.is_empty() {
            return Err(GeneratorError::NoCustomers);
        }
        if vendors.is_empty() {
            return Err(GeneratorError::NoVendors);
        }
        if products.is_empty() {
            return Err(GeneratorError::NoProducts);
        }

        Ok(Self {
            plan,
            customers,
            vendors,
            products,
            seq: 1,
        })
    }

    pub fn plan(&self) -> &OrderPlan {
        &self.plan
    }

    /// Sequence number the next generated order will take.
    pub fn next_seq(&self) -> u64 {
        self.seq
    }

    fn base_for(&self, day: DateTime<Utc>) -> i64 {
        if day.weekday().num_days_from_monday() < 5 {
            self.plan.weekday_base
        } else {
            self.plan.weekend_base
        }
    }

    /// How many orders to generate for `day`.
    pub fn day_order_count<R: Rng>(&self, rng: &mut R, day: DateTime<Utc>) -> usize {
        let offset = int_range(rng, DAILY_OFFSET_MIN, DAILY_OFFSET_MAX);
        perturbed_count(self.base_for(day), offset, self.plan.min_daily_orders) as usize
    }

    /// Generate all orders for one day of the window.
    pub fn synthesize_day<R: Rng>(&mut self, rng: &mut R, day: DateTime<Utc>) -> Vec<Order> {
        let count = self.day_order_count(rng, day);
        (0..count).map(|_| self.synthesize_order(rng, day)).collect()
    }

    fn synthesize_order<R: Rng>(&mut self, rng: &mut R, day: DateTime<Utc>) -> Order {
        let customer = pick(rng, &self.customers);
        let vendor = pick(rng, &self.vendors);
        let order_date = time_in_day(rng, day);

        let line_items = synthesize_line_items(rng, &self.products);
        let order_total = round2(line_items.iter().map(|li| li.extended_price).sum());

        let order_id = format!("{}{:08}", ORDER_ID_PREFIX, self.seq);
        self.seq += 1;

        // Value snapshot; the order keeps no tie to the customer document.
        let address = customer.addresses[0].clone();

        Order {
            order_id,
            customer_id: customer.customer_id.clone(),
            vendor_id: vendor.vendor_id.clone(),
            order_date,
            status: roll_status(rng),
            line_items,
            order_total,
            currency: CURRENCY_USD.to_string(),
            payment_method: *pick(rng, &PaymentMethod::ALL),
            sales_channel: *pick(rng, &SalesChannel::ALL),
            shipping_address: address.clone(),
            billing_address: address,
            created_at: order_date,
            updated_at: order_date,
        }
    }
}

/// Draw 1-5 line items, retrying product picks a bounded number of times
/// to avoid duplicates within the order, then accepting one.
fn synthesize_line_items<R: Rng>(rng: &mut R, products: &[Product]) -> Vec<LineItem> {
    let item_count = int_range(rng, 1, 5) as usize;
    let mut used: HashSet<String> = HashSet::with_capacity(item_count);
    let mut line_items = Vec::with_capacity(item_count);

    for _ in 0..item_count {
        let mut product = pick(rng, products);
        for _ in 1..DISTINCT_PICK_ATTEMPTS {
            if !used.contains(&product.product_id) {
                break;
            }
            product = pick(rng, products);
        }
        used.insert(product.product_id.clone());

        let quantity = int_range(rng, 1, 5) as i32;
        line_items.push(line_item(product, quantity, price_factor(rng)));
    }

    line_items
}

/// Price one line: perturb the catalog price by `factor`, round to
/// currency precision, then extend by quantity.
fn line_item(product: &Product, quantity: i32, factor: f64) -> LineItem {
    let unit_price = round2(product.unit_price * (1.0 + factor));
    let extended_price = round2(quantity as f64 * unit_price);

    LineItem {
        product_id: product.product_id.clone(),
        quantity,
        unit_price,
        extended_price,
    }
}

/// Status by percentile roll over `[1, 100]`:
/// `>90` cancelled, `(70, 90]` shipped, `(40, 70]` paid, else new.
fn roll_status<R: Rng>(rng: &mut R) -> OrderStatus {
    match int_range(rng, 1, 100) {
        r if r > 90 => OrderStatus::Cancelled,
        r if r > 70 => OrderStatus::Shipped,
        r if r > 40 => OrderStatus::Paid,
        _ => OrderStatus::New,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::window_day;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seed_core::catalog::{base_customers, base_products, base_vendors};
    use std::collections::HashMap;

    fn synthesizer(plan: OrderPlan) -> OrderSynthesizer {
        let now = Utc::now();
        OrderSynthesizer::new(
            plan,
            base_customers(now),
            base_vendors(now),
            base_products(now),
        )
        .expect("catalog snapshots are non-empty")
    }

    /// A Monday, so the weekday baseline applies.
    fn monday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap()
    }

    fn saturday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_products_rejected_before_generation() {
        let now = Utc::now();
        let result = OrderSynthesizer::new(
            OrderPlan::default(),
            base_customers(now),
            base_vendors(now),
            Vec::new(),
        );
        assert!(matches!(result, Err(GeneratorError::NoProducts)));
    }

    #[test]
    fn test_empty_customers_rejected() {
        let now = Utc::now();
        let result = OrderSynthesizer::new(
            OrderPlan::default(),
            Vec::new(),
            base_vendors(now),
            base_products(now),
        );
        assert!(matches!(result, Err(GeneratorError::NoCustomers)));
    }

    #[test]
    fn test_customers_without_addresses_are_dropped() {
        let now = Utc::now();
        let mut customers = base_customers(now);
        for c in &mut customers {
            c.addresses.clear();
        }
        let result = OrderSynthesizer::new(
            OrderPlan::default(),
            customers,
            base_vendors(now),
            base_products(now),
        );
        assert!(matches!(result, Err(GeneratorError::NoCustomers)));
    }

    #[test]
    fn test_perturbed_count_formula() {
        // Weekday baseline 80 with zero offset generates exactly 80.
        assert_eq!(perturbed_count(80, 0, 20), 80);
        assert_eq!(perturbed_count(40, 25, 20), 65);
        // Floor kicks in when the perturbation drags the count down.
        assert_eq!(perturbed_count(25, -10, 20), 20);
    }

    #[test]
    fn test_day_count_matches_baseline_and_bounds() {
        let synth = synthesizer(OrderPlan::default());
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let weekday_count = synth.day_order_count(&mut rng, monday()) as i64;
            assert!((70..=105).contains(&weekday_count));

            let weekend_count = synth.day_order_count(&mut rng, saturday()) as i64;
            assert!((30..=65).contains(&weekend_count));
        }
    }

    #[test]
    fn test_day_count_equals_generated_orders() {
        // Replaying the same seed: the planned count for the day is
        // exactly how many orders synthesize_day produces.
        let mut synth = synthesizer(OrderPlan::default());
        let planned = synth.day_order_count(&mut StdRng::seed_from_u64(7), monday());
        let orders = synth.synthesize_day(&mut StdRng::seed_from_u64(7), monday());
        assert_eq!(orders.len(), planned);
    }

    #[test]
    fn test_totals_reconcile_with_line_items() {
        let mut synth = synthesizer(OrderPlan::default());
        let mut rng = StdRng::seed_from_u64(42);

        for d in 0..7 {
            let day = window_day(monday(), 7, d);
            for order in synth.synthesize_day(&mut rng, day) {
                let sum: f64 = order.line_items.iter().map(|li| li.extended_price).sum();
                assert_eq!(order.order_total, round2(sum), "order {}", order.order_id);

                for li in &order.line_items {
                    assert!((1..=5).contains(&li.quantity));
                    assert_eq!(
                        li.extended_price,
                        round2(li.quantity as f64 * li.unit_price)
                    );
                }
                assert!(!order.line_items.is_empty() && order.line_items.len() <= 5);
            }
        }
    }

    #[test]
    fn test_orders_reference_snapshot_entities() {
        let now = Utc::now();
        let customers = base_customers(now);
        let vendors = base_vendors(now);
        let products = base_products(now);

        let customer_ids: HashSet<_> =
            customers.iter().map(|c| c.customer_id.clone()).collect();
        let vendor_ids: HashSet<_> = vendors.iter().map(|v| v.vendor_id.clone()).collect();
        let product_ids: HashSet<_> = products.iter().map(|p| p.product_id.clone()).collect();

        let mut synth =
            OrderSynthesizer::new(OrderPlan::default(), customers, vendors, products).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for order in synth.synthesize_day(&mut rng, monday()) {
            assert!(customer_ids.contains(&order.customer_id));
            assert!(vendor_ids.contains(&order.vendor_id));
            for li in &order.line_items {
                assert!(product_ids.contains(&li.product_id));
            }
        }
    }

    #[test]
    fn test_order_ids_unique_and_increasing() {
        let mut synth = synthesizer(OrderPlan::default());
        let mut rng = StdRng::seed_from_u64(42);

        let mut all_ids = Vec::new();
        for d in 0..5 {
            let day = window_day(monday(), 5, d);
            for order in synth.synthesize_day(&mut rng, day) {
                all_ids.push(order.order_id);
            }
        }

        assert_eq!(all_ids[0], "SO-00000001");
        let unique: HashSet<_> = all_ids.iter().collect();
        assert_eq!(unique.len(), all_ids.len());

        let mut sorted = all_ids.clone();
        sorted.sort();
        assert_eq!(sorted, all_ids, "ids must increase in generation order");
    }

    #[test]
    fn test_order_timestamps_fall_on_their_day() {
        let mut synth = synthesizer(OrderPlan::default());
        let mut rng = StdRng::seed_from_u64(42);
        let day = monday();

        for order in synth.synthesize_day(&mut rng, day) {
            assert_eq!(order.order_date.date_naive(), day.date_naive());
            assert_eq!(order.created_at, order.order_date);
            assert_eq!(order.updated_at, order.order_date);
        }
    }

    #[test]
    fn test_address_snapshot_is_customer_first_address() {
        let now = Utc::now();
        let customers = base_customers(now);
        let by_id: HashMap<_, _> = customers
            .iter()
            .map(|c| (c.customer_id.clone(), c.addresses[0].clone()))
            .collect();

        let mut synth = OrderSynthesizer::new(
            OrderPlan::default(),
            customers,
            base_vendors(now),
            base_products(now),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for order in synth.synthesize_day(&mut rng, monday()) {
            let expected = &by_id[&order.customer_id];
            assert_eq!(&order.shipping_address, expected);
            assert_eq!(&order.billing_address, expected);
        }
    }

    #[test]
    fn test_status_distribution() {
        // ~10% cancelled / 20% shipped / 30% paid / 40% new over a
        // large sample, with tolerance.
        let mut synth = synthesizer(OrderPlan::default());
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts: HashMap<OrderStatus, usize> = HashMap::new();
        let mut total = 0usize;
        for d in 0..90 {
            let day = window_day(monday(), 90, d);
            for order in synth.synthesize_day(&mut rng, day) {
                *counts.entry(order.status).or_default() += 1;
                total += 1;
            }
        }

        let fraction = |status: OrderStatus| {
            counts.get(&status).copied().unwrap_or(0) as f64 / total as f64
        };

        assert!((fraction(OrderStatus::Cancelled) - 0.10).abs() < 0.05);
        assert!((fraction(OrderStatus::Shipped) - 0.20).abs() < 0.05);
        assert!((fraction(OrderStatus::Paid) - 0.30).abs() < 0.05);
        assert!((fraction(OrderStatus::New) - 0.40).abs() < 0.05);
    }

    #[test]
    fn test_unit_price_within_perturbation_band() {
        let now = Utc::now();
        let products = base_products(now);
        let price_by_id: HashMap<_, _> = products
            .iter()
            .map(|p| (p.product_id.clone(), p.unit_price))
            .collect();

        let mut synth = OrderSynthesizer::new(
            OrderPlan::default(),
            base_customers(now),
            base_vendors(now),
            products,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for order in synth.synthesize_day(&mut rng, monday()) {
            for li in &order.line_items {
                let catalog = price_by_id[&li.product_id];
                // Rounded to 2 decimals after a +/-5% perturbation;
                // allow a cent of rounding slack at the band edges.
                assert!(li.unit_price >= round2(catalog * 0.95) - 0.01);
                assert!(li.unit_price <= round2(catalog * 1.05) + 0.01);
            }
        }
    }

    #[test]
    fn test_known_perturbation_arithmetic() {
        let now = Utc::now();
        let product = Product {
            product_id: "P9999".to_string(),
            name: "Test Widget".to_string(),
            category: "Test".to_string(),
            unit_price: 100.0,
            vendor_id: "V1001".to_string(),
            created_at: now,
            updated_at: now,
        };

        let li = line_item(&product, 2, 0.05);
        assert_eq!(li.unit_price, 105.0);
        assert_eq!(li.extended_price, 210.0);
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let mut synth1 = synthesizer(OrderPlan::default());
        let mut synth2 = synthesizer(OrderPlan::default());
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);

        let a = synth1.synthesize_day(&mut rng1, monday());
        let b = synth2.synthesize_day(&mut rng2, monday());

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.order_id, y.order_id);
            assert_eq!(x.customer_id, y.customer_id);
            assert_eq!(x.order_total, y.order_total);
            assert_eq!(x.status, y.status);
            assert_eq!(x.line_items.len(), y.line_items.len());
        }
    }
}
