//! The ordered seeding pipeline.
//!
//! Stages run strictly sequentially, each depending on the previous
//! stage's committed state:
//!
//! 1. reference data (customers, vendors, products, inventory) — idempotent upserts
//! 2. synthetic customer expansion — unconditional inserts (duplicates on rerun)
//! 3. order generation — full delete then regenerate over the window
//! 4. index declaration on `orders`
//!
//! Any persistence error aborts the remainder of the run; the whole
//! order set regenerates from scratch on the next invocation.

use crate::error::SeedError;
use crate::store::{order_indexes, SeedStore};
use bson::doc;
use chrono::{DateTime, Utc};
use rand::Rng;
use seed_core::catalog::{base_customers, base_products, base_vendors};
use seed_core::{collections, Customer, EntityStatus, Product, Vendor};
use seed_generator::orders::{OrderPlan, OrderSynthesizer};
use seed_generator::{synthetic_customers, warehouse_stock};
use serde::Serialize;
use tracing::{debug, info};

/// Tunables for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Synthetic customers to add on top of the baseline. Zero skips
    /// the expansion stage entirely (the safe choice on rerun, since
    /// expansion inserts unconditionally).
    pub extra_customers: u64,
    /// Order window and daily volume parameters.
    pub plan: OrderPlan,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            extra_customers: 200,
            plan: OrderPlan::default(),
        }
    }
}

/// Counts reported after a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedSummary {
    pub customers_upserted: u64,
    pub vendors_upserted: u64,
    pub products_upserted: u64,
    pub synthetic_customers_inserted: u64,
    pub orders_inserted: u64,
    pub window_days: u32,
}

/// Runs the seeding stages against a [`SeedStore`].
pub struct SeedPipeline {
    store: SeedStore,
}

impl SeedPipeline {
    pub fn new(store: SeedStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SeedStore {
        &self.store
    }

    /// Run all stages in order. `now` anchors the order window and all
    /// reference timestamps.
    pub async fn run<R: Rng>(
        &self,
        rng: &mut R,
        options: &SeedOptions,
        now: DateTime<Utc>,
    ) -> Result<SeedSummary, SeedError> {
        let mut summary = self.ensure_reference_data(rng, now).await?;

        summary.synthetic_customers_inserted = if options.extra_customers > 0 {
            self.expand_customers(rng, options.extra_customers, now)
                .await?
        } else {
            info!("Skipping synthetic customer expansion (count is 0)");
            0
        };

        summary.orders_inserted = self.generate_orders(rng, &options.plan, now).await?;
        summary.window_days = options.plan.days_back;

        info!(
            "Seeding complete: {} orders over {} days",
            summary.orders_inserted, summary.window_days
        );
        Ok(summary)
    }

    /// Stage 1: upsert the baseline catalog and per-product inventory.
    ///
    /// Idempotent: rerunning refreshes `updated_at` but creates no
    /// duplicates and leaves `created_at` untouched on existing rows.
    pub async fn ensure_reference_data<R: Rng>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<SeedSummary, SeedError> {
        info!("Ensuring baseline customers");
        let customers = base_customers(now);
        let customers_upserted = self
            .store
            .upsert_many(collections::CUSTOMERS, "customer_id", &customers)
            .await?;

        info!("Ensuring vendors");
        let vendors = base_vendors(now);
        let vendors_upserted = self
            .store
            .upsert_many(collections::VENDORS, "vendor_id", &vendors)
            .await?;

        info!("Ensuring products and inventory");
        let products = base_products(now);
        for product in &products {
            self.store
                .upsert_one(
                    collections::PRODUCTS,
                    doc! { "product_id": &product.product_id },
                    product,
                )
                .await?;

            let stock = warehouse_stock(rng, &product.product_id, now);
            self.store
                .upsert_one(
                    collections::INVENTORY,
                    doc! {
                        "product_id": &stock.product_id,
                        "location_id": &stock.location_id,
                    },
                    &stock,
                )
                .await?;
        }

        Ok(SeedSummary {
            customers_upserted,
            vendors_upserted,
            products_upserted: products.len() as u64,
            ..SeedSummary::default()
        })
    }

    /// Stage 2: insert synthetic customers continuing the id sequence.
    ///
    /// Not idempotent by design: inserts are unconditional, so a rerun
    /// without resetting the collection duplicates them.
    pub async fn expand_customers<R: Rng>(
        &self,
        rng: &mut R,
        count: u64,
        now: DateTime<Utc>,
    ) -> Result<u64, SeedError> {
        let existing = self.store.count(collections::CUSTOMERS).await?;
        info!(
            "Adding {} synthetic customers (current count: {})",
            count, existing
        );

        let customers = synthetic_customers(rng, existing, count, now);
        let inserted = self
            .store
            .insert_many(collections::CUSTOMERS, &customers)
            .await?;
        info!("Inserted {} synthetic customers", inserted);
        Ok(inserted)
    }

    /// Stage 3 + 4: regenerate the order history, then declare indexes.
    ///
    /// Preloads active customers, active vendors, and the full product
    /// catalog; fails fast if any set is empty, before clearing the
    /// existing orders. Each day's batch is one bulk write.
    pub async fn generate_orders<R: Rng>(
        &self,
        rng: &mut R,
        plan: &OrderPlan,
        now: DateTime<Utc>,
    ) -> Result<u64, SeedError> {
        let active = doc! { "status": EntityStatus::Active.as_str() };
        let customers: Vec<Customer> = self
            .store
            .find_all(collections::CUSTOMERS, active.clone())
            .await?;
        let vendors: Vec<Vendor> = self.store.find_all(collections::VENDORS, active).await?;
        let products: Vec<Product> = self
            .store
            .find_all(collections::PRODUCTS, doc! {})
            .await?;

        let mut synthesizer = OrderSynthesizer::new(plan.clone(), customers, vendors, products)?;

        info!("Clearing existing orders");
        let cleared = self.store.delete_all(collections::ORDERS, doc! {}).await?;
        debug!("Removed {} existing orders", cleared);

        let mut total = 0u64;
        for offset in 0..plan.days_back {
            let day = seed_generator::generators::window_day(now, plan.days_back, offset);
            let orders = synthesizer.synthesize_day(rng, day);
            debug!(
                "Generated {} orders for {}",
                orders.len(),
                day.format("%Y-%m-%d")
            );
            total += self.store.insert_many(collections::ORDERS, &orders).await?;
        }

        info!("Inserted {} orders; declaring order indexes", total);
        self.store
            .create_indexes(collections::ORDERS, order_indexes())
            .await?;

        Ok(total)
    }
}
