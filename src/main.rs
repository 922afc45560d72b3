//! Command-line interface for sales-seed
//!
//! # Usage Examples
//!
//! ## Seeding
//! ```bash
//! # Seed the sales database (MONGO_URI from the environment)
//! sales-seed seed
//!
//! # Reproducible run with a shorter window and no synthetic customers
//! sales-seed seed --seed 42 --days-back 30 --extra-customers 0
//! ```
//!
//! ## Deployment
//! ```bash
//! # Package lambdas/seed-sales-data and publish it
//! sales-seed deploy seed-sales-data
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use sales_seed::handler;
use seed_generator::OrderPlan;
use seed_mongodb::SeedOptions;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sales-seed")]
#[command(about = "Seeds the sales database with synthetic retail data and deploys lambda units")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed reference data, synthetic customers, and the order history
    Seed {
        /// MongoDB connection string
        #[arg(long, env = "MONGO_URI")]
        mongo_uri: String,

        /// Database to seed
        #[arg(long, default_value = seed_core::DB_NAME)]
        database: String,

        /// Trailing window of days to generate orders for
        #[arg(long, default_value = "180")]
        days_back: u32,

        /// Baseline order count on weekdays
        #[arg(long, default_value = "80")]
        weekday_base_orders: i64,

        /// Baseline order count on weekends
        #[arg(long, default_value = "40")]
        weekend_base_orders: i64,

        /// Synthetic customers to add; 0 skips the stage. Inserts are
        /// unconditional, so reruns duplicate unless this is 0.
        #[arg(long, default_value = "200")]
        extra_customers: u64,

        /// RNG seed for reproducible generation (default: entropy)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the current UTC time (the time handler's response)
    Time,

    /// Package a lambda unit and publish it
    Deploy {
        /// Unit name (directory under lambdas/)
        unit: String,

        /// Repository root containing the lambdas/ directory
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed {
            mongo_uri,
            database,
            days_back,
            weekday_base_orders,
            weekend_base_orders,
            extra_customers,
            seed,
        } => {
            let options = SeedOptions {
                extra_customers,
                plan: OrderPlan {
                    days_back,
                    weekday_base: weekday_base_orders,
                    weekend_base: weekend_base_orders,
                    ..OrderPlan::default()
                },
            };

            let summary = handler::run_seed(&mongo_uri, &database, &options, seed).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Time => {
            let response = handler::time_handler(Value::Null, Value::Null);
            println!("{}", serde_json::to_string(&response)?);
        }
        Commands::Deploy { unit, root } => {
            let outcome = seed_deploy::deploy(&root, &unit).await?;
            println!("Deployed {} -> {}", outcome.unit, outcome.versioned_arn);
            println!(
                "Runtime parameter {} = {}",
                outcome.parameter_path, outcome.unversioned_arn
            );
        }
    }

    Ok(())
}
