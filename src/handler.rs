//! Stateless invocation handlers.
//!
//! These mirror the function-execution surface: each takes an opaque
//! event/context pair and returns a serializable status object. The CLI
//! shares [`run_seed`] with the seed handler so both paths run the same
//! pipeline.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::DB_NAME;
use seed_mongodb::{SeedOptions, SeedPipeline, SeedStore, SeedSummary};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Environment variable carrying the MongoDB connection string.
pub const MONGO_URI_VAR: &str = "MONGO_URI";

/// Status object returned by the seed handler.
#[derive(Debug, Clone, Serialize)]
pub struct SeedStatus {
    pub status: String,
    pub message: String,
}

/// Connect and run the full seeding pipeline.
///
/// `seed` fixes the RNG for reproducible runs; `None` seeds from entropy.
pub async fn run_seed(
    connection_string: &str,
    database: &str,
    options: &SeedOptions,
    seed: Option<u64>,
) -> Result<SeedSummary> {
    let store = SeedStore::connect(connection_string, database)
        .await
        .context("failed to connect to MongoDB")?;
    let pipeline = SeedPipeline::new(store);

    let mut rng = match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    };

    let summary = pipeline.run(&mut rng, options, Utc::now()).await?;
    Ok(summary)
}

/// Seed the sales database with default options.
///
/// The connection string comes from `MONGO_URI`; a missing value is a
/// fatal startup error raised before any work.
pub async fn seed_handler(event: Value, context: Value) -> Result<SeedStatus> {
    debug!("seed handler invoked: event={event} context={context}");

    let connection_string =
        std::env::var(MONGO_URI_VAR).context("Missing MONGO_URI environment variable")?;

    run_seed(&connection_string, DB_NAME, &SeedOptions::default(), None).await?;

    Ok(SeedStatus {
        status: "ok".to_string(),
        message: "Seeding complete".to_string(),
    })
}

/// HTTP-style response wrapper used by the time handler.
#[derive(Debug, Clone, Serialize)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Return the current UTC time as `{"time": "<ISO-8601>Z"}`.
pub fn time_handler(event: Value, context: Value) -> HttpResponse {
    debug!("time handler invoked: event={event} context={context}");

    let time = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    HttpResponse {
        status_code: 200,
        body: serde_json::json!({ "time": time }).to_string(),
    }
}
