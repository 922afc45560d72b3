//! Error types for the seeding pipeline.

use thiserror::Error;

/// Errors that can occur while seeding the sales database.
///
/// All of these are fatal: the pipeline has no retry or resume, the
/// operator reruns the whole invocation.
#[derive(Error, Debug)]
pub enum SeedError {
    /// MongoDB connection or operation error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// Document serialization error.
    #[error("BSON serialization error: {0}")]
    Bson(#[from] bson::ser::Error),

    /// Missing prerequisite data, raised before any mutation.
    #[error(transparent)]
    Generator(#[from] seed_generator::GeneratorError),

    /// A document handed to an upsert lacks its natural key field.
    #[error("document in '{collection}' is missing key field '{field}'")]
    MissingKey { collection: String, field: String },
}
