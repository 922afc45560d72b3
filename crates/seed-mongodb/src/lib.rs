//! MongoDB persistence and the ordered seeding pipeline.

pub mod error;
pub mod pipeline;
pub mod store;

pub use error::SeedError;
pub use pipeline::{SeedOptions, SeedPipeline, SeedSummary};
pub use store::{order_indexes, SeedStore};
