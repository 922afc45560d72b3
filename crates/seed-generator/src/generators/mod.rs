//! Primitive random value generators.
//!
//! Small building blocks shared by the customer and order synthesizers.

mod choice;
mod numeric;
mod timestamp;

pub use choice::pick;
pub use numeric::{int_range, price_factor};
pub use timestamp::{time_in_day, window_day};
