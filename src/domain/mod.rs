// Domain types and value objects
pub mod price_series;
pub mod timescale;

// Re-export commonly used types
pub use price_series::{MIN_SAMPLES, PriceSeries};
pub use timescale::TimeScale;
