//! Configuration module for the manifold analysis library.

pub mod analysis;

// Re-export commonly used items
pub use analysis::{ANALYSIS, EPSILON};
