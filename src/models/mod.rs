// Domain models for manifold analysis
// These modules contain pure value objects independent of the algorithms

pub mod interpretation;
pub mod metrics;

// Re-export key types for convenience
pub use interpretation::{
    AttractorReference, ConductorReading, ManifoldInterpretation, ManifoldPhase, SingerReading,
};
pub use metrics::{Attractor, ManifoldMetrics};
