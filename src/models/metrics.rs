use serde::{Deserialize, Serialize};

use crate::domain::TimeScale;

/// A price level with historically high visitation density and its
/// normalized pull strength in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attractor {
    pub price: f64,
    pub strength: f64,
}

/// Complete geometric snapshot of one analyzed series.
///
/// Created once per `ManifoldEngine::analyze` call and never mutated after
/// construction. All per-sample arrays mirror the input length. Serializes
/// to the plain JSON mapping downstream consumers expect (arrays of floats,
/// snake_case timescale tag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifoldMetrics {
    pub timestamps: Vec<i64>,
    pub prices: Vec<f64>,
    pub curvature: Vec<f64>,
    pub entropy: f64,
    pub local_entropy: Vec<f64>,
    /// Ascending sample indices where curvature and tension jointly peak
    pub singularities: Vec<usize>,
    /// Strongest-first, never empty (last-price fallback)
    pub attractors: Vec<Attractor>,
    pub ricci_flow: Vec<f64>,
    pub tension: Vec<f64>,
    pub timescale: TimeScale,
}

impl ManifoldMetrics {
    /// Latest value of a per-sample array, zero when empty.
    /// The interpreter must never fail, so missing data reads as a flat
    /// surface rather than an error.
    fn latest(values: &[f64]) -> f64 {
        values.last().copied().unwrap_or(0.0)
    }

    pub fn latest_price(&self) -> f64 {
        Self::latest(&self.prices)
    }

    pub fn latest_curvature(&self) -> f64 {
        Self::latest(&self.curvature)
    }

    pub fn latest_tension(&self) -> f64 {
        Self::latest(&self.tension)
    }

    pub fn latest_local_entropy(&self) -> f64 {
        Self::latest(&self.local_entropy)
    }

    pub fn latest_ricci_flow(&self) -> f64 {
        Self::latest(&self.ricci_flow)
    }

    /// Trailing slice of up to `window` samples
    pub fn tail_of<'a>(values: &'a [f64], window: usize) -> &'a [f64] {
        &values[values.len().saturating_sub(window)..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ManifoldMetrics {
        ManifoldMetrics {
            timestamps: vec![0, 1, 2],
            prices: vec![100.0, 101.0, 102.0],
            curvature: vec![0.0, 0.1, 0.2],
            entropy: 3.25,
            local_entropy: vec![1.0, 1.0, 1.5],
            singularities: vec![1],
            attractors: vec![Attractor {
                price: 101.0,
                strength: 1.0,
            }],
            ricci_flow: vec![0.0, -0.01, -0.02],
            tension: vec![0.0, 0.5, 0.9],
            timescale: TimeScale::Daily,
        }
    }

    #[test]
    fn test_latest_accessors() {
        let m = snapshot();
        assert_eq!(m.latest_price(), 102.0);
        assert_eq!(m.latest_curvature(), 0.2);
        assert_eq!(m.latest_tension(), 0.9);
        assert_eq!(m.latest_local_entropy(), 1.5);
        assert_eq!(m.latest_ricci_flow(), -0.02);
    }

    #[test]
    fn test_tail_shorter_than_window() {
        let m = snapshot();
        assert_eq!(ManifoldMetrics::tail_of(&m.tension, 10).len(), 3);
        assert_eq!(ManifoldMetrics::tail_of(&m.tension, 2), &[0.5, 0.9]);
    }

    #[test]
    fn test_json_round_trip_preserves_scalars() {
        let m = snapshot();
        let json = serde_json::to_value(&m).expect("serialize");
        assert_eq!(json["timescale"], "daily");

        let back: ManifoldMetrics = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.entropy, m.entropy, "entropy must round-trip exactly");
        assert_eq!(back.timescale, m.timescale);
        assert_eq!(back.singularities, m.singularities);
        assert_eq!(back.attractors[0].price, m.attractors[0].price);
    }
}
