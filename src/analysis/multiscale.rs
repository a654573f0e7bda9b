//! Multi-scale coordination: the same series analyzed at several temporal
//! resolutions.
//!
//! Resampling is fixed-stride decimation (see [`TimeScale::stride`]), an
//! acknowledged approximation of true per-period OHLC aggregation. Each
//! scale is an independent pure computation, so the fan-out runs in
//! parallel and a failure at one scale (e.g. too few samples left after
//! decimation) is logged and skipped without aborting the rest.

use std::collections::HashMap;

use rayon::prelude::*;
use strum::IntoEnumIterator;

use crate::analysis::engine::ManifoldEngine;
use crate::domain::{PriceSeries, TimeScale};
use crate::error::Result;
use crate::models::ManifoldMetrics;

#[derive(Debug, Clone, Copy, Default)]
pub struct MultiScaleAnalyzer {
    engine: ManifoldEngine,
}

impl MultiScaleAnalyzer {
    pub fn new(engine: ManifoldEngine) -> Self {
        Self { engine }
    }

    /// Analyze the series at every requested scale (all four when `scales`
    /// is `None`). Returns one snapshot per scale that succeeded.
    pub fn analyze_multiscale(
        &self,
        series: &PriceSeries,
        scales: Option<&[TimeScale]>,
    ) -> HashMap<TimeScale, ManifoldMetrics> {
        let scales: Vec<TimeScale> = match scales {
            Some(requested) => requested.to_vec(),
            None => TimeScale::iter().collect(),
        };

        scales
            .par_iter()
            .filter_map(|&scale| match self.analyze_scale(series, scale) {
                Ok(metrics) => Some((scale, metrics)),
                Err(err) => {
                    log::warn!("Skipping {} scale: {}", scale, err);
                    None
                }
            })
            .collect()
    }

    fn analyze_scale(&self, series: &PriceSeries, scale: TimeScale) -> Result<ManifoldMetrics> {
        let resampled = series.decimate(scale.stride())?;
        self.engine.analyze(&resampled, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wavy_series(n: usize) -> PriceSeries {
        let prices = (0..n)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 6.0 + i as f64 * 0.05)
            .collect();
        PriceSeries::from_prices(prices).unwrap()
    }

    #[test]
    fn test_all_scales_with_expected_lengths() {
        let analyzer = MultiScaleAnalyzer::default();
        let results = analyzer.analyze_multiscale(&wavy_series(100), None);

        assert_eq!(results.len(), 4, "100 samples support every scale");
        assert_eq!(results[&TimeScale::Monthly].prices.len(), 5);
        assert_eq!(results[&TimeScale::Weekly].prices.len(), 20);
        assert_eq!(results[&TimeScale::Daily].prices.len(), 100);
        assert_eq!(results[&TimeScale::Intraday].prices.len(), 100);
    }

    #[test]
    fn test_scale_failure_does_not_abort_others() {
        let analyzer = MultiScaleAnalyzer::default();
        // 19 samples decimate to a single sample at the monthly stride,
        // which is below the analyzable minimum
        let results = analyzer.analyze_multiscale(&wavy_series(19), None);

        assert!(!results.contains_key(&TimeScale::Monthly));
        assert!(results.contains_key(&TimeScale::Weekly));
        assert!(results.contains_key(&TimeScale::Daily));
        assert!(results.contains_key(&TimeScale::Intraday));
    }

    #[test]
    fn test_subset_of_scales() {
        let analyzer = MultiScaleAnalyzer::default();
        let results =
            analyzer.analyze_multiscale(&wavy_series(60), Some(&[TimeScale::Daily]));

        assert_eq!(results.len(), 1);
        assert_eq!(results[&TimeScale::Daily].timescale, TimeScale::Daily);
    }

    #[test]
    fn test_scales_tagged_with_their_resolution() {
        let analyzer = MultiScaleAnalyzer::default();
        let results = analyzer.analyze_multiscale(&wavy_series(100), None);
        for (scale, metrics) in &results {
            assert_eq!(metrics.timescale, *scale);
        }
    }
}
