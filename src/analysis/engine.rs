//! Metrics engine: geometric analysis of a price series
//!
//! Treats the series as a geometric surface: curvature is acceleration of
//! the (normalized) trend, entropy measures disorder of the return
//! distribution, tension is stored directional pressure, singularities are
//! joint curvature/tension extremes and attractors are high-visitation
//! price levels. Everything here is a deterministic, side-effect-free
//! function of its arguments plus the engine's one configuration scalar.

use std::cmp::Ordering;

use find_peaks::PeakFinder;
use itertools::izip;

use crate::config::{ANALYSIS, EPSILON};
use crate::domain::{PriceSeries, TimeScale};
use crate::error::{ManifoldError, Result};
use crate::models::{Attractor, ManifoldMetrics};
use crate::utils::maths_utils::{
    gaussian_smooth, gradient, histogram, histogram_density, mean, normalize_max, population_std,
    zscore,
};

#[derive(Debug, Clone, Copy)]
pub struct ManifoldEngine {
    /// Multiplies the singularity detection threshold only
    sensitivity: f64,
}

impl Default for ManifoldEngine {
    fn default() -> Self {
        // 1.0 is always inside the valid range
        Self { sensitivity: 1.0 }
    }
}

impl ManifoldEngine {
    pub fn new(sensitivity: f64) -> Result<Self> {
        if !sensitivity.is_finite()
            || sensitivity <= 0.0
            || sensitivity > ANALYSIS.detection.max_sensitivity
        {
            return Err(ManifoldError::InvalidConfiguration(format!(
                "sensitivity {} outside (0, {}]",
                sensitivity, ANALYSIS.detection.max_sensitivity
            )));
        }
        Ok(Self { sensitivity })
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Perform the complete analysis of one validated series.
    ///
    /// The minimum-length invariant (2 samples) is enforced by
    /// [`PriceSeries::new`], so every call here is well-formed. All
    /// per-sample output arrays have the input length.
    pub fn analyze(&self, series: &PriceSeries, timescale: TimeScale) -> Result<ManifoldMetrics> {
        let prices = series.prices();
        let volume = series.volumes();

        // Geometric properties
        let curvature = self.calculate_curvature(prices, ANALYSIS.engine.curvature_smooth_window);
        let entropy = self.calculate_global_entropy(prices, ANALYSIS.engine.entropy_bins);
        let local_entropy =
            self.calculate_local_entropy(prices, ANALYSIS.engine.local_entropy_window);
        let tension = self.calculate_tension(prices, volume);

        // Critical points
        let singularities = self.detect_singularities(
            &curvature,
            &tension,
            ANALYSIS.detection.singularity_threshold,
        );
        let attractors = self.find_attractors(prices, volume, ANALYSIS.detection.max_attractors);

        // Flow dynamics
        let ricci_flow =
            self.calculate_ricci_flow(&curvature, &tension, ANALYSIS.engine.ricci_flow_dt);

        Ok(ManifoldMetrics {
            timestamps: series.effective_timestamps(),
            prices: prices.to_vec(),
            curvature,
            entropy,
            local_entropy,
            singularities,
            attractors,
            ricci_flow,
            tension,
            timescale,
        })
    }

    /// Curvature of the price surface: second discrete derivative of the
    /// zero-mean/unit-variance normalized prices, gaussian-smoothed
    /// (sigma = smooth_window / 3) to suppress noise without flattening
    /// the peaks.
    pub fn calculate_curvature(&self, prices: &[f64], smooth_window: usize) -> Vec<f64> {
        // Normalize first so curvature is comparable across price scales
        let normalized = zscore(prices);

        let velocity = gradient(&normalized);
        let curvature = gradient(&velocity);

        if smooth_window > 1 {
            gaussian_smooth(&curvature, smooth_window as f64 / 3.0)
        } else {
            curvature
        }
    }

    /// Shannon entropy of the whole-series return distribution.
    /// High entropy = chaotic, high-variance movement; low = calm.
    pub fn calculate_global_entropy(&self, prices: &[f64], bins: usize) -> f64 {
        if prices.len() < 2 {
            return 0.0;
        }
        let returns = simple_returns(prices);
        shannon_entropy(&returns, bins)
    }

    /// Rolling entropy over a trailing window, revealing chaotic vs stable
    /// regions inside the series. Indices below `window` are backfilled
    /// with the first computed value, so there is no look-ahead. A series
    /// no longer than `window` stays all zero instead of failing.
    pub fn calculate_local_entropy(&self, prices: &[f64], window: usize) -> Vec<f64> {
        let n = prices.len();
        let mut local_entropy = vec![0.0; n];
        let bins = (window / 2).min(10).max(1);

        for i in window..n {
            let returns = simple_returns(&prices[i - window..i]);
            local_entropy[i] = shannon_entropy(&returns, bins);
        }

        if window < n {
            let first = local_entropy[window];
            local_entropy[..window].fill(first);
        }

        local_entropy
    }

    /// Accumulated tension: |cumulative return momentum| scaled by the
    /// relative distance from the long gaussian equilibrium average,
    /// optionally volume-weighted, z-scored at the end.
    pub fn calculate_tension(&self, prices: &[f64], volume: Option<&[f64]>) -> Vec<f64> {
        let n = prices.len();

        // Per-step returns with a zero first step; the denominator is the
        // current price, matching the reference semantics
        let mut momentum = Vec::with_capacity(n);
        let mut acc = 0.0;
        for i in 0..n {
            let step = if i == 0 {
                0.0
            } else {
                (prices[i] - prices[i - 1]) / (prices[i] + EPSILON)
            };
            acc += step;
            momentum.push(acc);
        }

        let equilibrium = gaussian_smooth(prices, ANALYSIS.engine.tension_equilibrium_sigma);

        let mut tension: Vec<f64> = izip!(prices, &momentum, &equilibrium)
            .map(|(p, m, eq)| {
                let distance = (p - eq).abs() / (eq + EPSILON);
                m.abs() * distance
            })
            .collect();

        if let Some(vols) = volume {
            let vol_mean = mean(vols);
            for (t, v) in tension.iter_mut().zip(vols) {
                *t *= v / (vol_mean + EPSILON);
            }
        }

        zscore(&tension)
    }

    /// Indices where normalized |curvature| and |tension| jointly peak
    /// above threshold * sensitivity, at least
    /// `singularity_min_separation` samples apart, ascending.
    pub fn detect_singularities(
        &self,
        curvature: &[f64],
        tension: &[f64],
        threshold: f64,
    ) -> Vec<usize> {
        let curv_sd = population_std(curvature);
        let tens_sd = population_std(tension);

        let score: Vec<f64> = curvature
            .iter()
            .zip(tension)
            .map(|(c, t)| (c.abs() / (curv_sd + EPSILON)) * (t.abs() / (tens_sd + EPSILON)))
            .collect();

        let mut finder = PeakFinder::new(&score);
        finder.with_min_height(threshold * self.sensitivity);

        let mut candidates: Vec<(usize, f64)> = finder
            .find_peaks()
            .iter()
            .map(|p| {
                let idx = p.middle_position();
                (idx, score[idx])
            })
            .collect();

        enforce_min_separation(
            &mut candidates,
            ANALYSIS.detection.singularity_min_separation,
        )
    }

    /// Price levels where the series rests: peaks of the (optionally
    /// volume-filled) 50-bucket price histogram, prominence-filtered,
    /// strengths max-normalized to [0, 1], strongest first.
    /// Never empty: falls back to the last price at strength 1.0.
    pub fn find_attractors(
        &self,
        prices: &[f64],
        volume: Option<&[f64]>,
        num_attractors: usize,
    ) -> Vec<Attractor> {
        let bins = ANALYSIS.detection.attractor_bins;
        let (mut heights, edges) = histogram(prices, bins);
        let centers: Vec<f64> = edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();

        if let Some(vols) = volume {
            let lo = edges[0];
            let width = edges[1] - edges[0];
            let mut weighted = vec![0.0; bins];
            for (&p, &v) in prices.iter().zip(vols) {
                let idx = ((p - lo) / width) as usize;
                // A sample sitting exactly on the top edge falls outside,
                // mirroring the reference binning
                if idx < bins {
                    weighted[idx] += v;
                }
            }
            heights = weighted;
        }

        let min_prominence = ANALYSIS.detection.attractor_prominence_factor
            * population_std(&heights);

        let mut finder = PeakFinder::new(&heights);
        finder.with_min_prominence(min_prominence);

        let mut candidates: Vec<(usize, f64)> = finder
            .find_peaks()
            .iter()
            .map(|p| {
                let idx = p.middle_position();
                (idx, heights[idx])
            })
            .collect();

        let kept = enforce_min_separation(
            &mut candidates,
            ANALYSIS.detection.attractor_min_separation,
        );

        if kept.is_empty() {
            // No density peak at all (flat or near-flat histogram):
            // the current price is the only attractor we can claim
            return vec![Attractor {
                price: prices[prices.len() - 1],
                strength: 1.0,
            }];
        }

        let peak_heights: Vec<f64> = kept.iter().map(|&i| heights[i]).collect();
        let strengths = normalize_max(&peak_heights);

        let mut attractors: Vec<Attractor> = kept
            .iter()
            .zip(strengths)
            .map(|(&i, strength)| Attractor {
                price: centers[i],
                strength,
            })
            .collect();

        attractors.sort_by(|a, b| {
            b.strength
                .partial_cmp(&a.strength)
                .unwrap_or(Ordering::Equal)
        });
        attractors.truncate(num_attractors.max(1));
        attractors
    }

    /// Instantaneous rate of geometric relaxation: the smoothed gradient
    /// of flow = -dt * curvature * (1 + tension). Strong negative
    /// curvature under tension produces a strong smoothing flow.
    pub fn calculate_ricci_flow(&self, curvature: &[f64], tension: &[f64], dt: f64) -> Vec<f64> {
        let flow: Vec<f64> = curvature
            .iter()
            .zip(tension)
            .map(|(c, t)| -dt * c * (1.0 + t))
            .collect();

        let flow_gradient = gradient(&flow);
        gaussian_smooth(&flow_gradient, ANALYSIS.engine.ricci_flow_smooth_sigma)
    }
}

/// Simple returns r_i = (p_i+1 - p_i) / (p_i + eps), length N-1
fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|w| (w[1] - w[0]) / (w[0] + EPSILON))
        .collect()
}

/// Shannon entropy (-sum h*log2(h+eps)) of the density histogram of
/// `values`, empty buckets dropped
fn shannon_entropy(values: &[f64], bins: usize) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    histogram_density(values, bins)
        .iter()
        .filter(|&&h| h > 0.0)
        .map(|&h| -h * (h + EPSILON).log2())
        .sum()
}

/// Greedy peak thinning: strongest first, a candidate is kept only when no
/// already-kept peak lies within `min_distance`. Returned indices ascend.
fn enforce_min_separation(candidates: &mut Vec<(usize, f64)>, min_distance: usize) -> Vec<usize> {
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut kept: Vec<usize> = Vec::with_capacity(candidates.len());
    for &(idx, _) in candidates.iter() {
        if kept.iter().all(|&k| k.abs_diff(idx) >= min_distance) {
            kept.push(idx);
        }
    }

    kept.sort_unstable();
    kept
}
