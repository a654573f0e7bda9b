use serde::{Deserialize, Serialize};

use crate::error::{ManifoldError, Result};

/// Caller-owned price series: an ordered run of samples with optional
/// parallel volume and timestamp columns.
///
/// Construction validates every invariant up front so the analysis code can
/// assume well-formed input. The series is never mutated by this crate.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PriceSeries {
    prices: Vec<f64>,
    volumes: Option<Vec<f64>>,
    timestamps: Option<Vec<i64>>,
}

/// Fewest samples any analysis can work with (one return)
pub const MIN_SAMPLES: usize = 2;

impl PriceSeries {
    pub fn new(
        prices: Vec<f64>,
        volumes: Option<Vec<f64>>,
        timestamps: Option<Vec<i64>>,
    ) -> Result<Self> {
        if prices.len() < MIN_SAMPLES {
            return Err(ManifoldError::InsufficientData {
                required: MIN_SAMPLES,
                actual: prices.len(),
            });
        }

        if let Some(vols) = &volumes {
            if vols.len() != prices.len() {
                return Err(ManifoldError::LengthMismatch {
                    what: "volumes",
                    expected: prices.len(),
                    actual: vols.len(),
                });
            }
            if let Some(idx) = vols.iter().position(|v| *v < 0.0 || !v.is_finite()) {
                return Err(ManifoldError::InvalidConfiguration(format!(
                    "volume at index {} is negative or non-finite",
                    idx
                )));
            }
        }

        if let Some(ts) = &timestamps {
            if ts.len() != prices.len() {
                return Err(ManifoldError::LengthMismatch {
                    what: "timestamps",
                    expected: prices.len(),
                    actual: ts.len(),
                });
            }
            // Non-decreasing, duplicates allowed (exchange feeds repeat ms stamps)
            if let Some(idx) = ts.windows(2).position(|w| w[1] < w[0]) {
                return Err(ManifoldError::NonMonotonicTimestamps { index: idx + 1 });
            }
        }

        Ok(Self {
            prices,
            volumes,
            timestamps,
        })
    }

    /// Series with prices only (synthetic timestamps, no volume weighting)
    pub fn from_prices(prices: Vec<f64>) -> Result<Self> {
        Self::new(prices, None, None)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn volumes(&self) -> Option<&[f64]> {
        self.volumes.as_deref()
    }

    pub fn timestamps(&self) -> Option<&[i64]> {
        self.timestamps.as_deref()
    }

    /// Real timestamps when supplied, else the synthetic 0..N index
    pub fn effective_timestamps(&self) -> Vec<i64> {
        match &self.timestamps {
            Some(ts) => ts.clone(),
            None => (0..self.prices.len() as i64).collect(),
        }
    }

    /// Every `stride`-th sample as a new series (all columns decimated in
    /// lockstep). Stride 1 is a plain copy.
    pub fn decimate(&self, stride: usize) -> Result<Self> {
        let stride = stride.max(1);
        let take_nth = |v: &[f64]| v.iter().step_by(stride).copied().collect::<Vec<f64>>();

        let prices = take_nth(&self.prices);
        let volumes = self.volumes.as_deref().map(take_nth);
        let timestamps = self
            .timestamps
            .as_ref()
            .map(|ts| ts.iter().step_by(stride).copied().collect());

        Self::new(prices, volumes, timestamps)
    }
}
