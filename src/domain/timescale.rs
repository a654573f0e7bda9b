use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ManifoldError;

/// Temporal resolution a metrics snapshot was computed at.
///
/// Resampling is fixed-stride decimation of the caller's series, NOT OHLC
/// aggregation per period. Monthly keeps every 20th sample of daily data,
/// weekly every 5th; daily and intraday pass through untouched. An
/// acknowledged approximation: proper aggregation would need raw tick data
/// this crate never sees.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeScale {
    Monthly,
    Weekly,
    #[default]
    Daily,
    Intraday,
}

impl TimeScale {
    /// Decimation stride applied before analysis at this scale
    pub fn stride(&self) -> usize {
        match self {
            TimeScale::Monthly => 20,
            TimeScale::Weekly => 5,
            TimeScale::Daily => 1,
            // Assume the source data is already intraday resolution
            TimeScale::Intraday => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeScale::Monthly => "monthly",
            TimeScale::Weekly => "weekly",
            TimeScale::Daily => "daily",
            TimeScale::Intraday => "intraday",
        }
    }
}

impl std::fmt::Display for TimeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeScale {
    type Err = ManifoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(TimeScale::Monthly),
            "weekly" => Ok(TimeScale::Weekly),
            "daily" => Ok(TimeScale::Daily),
            "intraday" => Ok(TimeScale::Intraday),
            other => Err(ManifoldError::InvalidConfiguration(format!(
                "unsupported timescale '{}' (expected monthly, weekly, daily or intraday)",
                other
            ))),
        }
    }
}
