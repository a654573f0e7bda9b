//! Series loading for the CLI driver
//!
//! The library itself performs no I/O; this module is binary-side glue for
//! getting a `PriceSeries` from a CSV file or the built-in demo generator.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::DateTime;

use crate::domain::PriceSeries;

/// 2024-01-01T00:00:00Z, the fixed origin of the demo series
const DEMO_START_MS: i64 = 1_704_067_200_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Load a `timestamp,price,volume` CSV. Timestamps accept epoch
/// milliseconds or RFC 3339; a non-numeric first line is treated as a
/// header. Volume column is optional.
pub fn load_csv(path: &Path) -> Result<PriceSeries> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read price series from {:?}", path))?;

    let mut timestamps: Vec<i64> = Vec::new();
    let mut prices: Vec<f64> = Vec::new();
    let mut volumes: Vec<f64> = Vec::new();
    let mut saw_volume = false;

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            bail!("line {}: expected at least timestamp,price", line_no + 1);
        }

        let Ok(timestamp) = parse_timestamp(fields[0]) else {
            if line_no == 0 {
                // Header row
                continue;
            }
            bail!("line {}: unparseable timestamp '{}'", line_no + 1, fields[0]);
        };

        let price: f64 = fields[1]
            .parse()
            .with_context(|| format!("line {}: unparseable price '{}'", line_no + 1, fields[1]))?;

        timestamps.push(timestamp);
        prices.push(price);

        if let Some(vol_field) = fields.get(2) {
            saw_volume = true;
            let volume: f64 = vol_field.parse().with_context(|| {
                format!("line {}: unparseable volume '{}'", line_no + 1, vol_field)
            })?;
            volumes.push(volume);
        } else if saw_volume {
            bail!("line {}: volume column present on earlier lines but missing here", line_no + 1);
        }
    }

    let volumes = if saw_volume { Some(volumes) } else { None };
    Ok(PriceSeries::new(prices, volumes, Some(timestamps))?)
}

/// Deterministic synthetic daily series: a gentle drift with two
/// superimposed oscillations and a cyclic volume column. Good enough to
/// exercise every metric without shipping market data.
pub fn demo_series(len: usize) -> PriceSeries {
    let mut prices = Vec::with_capacity(len);
    let mut volumes = Vec::with_capacity(len);
    let mut timestamps = Vec::with_capacity(len);

    for i in 0..len {
        let t = i as f64;
        let price = 100.0 + t * 0.08 + (t / 9.0).sin() * 4.0 + (t / 2.3).sin() * 1.2;
        let volume = 1000.0 + (t / 5.0).sin().abs() * 400.0;

        prices.push(price);
        volumes.push(volume);
        timestamps.push(DEMO_START_MS + i as i64 * MS_PER_DAY);
    }

    PriceSeries::new(prices, Some(volumes), Some(timestamps))
        .expect("demo series construction is infallible for len >= 2")
}

fn parse_timestamp(field: &str) -> Result<i64> {
    if let Ok(ms) = field.parse::<i64>() {
        return Ok(ms);
    }
    let parsed = DateTime::parse_from_rfc3339(field)?;
    Ok(parsed.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_series_shape() {
        let series = demo_series(240);
        assert_eq!(series.len(), 240);
        assert!(series.volumes().is_some());
        let ts = series.timestamps().unwrap();
        assert_eq!(ts[1] - ts[0], MS_PER_DAY);
    }

    #[test]
    fn test_parse_timestamp_both_formats() {
        assert_eq!(parse_timestamp("1704067200000").unwrap(), DEMO_START_MS);
        assert_eq!(
            parse_timestamp("2024-01-01T00:00:00Z").unwrap(),
            DEMO_START_MS
        );
        assert!(parse_timestamp("yesterday").is_err());
    }
}
