use std::path::PathBuf;

use anyhow::{Context, Result};

use price_manifold::data::demo_series;

const DEFAULT_OUTPUT: &str = "demo_series.csv";
const DEFAULT_LEN: usize = 240;

/// Writes the built-in deterministic demo series to a CSV usable with
/// `price-manifold --input`.
fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let series = demo_series(DEFAULT_LEN);
    let timestamps = series
        .timestamps()
        .expect("demo series always carries timestamps");
    let volumes = series
        .volumes()
        .expect("demo series always carries volumes");

    let mut csv = String::from("timestamp,price,volume\n");
    for ((&ts, &price), &volume) in timestamps.iter().zip(series.prices()).zip(volumes) {
        csv.push_str(&format!("{},{:.4},{:.1}\n", ts, price, volume));
    }

    std::fs::write(&output, csv)
        .with_context(|| format!("Failed to write demo series to {:?}", output))?;

    println!("✅ Demo series written to {:?} ({} samples)", output, series.len());
    Ok(())
}
