use anyhow::{Result, bail};
use clap::Parser;
use strum::IntoEnumIterator;

use price_manifold::data::{demo_series, load_csv};
use price_manifold::{
    Cli, ManifoldEngine, ManifoldInterpretation, ManifoldMetrics, MultiScaleAnalyzer,
    PhaseInterpreter, PriceSeries, TimeScale,
};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();

    // C. Load the series
    let series: PriceSeries = match &args.input {
        Some(path) => load_csv(path)?,
        None => {
            log::info!("No --input given, analyzing the built-in demo series");
            demo_series(240)
        }
    };

    let scales: Option<Vec<TimeScale>> = if args.scales.is_empty() {
        None
    } else {
        Some(
            args.scales
                .iter()
                .map(|s| s.parse())
                .collect::<price_manifold::Result<_>>()?,
        )
    };

    // D. Analyze every requested scale, then interpret each snapshot
    let engine = ManifoldEngine::new(args.sensitivity)?;
    let analyzer = MultiScaleAnalyzer::new(engine);
    let results = analyzer.analyze_multiscale(&series, scales.as_deref());

    if results.is_empty() {
        bail!("No scale produced a usable analysis ({} samples)", series.len());
    }

    let interpreter = PhaseInterpreter::new();

    // E. Report
    if args.json {
        let mut scales_json = serde_json::Map::new();
        for scale in TimeScale::iter() {
            if let Some(metrics) = results.get(&scale) {
                let interpretation = interpreter.interpret(metrics);
                scales_json.insert(
                    scale.to_string(),
                    serde_json::json!({
                        "metrics": metrics,
                        "interpretation": interpretation,
                    }),
                );
            }
        }
        let document = serde_json::json!({ "scales": scales_json });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        for scale in TimeScale::iter() {
            if let Some(metrics) = results.get(&scale) {
                print_report(scale, metrics, &interpreter.interpret(metrics));
            }
        }
    }

    Ok(())
}

fn print_report(scale: TimeScale, metrics: &ManifoldMetrics, reading: &ManifoldInterpretation) {
    println!("=== {} ({} samples, {}) ===", scale, metrics.prices.len(), span_of(metrics));
    println!(
        "Phase: {} (confidence {:.2})",
        reading.current_phase, reading.phase_confidence
    );
    println!(
        "Conductor: {} | Singer: {}",
        reading.conductor_reading, reading.singer_reading
    );
    println!(
        "Curvature: {} | Tension: {} | Entropy: {}",
        reading.curvature_state, reading.tension_description, reading.entropy_state
    );
    if let Some(wave) = &reading.wave_position {
        println!("Wave: {}", wave);
    }
    if let Some(attractor) = &reading.nearest_attractor {
        println!(
            "Nearest attractor: {} (pull {:.3})",
            attractor.description, reading.attractor_pull_strength
        );
    }
    println!("{}", reading.market_narrative);
    if let Some(warning) = &reading.tension_warning {
        println!("{}", warning);
    }
    println!();
}

/// Human-readable time span of a snapshot. Synthetic (index) timestamps
/// just print as a sample range.
fn span_of(metrics: &ManifoldMetrics) -> String {
    let (Some(&first), Some(&last)) = (metrics.timestamps.first(), metrics.timestamps.last())
    else {
        return "empty".to_string();
    };

    match (
        chrono::DateTime::from_timestamp_millis(first),
        chrono::DateTime::from_timestamp_millis(last),
    ) {
        // Treat anything before ~2001 as a synthetic index rather than a date
        (Some(start), Some(end)) if first > 1_000_000_000_000 => {
            format!("{} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
        }
        _ => format!("index {} to {}", first, last),
    }
}
