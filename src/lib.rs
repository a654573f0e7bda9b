#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{ManifoldEngine, MultiScaleAnalyzer, PhaseInterpreter};
pub use domain::{PriceSeries, TimeScale};
pub use error::{ManifoldError, Result};
pub use models::{
    Attractor, ConductorReading, ManifoldInterpretation, ManifoldMetrics, ManifoldPhase,
    SingerReading,
};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV input (timestamp,price[,volume]); uses the built-in demo series when omitted
    #[arg(long)]
    pub input: Option<std::path::PathBuf>,

    /// Timescales to analyze, comma separated (monthly, weekly, daily, intraday).
    /// All four when omitted.
    #[arg(long, value_delimiter = ',')]
    pub scales: Vec<String>,

    /// Singularity detection sensitivity multiplier
    #[arg(long, default_value_t = 1.0)]
    pub sensitivity: f64,

    /// Emit the full analysis as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
