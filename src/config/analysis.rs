//! Analysis and computation configuration
//!
//! Every detection threshold in the engine and interpreter lives here as a
//! named constant. None of these numbers have a derivation from data; they
//! are the calibrated values of the methodology and are tuned here, never
//! re-derived.

/// Additive guard applied to every denominator so degenerate (zero-variance)
/// input yields zeros instead of NaN/Inf.
pub const EPSILON: f64 = 1e-8;

/// Settings for the metrics engine (curvature, entropy, tension, flow)
pub struct EngineSettings {
    // Curvature: gaussian sigma = smooth_window / 3
    pub curvature_smooth_window: usize,
    // Global entropy histogram buckets
    pub entropy_bins: usize,
    // Rolling window for local entropy (buckets = min(10, window/2))
    pub local_entropy_window: usize,
    // Sigma of the long gaussian average price ("equilibrium") used by tension
    pub tension_equilibrium_sigma: f64,
    // Ricci flow time step and smoothing sigma
    pub ricci_flow_dt: f64,
    pub ricci_flow_smooth_sigma: f64,
}

/// Settings for singularity and attractor detection
pub struct DetectionSettings {
    // Composite curvature*tension score must exceed threshold * sensitivity
    pub singularity_threshold: f64,
    // Minimum index separation between detected singularities
    pub singularity_min_separation: usize,
    // Price histogram buckets for attractor detection
    pub attractor_bins: usize,
    // Peak prominence must exceed this fraction of the bucket-height std
    pub attractor_prominence_factor: f64,
    // Minimum bucket separation between attractor peaks
    pub attractor_min_separation: usize,
    // Keep at most this many attractors (strongest first)
    pub max_attractors: usize,
    // Sensitivity must be finite and inside (0, max]
    pub max_sensitivity: f64,
}

/// Thresholds for the six-way phase cascade, in precedence order.
/// All compared against |curvature|, |tension|, latest local entropy and
/// |ricci flow| of the most recent sample.
pub struct PhaseThresholds {
    // Rule 1: SingularityForming
    pub singularity_curvature: f64,
    pub singularity_tension: f64,
    // Rule 2: RicciFlowSmoothing
    pub smoothing_flow: f64,
    pub smoothing_tension: f64,
    // Rule 3: ImpulseLegSharpening
    pub impulse_curvature: f64,
    pub impulse_tension: f64,
    pub impulse_flow_cap: f64,
    // Rule 4: CompressionBuilding
    pub compression_tension: f64,
    pub compression_curvature_cap: f64,
    // Rule 5: StableEquilibrium
    pub equilibrium_curvature_cap: f64,
    pub equilibrium_tension_cap: f64,
    pub equilibrium_entropy_cap: f64,
}

/// Trailing-window sizes and band edges for the secondary readings
pub struct ReadingSettings {
    // Samples used for the tension/curvature trend (mean of diffs)
    pub trend_window: usize,
    // Samples used for the reciprocal-variance confidence terms
    pub confidence_window: usize,
    // Conductor bands
    pub conductor_release_tension: f64,
    pub conductor_sustained_trend_band: f64,
    pub conductor_rest_tension: f64,
    pub conductor_rest_entropy: f64,
    // Singer bands
    pub singer_crackling_tension: f64,
    pub singer_crackling_curvature: f64,
    pub singer_dissonant_tension: f64,
    pub singer_dissonant_entropy: f64,
    pub singer_harmonious_curvature: f64,
    pub singer_harmonious_tension: f64,
    pub singer_harmonious_entropy: f64,
    pub singer_resonant_tension: f64,
    pub singer_resonant_entropy: f64,
}

/// Band edges for the three descriptive phrase banks
pub struct DescriptionBands {
    pub curvature_tight: f64,
    pub curvature_sharpening: f64,
    pub curvature_moderate: f64,
    // Samples of curvature history used to split sharpening vs loosening
    pub curvature_trend_window: usize,

    pub tension_extreme: f64,
    pub tension_critical: f64,
    pub tension_high: f64,
    pub tension_accumulating: f64,

    pub entropy_chaotic: f64,
    pub entropy_frothy: f64,
    pub entropy_elevated: f64,
    pub entropy_calm: f64,
}

/// Warning side-channel thresholds
pub struct WarningSettings {
    pub high_tension: f64,
    pub max_singularity_count: usize,
}

/// Attractor-pull analysis
pub struct AttractorPullSettings {
    // Below this percent distance the price is "converging" on the basin
    pub converging_pct: f64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub engine: EngineSettings,
    pub detection: DetectionSettings,
    pub phase: PhaseThresholds,
    pub reading: ReadingSettings,
    pub bands: DescriptionBands,
    pub warning: WarningSettings,
    pub pull: AttractorPullSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    engine: EngineSettings {
        curvature_smooth_window: 5,
        entropy_bins: 50,
        local_entropy_window: 20,
        tension_equilibrium_sigma: 20.0,
        ricci_flow_dt: 0.1,
        ricci_flow_smooth_sigma: 3.0,
    },

    detection: DetectionSettings {
        singularity_threshold: 2.0,
        singularity_min_separation: 10,
        attractor_bins: 50,
        attractor_prominence_factor: 0.5,
        attractor_min_separation: 3,
        max_attractors: 5,
        max_sensitivity: 10.0,
    },

    phase: PhaseThresholds {
        singularity_curvature: 2.0,
        singularity_tension: 1.5,
        smoothing_flow: 0.5,
        smoothing_tension: 0.5,
        impulse_curvature: 0.5,
        impulse_tension: 0.7,
        impulse_flow_cap: 0.3,
        compression_tension: 1.0,
        compression_curvature_cap: 0.5,
        equilibrium_curvature_cap: 0.3,
        equilibrium_tension_cap: 0.5,
        equilibrium_entropy_cap: 4.0,
    },

    reading: ReadingSettings {
        trend_window: 20,
        confidence_window: 10,
        conductor_release_tension: 1.0,
        conductor_sustained_trend_band: 0.1,
        conductor_rest_tension: 0.5,
        conductor_rest_entropy: 4.0,
        singer_crackling_tension: 1.5,
        singer_crackling_curvature: 2.0,
        singer_dissonant_tension: 1.0,
        singer_dissonant_entropy: 6.0,
        singer_harmonious_curvature: 0.5,
        singer_harmonious_tension: 0.7,
        singer_harmonious_entropy: 5.0,
        singer_resonant_tension: 0.5,
        singer_resonant_entropy: 4.0,
    },

    bands: DescriptionBands {
        curvature_tight: 1.5,
        curvature_sharpening: 0.8,
        curvature_moderate: 0.3,
        curvature_trend_window: 10,

        tension_extreme: 2.0,
        tension_critical: 1.5,
        tension_high: 1.0,
        tension_accumulating: 0.5,

        entropy_chaotic: 7.0,
        entropy_frothy: 6.0,
        entropy_elevated: 4.0,
        entropy_calm: 2.0,
    },

    warning: WarningSettings {
        high_tension: 1.5,
        max_singularity_count: 2,
    },

    pull: AttractorPullSettings { converging_pct: 1.0 },
};
