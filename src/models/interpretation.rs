use serde::{Deserialize, Serialize};
use std::fmt;

/// Current phase of the manifold's evolution, diagnosed by the ordered
/// rule cascade in the interpreter (first matching rule wins).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifoldPhase {
    /// Curvature tightening under building tension
    ImpulseLegSharpening,
    /// Peak tension before collapse
    SingularityForming,
    /// Correction redistributing tension across the surface
    RicciFlowSmoothing,
    /// Settling into a gravitational basin
    AttractorConvergence,
    /// Low tension, low entropy
    StableEquilibrium,
    /// Tension accumulating without high curvature
    CompressionBuilding,
}

impl fmt::Display for ManifoldPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ManifoldPhase::ImpulseLegSharpening => "impulse leg sharpening",
            ManifoldPhase::SingularityForming => "singularity forming",
            ManifoldPhase::RicciFlowSmoothing => "ricci flow smoothing",
            ManifoldPhase::AttractorConvergence => "attractor convergence",
            ManifoldPhase::StableEquilibrium => "stable equilibrium",
            ManifoldPhase::CompressionBuilding => "compression building",
        };
        write!(f, "{}", name)
    }
}

/// Macro flow reading - the whole composition at once
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConductorReading {
    /// Building toward climax
    Crescendo,
    /// Releasing from climax
    Decrescendo,
    /// Holding at intensity
    SustainedTension,
    /// Calm between movements
    RestPhase,
    /// Moving between states
    Transitional,
}

impl fmt::Display for ConductorReading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ConductorReading::Crescendo => "crescendo",
            ConductorReading::Decrescendo => "decrescendo",
            ConductorReading::SustainedTension => "sustained tension",
            ConductorReading::RestPhase => "rest phase",
            ConductorReading::Transitional => "transitional",
        };
        write!(f, "{}", name)
    }
}

/// Micro flow reading - internal geometry of the current phrase
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingerReading {
    /// Note holds naturally
    ResonantStable,
    /// About to break
    TensionCrackling,
    /// Smooth movement
    HarmoniousFlow,
    /// Forced, unsustainable
    DissonantStrain,
}

impl fmt::Display for SingerReading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SingerReading::ResonantStable => "resonant and stable",
            SingerReading::TensionCrackling => "crackling with tension",
            SingerReading::HarmoniousFlow => "in harmonious flow",
            SingerReading::DissonantStrain => "under dissonant strain",
        };
        write!(f, "{}", name)
    }
}

/// Nearest attractor to the current price, with a banded description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractorReference {
    pub price: f64,
    pub description: String,
}

/// Complete interpretation of one metrics snapshot.
///
/// Produced once per `interpret` call, never mutated, no lifecycle beyond
/// the call. Carries copies of the instantaneous scalars it was read from
/// so downstream consumers need not hold the full snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifoldInterpretation {
    // Phase diagnosis
    pub current_phase: ManifoldPhase,
    /// Always in (0, 1]; drops as recent curvature/tension get noisier
    pub phase_confidence: f64,

    // Dual perspective readings
    pub conductor_reading: ConductorReading,
    pub singer_reading: SingerReading,

    // Banded geometric descriptions
    pub curvature_state: String,
    pub tension_description: String,
    pub entropy_state: String,

    // Wave context
    pub wave_position: Option<String>,

    // Attractor-pull analysis
    pub nearest_attractor: Option<AttractorReference>,
    pub attractor_pull_strength: f64,

    // Human-readable synthesis
    pub market_narrative: String,
    pub tension_warning: Option<String>,

    // Instantaneous scalars the diagnosis was read from
    pub curvature_value: f64,
    pub entropy_value: f64,
    pub tension_value: f64,
}
