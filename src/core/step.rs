use crate::core::track::Track;
use crate::error::{Error, Result};

/// Post-step classification reported by the transport engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step ended on a geometric region boundary.
    Boundary,
    /// Ordinary step end (physics-limited or free flight).
    Ordinary,
}

/// Kinematic snapshot at one end of a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPoint {
    pub kinetic_energy: f64,
    pub status: StepStatus,
}

impl StepPoint {
    /// Create a step point; the energy must be finite and non-negative.
    pub fn new(kinetic_energy: f64, status: StepStatus) -> Result<Self> {
        if !kinetic_energy.is_finite() || kinetic_energy < 0.0 {
            return Err(Error::InvalidParam(
                "step point kinetic energy must be finite and >= 0".into(),
            ));
        }
        Ok(Self {
            kinetic_energy,
            status,
        })
    }
}

/// One discrete propagation increment of a track.
///
/// Owned by the surrounding engine; the classifier reads everything and writes
/// only `track.status`.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub track: Track,
    pub pre: StepPoint,
    pub post: StepPoint,
}

impl Step {
    pub fn new(track: Track, pre: StepPoint, post: StepPoint) -> Self {
        Self { track, pre, post }
    }

    /// True when the post-step point sits on a geometry boundary.
    #[inline]
    pub fn at_boundary(&self) -> bool {
        self.post.status == StepStatus::Boundary
    }
}
