use crate::error::{Error, Result};

/// Neutrino flavor covered by the suppression denylist.
///
/// `TauPrime` is the fourth-generation neutrino (PDG 18) that heavy-lepton
/// aware physics lists can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeutrinoFlavor {
    Electron,
    Muon,
    Tau,
    TauPrime,
}

impl NeutrinoFlavor {
    /// PDG code of the particle (not antiparticle) state.
    #[inline]
    pub fn pdg(self) -> i32 {
        match self {
            NeutrinoFlavor::Electron => 12,
            NeutrinoFlavor::Muon => 14,
            NeutrinoFlavor::Tau => 16,
            NeutrinoFlavor::TauPrime => 18,
        }
    }

    fn from_abs_pdg(code: i32) -> Option<Self> {
        match code {
            12 => Some(NeutrinoFlavor::Electron),
            14 => Some(NeutrinoFlavor::Muon),
            16 => Some(NeutrinoFlavor::Tau),
            18 => Some(NeutrinoFlavor::TauPrime),
            _ => None,
        }
    }
}

/// Particle species, resolved once at track construction.
///
/// The engine's category tag takes precedence over the PDG code: anything
/// tagged "photon" classifies as [`Species::Photon`] no matter which code it
/// carries. Everything that is neither photon-class nor a neutrino falls into
/// [`Species::Other`] with its raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Photon,
    Neutrino { flavor: NeutrinoFlavor, anti: bool },
    Other(i32),
}

impl Species {
    /// Resolve a species from the engine-provided PDG code and category tag.
    pub fn resolve(pdg: i32, category: &str) -> Self {
        if category == "photon" {
            return Species::Photon;
        }
        match NeutrinoFlavor::from_abs_pdg(pdg.abs()) {
            Some(flavor) => Species::Neutrino {
                flavor,
                anti: pdg < 0,
            },
            None => Species::Other(pdg),
        }
    }
}

/// Track termination status.
///
/// The classifier only ever requests [`TrackStatus::KillWithSecondaries`];
/// [`TrackStatus::Kill`] mirrors the engine-side single-track termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackStatus {
    #[default]
    Alive,
    Kill,
    KillWithSecondaries,
}

/// One simulated particle trajectory as seen at the current step.
///
/// Fields:
/// - `id`: stable track identifier
/// - `parent_id`: parent track id, 0 for the primary
/// - `pdg`: PDG species code
/// - `species`: closed species tag resolved at construction
/// - `kinetic_energy`, `total_energy`: current energies, internal units
/// - `length`: cumulative path length, internal units
/// - `direction`: momentum direction (finite, non-zero)
/// - `creator_process`: creation-process name; `None` for primaries
/// - `status`: termination status, the one field this crate may set
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: u32,
    pub parent_id: u32,
    pub pdg: i32,
    pub species: Species,
    pub kinetic_energy: f64,
    pub total_energy: f64,
    pub length: f64,
    pub direction: [f64; 3],
    pub creator_process: Option<String>,
    pub status: TrackStatus,
}

impl Track {
    /// Create a track after validating its kinematics.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if an energy or the length is non-finite or
    ///   negative, or the direction is non-finite or has zero magnitude.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        parent_id: u32,
        pdg: i32,
        category: &str,
        kinetic_energy: f64,
        total_energy: f64,
        length: f64,
        direction: [f64; 3],
        creator_process: Option<String>,
    ) -> Result<Self> {
        if !kinetic_energy.is_finite() || kinetic_energy < 0.0 {
            return Err(Error::InvalidParam(
                "kinetic energy must be finite and >= 0".into(),
            ));
        }
        if !total_energy.is_finite() || total_energy < 0.0 {
            return Err(Error::InvalidParam(
                "total energy must be finite and >= 0".into(),
            ));
        }
        if !length.is_finite() || length < 0.0 {
            return Err(Error::InvalidParam(
                "track length must be finite and >= 0".into(),
            ));
        }
        if !direction.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidParam("direction must be finite".into()));
        }
        if direction.iter().map(|c| c * c).sum::<f64>() == 0.0 {
            return Err(Error::InvalidParam(
                "direction must have non-zero magnitude".into(),
            ));
        }
        Ok(Self {
            id,
            parent_id,
            pdg,
            species: Species::resolve(pdg, category),
            kinetic_energy,
            total_energy,
            length,
            direction,
            creator_process,
            status: TrackStatus::Alive,
        })
    }

    /// True for the primary track (no parent).
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.parent_id == 0
    }

    /// Polar angle of the momentum direction against the x axis, in radians.
    ///
    /// Divides by the direction magnitude, so the caller need not pass an
    /// exactly unit vector. The magnitude is non-zero by construction.
    pub fn emission_angle(&self) -> f64 {
        let mag = self.direction.iter().map(|c| c * c).sum::<f64>().sqrt();
        (self.direction[0] / mag).clamp(-1.0, 1.0).acos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn photon_category_wins_over_pdg() {
        // An optical-photon style tag must classify as photon even with a
        // neutrino code on it.
        assert_eq!(Species::resolve(12, "photon"), Species::Photon);
        assert_eq!(Species::resolve(22, "photon"), Species::Photon);
    }

    #[test]
    fn neutrino_codes_resolve_with_sign() {
        assert_eq!(
            Species::resolve(12, "lepton"),
            Species::Neutrino {
                flavor: NeutrinoFlavor::Electron,
                anti: false
            }
        );
        assert_eq!(
            Species::resolve(-14, "lepton"),
            Species::Neutrino {
                flavor: NeutrinoFlavor::Muon,
                anti: true
            }
        );
        assert_eq!(
            Species::resolve(18, "lepton"),
            Species::Neutrino {
                flavor: NeutrinoFlavor::TauPrime,
                anti: false
            }
        );
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(Species::resolve(2212, "baryon"), Species::Other(2212));
        assert_eq!(Species::resolve(11, "lepton"), Species::Other(11));
        assert_eq!(Species::resolve(-13, ""), Species::Other(-13));
    }

    #[test]
    fn flavor_pdg_roundtrip() {
        for flavor in [
            NeutrinoFlavor::Electron,
            NeutrinoFlavor::Muon,
            NeutrinoFlavor::Tau,
            NeutrinoFlavor::TauPrime,
        ] {
            assert_eq!(NeutrinoFlavor::from_abs_pdg(flavor.pdg()), Some(flavor));
        }
    }

    #[test]
    fn new_track_ok() -> Result<()> {
        let t = Track::new(
            3,
            1,
            22,
            "photon",
            0.5,
            0.5,
            12.0,
            [0.0, 1.0, 0.0],
            Some("compt".to_string()),
        )?;
        assert_eq!(t.species, Species::Photon);
        assert_eq!(t.status, TrackStatus::Alive);
        assert!(!t.is_primary());
        Ok(())
    }

    #[test]
    fn primary_has_zero_parent() -> Result<()> {
        let t = Track::new(1, 0, 11, "lepton", 100.0, 100.5, 0.0, [0.0, 0.0, 1.0], None)?;
        assert!(t.is_primary());
        Ok(())
    }

    #[test]
    fn invalid_kinematics_rejected() {
        let bad = Track::new(
            1,
            0,
            11,
            "lepton",
            f64::NAN,
            1.0,
            0.0,
            [0.0, 0.0, 1.0],
            None,
        );
        assert!(bad.unwrap_err().to_string().contains("kinetic energy"));

        let bad = Track::new(1, 0, 11, "lepton", 1.0, 1.0, -2.0, [0.0, 0.0, 1.0], None);
        assert!(bad.unwrap_err().to_string().contains("length"));

        let bad = Track::new(1, 0, 11, "lepton", 1.0, 1.0, 0.0, [0.0, 0.0, 0.0], None);
        assert!(bad.unwrap_err().to_string().contains("magnitude"));
    }

    #[test]
    fn emission_angle_along_axes() -> Result<()> {
        let along_x = Track::new(2, 1, 22, "photon", 0.5, 0.5, 0.0, [1.0, 0.0, 0.0], None)?;
        assert!(along_x.emission_angle().abs() < 1e-12);

        let along_y = Track::new(2, 1, 22, "photon", 0.5, 0.5, 0.0, [0.0, 1.0, 0.0], None)?;
        assert!((along_y.emission_angle() - FRAC_PI_2).abs() < 1e-12);

        let backward = Track::new(2, 1, 22, "photon", 0.5, 0.5, 0.0, [-1.0, 0.0, 0.0], None)?;
        assert!((backward.emission_angle() - PI).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn emission_angle_handles_unnormalized_direction() -> Result<()> {
        // Same direction, different magnitude: identical angle.
        let unit = Track::new(2, 1, 22, "photon", 0.5, 0.5, 0.0, [0.6, 0.8, 0.0], None)?;
        let scaled = Track::new(2, 1, 22, "photon", 0.5, 0.5, 0.0, [6.0, 8.0, 0.0], None)?;
        assert!((unit.emission_angle() - scaled.emission_angle()).abs() < 1e-12);
        Ok(())
    }
}
