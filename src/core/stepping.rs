use crate::core::record::{process_hash, BoundaryRecord, PhotonRecord, RecordSink};
use crate::core::step::Step;
use crate::core::track::{Species, TrackStatus};
use crate::core::units;
use crate::error::{Error, Result};

/// Per-step classifier and boundary-interval aggregator.
///
/// Holds the per-event state that accumulates the primary track's kinematics
/// between boundary crossings:
/// - `prev_energy` / `prev_len`: latest primary kinetic energy (MeV) and path
///   length (cm), refreshed on every primary step
/// - `prev_boundary_energy` / `prev_boundary_len`: the same pair captured at
///   the last recorded crossing
/// - `first_boundary`: set until the first crossing of the event, which never
///   emits (there is no prior boundary to delta against)
///
/// The boundary snapshot is only advanced after the pending interval record
/// has been emitted from its prior values, so every record spans exactly one
/// full boundary-to-boundary interval.
///
/// One instance per event worker; steps of one event must arrive in stepping
/// order.
#[derive(Debug, Clone)]
pub struct StepClassifier {
    prev_energy: f64,
    prev_len: f64,
    prev_boundary_energy: f64,
    prev_boundary_len: f64,
    first_boundary: bool,
}

impl Default for StepClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl StepClassifier {
    pub fn new() -> Self {
        Self {
            prev_energy: 0.0,
            prev_len: 0.0,
            prev_boundary_energy: 0.0,
            prev_boundary_len: 0.0,
            first_boundary: true,
        }
    }

    /// Event-lifecycle hook: reset all aggregator state for a new event.
    pub fn begin_event(&mut self) {
        *self = Self::new();
    }

    /// Latest primary kinetic energy observed this event, MeV.
    #[inline]
    pub fn primary_energy(&self) -> f64 {
        self.prev_energy
    }

    /// Latest primary path length observed this event, cm.
    #[inline]
    pub fn primary_length(&self) -> f64 {
        self.prev_len
    }

    /// Classify one step, updating aggregator state and appending to `sink`.
    ///
    /// May set `step.track.status` to request termination; everything else on
    /// the step is read-only. The only error is a photon-class track with no
    /// recorded creation process, which surfaces as
    /// [`Error::MissingProvenance`] instead of a corrupt record.
    pub fn process<S: RecordSink>(&mut self, step: &mut Step, sink: &mut S) -> Result<()> {
        // Snapshot first: a boundary-crossing step must be recorded with its
        // own endpoint values.
        if step.track.is_primary() {
            self.prev_energy = step.track.kinetic_energy / units::MEV;
            self.prev_len = step.track.length / units::CM;
        }

        if step.track.is_primary() && step.at_boundary() {
            if self.first_boundary {
                self.first_boundary = false;
            } else {
                let delta_energy = self.prev_energy - self.prev_boundary_energy;
                let delta_length = self.prev_len - self.prev_boundary_len;
                sink.append_boundary(BoundaryRecord {
                    energy: self.prev_energy,
                    delta_energy,
                    length: self.prev_len,
                    delta_length,
                    loss_rate: loss_rate(delta_energy, delta_length),
                });
            }
            self.prev_boundary_energy = self.prev_energy;
            self.prev_boundary_len = self.prev_len;
            return Ok(());
        }

        match step.track.species {
            Species::Photon => {
                let process = step
                    .track
                    .creator_process
                    .clone()
                    .ok_or(Error::MissingProvenance {
                        track: step.track.id,
                    })?;
                sink.append_photon(PhotonRecord {
                    primary_energy: self.prev_energy,
                    primary_length: self.prev_len,
                    angle: step.track.emission_angle(),
                    energy: step.track.total_energy / units::MEV,
                    process_hash: process_hash(&process),
                    process,
                });
                step.track.status = TrackStatus::KillWithSecondaries;
            }
            Species::Neutrino { .. } => {
                step.track.status = TrackStatus::KillWithSecondaries;
            }
            Species::Other(pdg) => {
                if !step.track.is_primary() {
                    log::trace!(
                        "pass-through: pdg={} parent={} ke={} len={}",
                        pdg,
                        step.track.parent_id,
                        step.track.kinetic_energy,
                        step.track.length
                    );
                }
            }
        }
        Ok(())
    }
}

/// Energy-loss rate over one boundary interval.
///
/// A zero-length interval has no defined rate; the record carries NaN there so
/// the degenerate case stays visible downstream instead of the interval being
/// dropped.
#[inline]
fn loss_rate(delta_energy: f64, delta_length: f64) -> f64 {
    if delta_length == 0.0 {
        f64::NAN
    } else {
        delta_energy / delta_length
    }
}
