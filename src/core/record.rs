use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// One boundary-to-boundary interval of the primary track (stream 0).
///
/// All quantities are in MeV / cm. `loss_rate` is NaN when the interval has
/// zero length (see the crate's degenerate-interval policy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRecord {
    /// Primary kinetic energy at this crossing.
    pub energy: f64,
    /// Energy change since the previous crossing.
    pub delta_energy: f64,
    /// Cumulative path length at this crossing.
    pub length: f64,
    /// Path length covered since the previous crossing.
    pub delta_length: f64,
    /// dE/dx over the interval.
    pub loss_rate: f64,
}

/// One detected photon-class secondary (stream 1).
#[derive(Debug, Clone, PartialEq)]
pub struct PhotonRecord {
    /// Primary kinetic energy at the moment of detection, MeV.
    pub primary_energy: f64,
    /// Primary path length at the moment of detection, cm.
    pub primary_length: f64,
    /// Emission polar angle against the x axis, radians.
    pub angle: f64,
    /// Photon total energy, MeV.
    pub energy: f64,
    /// Hash of the creation-process name.
    pub process_hash: u64,
    /// Creation-process name.
    pub process: String,
}

/// 64-bit hash of a creation-process name.
///
/// Stable for equal strings within a run; not guaranteed stable across
/// toolchain versions.
pub fn process_hash(name: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    hasher.finish()
}

/// Append-only capability handed to the classifier.
///
/// Keeping this a trait (rather than a concrete singleton handle) lets tests
/// substitute doubles and lets each event worker own a private buffer.
pub trait RecordSink {
    fn append_boundary(&mut self, record: BoundaryRecord);
    fn append_photon(&mut self, record: PhotonRecord);
}

/// In-memory sink: two append-only record streams.
///
/// One buffer per event worker; a run-level buffer absorbs worker buffers at
/// event or run boundaries, preserving each worker's internal ordering.
#[derive(Debug, Clone, Default)]
pub struct RecordBuffer {
    boundary: Vec<BoundaryRecord>,
    photon: Vec<PhotonRecord>,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boundary-crossing records in append order.
    pub fn boundary(&self) -> &[BoundaryRecord] {
        &self.boundary
    }

    /// Photon-emission records in append order.
    pub fn photon(&self) -> &[PhotonRecord] {
        &self.photon
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty() && self.photon.is_empty()
    }

    /// Move every record out of `other`, appending after this buffer's
    /// records. `other` is left empty; its internal ordering is preserved.
    pub fn absorb(&mut self, other: &mut RecordBuffer) {
        self.boundary.append(&mut other.boundary);
        self.photon.append(&mut other.photon);
    }

    pub fn clear(&mut self) {
        self.boundary.clear();
        self.photon.clear();
    }
}

impl RecordSink for RecordBuffer {
    fn append_boundary(&mut self, record: BoundaryRecord) {
        self.boundary.push(record);
    }

    fn append_photon(&mut self, record: PhotonRecord) {
        self.photon.push(record);
    }
}
