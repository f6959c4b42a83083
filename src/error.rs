use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the classification core.
///
/// A failed step must surface as a hard error for its event; silently dropped
/// records corrupt the aggregate dataset for the whole run.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter (non-finite kinematics, bad shapes).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A track reached the photon branch with no recorded creation process.
    /// The upstream engine guarantees provenance for every secondary, so this
    /// is an invariant violation, not a recoverable condition.
    #[error("track {track} has no creation process recorded")]
    MissingProvenance { track: u32 },
}
