//! Internal system of units.
//!
//! Engine-internal quantities arrive scaled so that MeV = 1 and mm = 1 (the
//! transport engine's convention). Output records are always expressed in MeV
//! and cm, so emission sites divide by [`MEV`] and [`CM`].

/// Mega-electronvolt, the internal energy unit.
pub const MEV: f64 = 1.0;
/// Kilo-electronvolt.
pub const KEV: f64 = 1e-3 * MEV;
/// Giga-electronvolt.
pub const GEV: f64 = 1e3 * MEV;

/// Millimeter, the internal length unit.
pub const MM: f64 = 1.0;
/// Centimeter.
pub const CM: f64 = 10.0 * MM;
/// Meter.
pub const M: f64 = 1000.0 * MM;
