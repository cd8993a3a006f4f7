//! Angle and unit-conversion constants.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// CAD host documents store lengths in centimeters; reports use millimeters.
pub const CM_TO_MM: f64 = 10.0;

pub const M_TO_MM: f64 = 1000.0;

/// Default tolerance for rotation round-trip comparisons.
pub const ROTATION_TOLERANCE: f64 = 1e-9;
