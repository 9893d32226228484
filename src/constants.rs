pub(crate) use std::f64::consts::PI;

// Krasovsky 1940 semi-major axis a
pub(crate) const KRASOVSKY_A: f64 = 6_378_245.0;
// Krasovsky 1940 eccentricity squared
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
pub(crate) const KRASOVSKY_EE: f64 = 0.00669342162296594323;

// Angular scale used by the BD-09 polar distortion
pub(crate) const X_PI: f64 = PI * 3000.0 / 180.0;
// Fixed BD-09 shift from GCJ-02
pub(crate) const BD09_LNG_SHIFT: f64 = 0.0065;
pub(crate) const BD09_LAT_SHIFT: f64 = 0.006;

// Approximate centroid of China the distortion polynomials are centred on
pub(crate) const DISTORTION_ORIGIN_LNG: f64 = 105.0;
pub(crate) const DISTORTION_ORIGIN_LAT: f64 = 35.0;

// Bounding box of the mainland China region gate
pub(crate) const CHINA_MIN_LNG: f64 = 72.004;
pub(crate) const CHINA_MAX_LNG: f64 = 137.8347;
pub(crate) const CHINA_MIN_LAT: f64 = 0.8293;
pub(crate) const CHINA_MAX_LAT: f64 = 55.8271;
