//! Raw conversions between WGS-84, GCJ-02 and BD-09 on `(longitude, latitude)`
//! pairs in decimal degrees.
//!
//! Every function here is total: any `f64` input produces an output, and
//! NaN or infinite inputs propagate through the arithmetic. Range checking is
//! left to the caller, or to the typed points ([`crate::Wgs84`],
//! [`crate::Gcj02`], [`crate::Bd09`]).

use log::trace;

use crate::{
    constants::{CHINA_MAX_LAT, CHINA_MAX_LNG, CHINA_MIN_LAT, CHINA_MIN_LNG},
    offsets::{baidu::BaiduOffset, mars::MarsOffset},
    ThisOrThat,
};

/// Returns whether a point lies outside the coarse bounding box used for
/// mainland China. The edges themselves count as inside.
///
/// The box is the one shared by every implementation of this algorithm. It is
/// not an outline of China, and is kept as-is so outputs stay compatible.
///
/// # Usage
///
/// ```
/// use geoshift::convert::is_outside_mainland_china;
///
/// // Beijing
/// assert!(!is_outside_mainland_china(116.3912757, 39.906217));
/// // New York
/// assert!(is_outside_mainland_china(-73.985278, 40.748333));
/// // Edges are inside
/// assert!(!is_outside_mainland_china(72.004, 30.0));
/// assert!(is_outside_mainland_china(72.0039, 30.0));
/// ```
pub fn is_outside_mainland_china(lng: f64, lat: f64) -> bool {
    lng < CHINA_MIN_LNG || lng > CHINA_MAX_LNG || lat < CHINA_MIN_LAT || lat > CHINA_MAX_LAT
}

/// Converts a WGS-84 point to GCJ-02. Points outside mainland China are
/// returned unchanged.
///
/// # Usage
///
/// ```
/// use geoshift::convert::wgs84_to_gcj02;
///
/// let (lng, lat) = wgs84_to_gcj02(116.3912757, 39.906217);
///
/// assert!((lng - 116.39751670534572).abs() < 1e-6);
/// assert!((lat - 39.907618208506655).abs() < 1e-6);
///
/// assert_eq!(wgs84_to_gcj02(-73.985278, 40.748333), (-73.985278, 40.748333));
/// ```
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    is_outside_mainland_china(lng, lat).ternary_lazy(
        || {
            trace!("{lng},{lat} outside mainland China, WGS-84 -> GCJ-02 is identity");
            (lng, lat)
        },
        || MarsOffset::krasovsky().from_wgs84(lng, lat),
    )
}

/// Converts a GCJ-02 point back to WGS-84. Points outside mainland China are
/// returned unchanged.
///
/// This is a first-order inverse of [`wgs84_to_gcj02`], so a round trip
/// drifts by up to a couple of metres. That matches every other consumer of
/// the published algorithm.
///
/// # Usage
///
/// ```
/// use geoshift::convert::{gcj02_to_wgs84, wgs84_to_gcj02};
///
/// let (lng, lat) = wgs84_to_gcj02(116.3912757, 39.906217);
/// let (lng, lat) = gcj02_to_wgs84(lng, lat);
///
/// assert!((lng - 116.3912757).abs() < 1e-5);
/// assert!((lat - 39.906217).abs() < 1e-5);
/// ```
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    is_outside_mainland_china(lng, lat).ternary_lazy(
        || {
            trace!("{lng},{lat} outside mainland China, GCJ-02 -> WGS-84 is identity");
            (lng, lat)
        },
        || MarsOffset::krasovsky().to_wgs84(lng, lat),
    )
}

/// Converts a GCJ-02 point to BD-09. Applied everywhere, regardless of region.
///
/// # Usage
///
/// ```
/// use geoshift::convert::gcj02_to_bd09;
///
/// let (lng, lat) = gcj02_to_bd09(116.39751670534572, 39.907618208506655);
///
/// assert!((lng - 116.40389064460345).abs() < 1e-6);
/// assert!((lat - 39.91396193389383).abs() < 1e-6);
/// ```
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    BaiduOffset::standard().from_gcj02(lng, lat)
}

/// Converts a BD-09 point to GCJ-02. Applied everywhere, regardless of region.
///
/// # Usage
///
/// ```
/// use geoshift::convert::{bd09_to_gcj02, gcj02_to_bd09};
///
/// let (lng, lat) = gcj02_to_bd09(116.39751670534572, 39.907618208506655);
/// let (lng, lat) = bd09_to_gcj02(lng, lat);
///
/// assert!((lng - 116.39751670534572).abs() < 1e-6);
/// assert!((lat - 39.907618208506655).abs() < 1e-6);
/// ```
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    BaiduOffset::standard().to_gcj02(lng, lat)
}

/// Converts a WGS-84 point to BD-09 by way of GCJ-02.
///
/// # Usage
///
/// ```
/// use geoshift::convert::wgs84_to_bd09;
///
/// let (lng, lat) = wgs84_to_bd09(116.3912757, 39.906217);
///
/// assert!((lng - 116.40389064460345).abs() < 1e-6);
/// assert!((lat - 39.91396193389383).abs() < 1e-6);
/// ```
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let (lng, lat) = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(lng, lat)
}

/// Converts a BD-09 point to WGS-84 by way of GCJ-02. The region gate is
/// applied to the intermediate GCJ-02 point.
///
/// # Usage
///
/// ```
/// use geoshift::convert::bd09_to_wgs84;
///
/// let (lng, lat) = bd09_to_wgs84(116.40389064460345, 39.91396193389383);
///
/// assert!((lng - 116.3912757).abs() < 1e-5);
/// assert!((lat - 39.906217).abs() < 1e-5);
/// ```
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    let (lng, lat) = bd09_to_gcj02(lng, lat);
    gcj02_to_wgs84(lng, lat)
}
