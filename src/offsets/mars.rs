use crate::constants::{
    DISTORTION_ORIGIN_LAT, DISTORTION_ORIGIN_LNG, KRASOVSKY_A, KRASOVSKY_EE, PI,
};

// ================================
// GCJ-02 distortion series
// ================================

/// Latitude distortion, in the published empirical form. `x` and `y` are the
/// offsets in degrees from the distortion origin.
pub(crate) fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Longitude distortion, in the published empirical form.
pub(crate) fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// The WGS-84 to GCJ-02 offset model. The distortion is scaled from metres
/// to degrees on the ellipsoid given by `a` and `ee`.
///
/// The model itself knows nothing about the mainland China region gate, that
/// is applied by the callers in [`crate::convert`].
pub(crate) struct MarsOffset {
    a: f64,
    ee: f64,
}

impl MarsOffset {
    pub const fn krasovsky() -> MarsOffset {
        Self {
            a: KRASOVSKY_A,
            ee: KRASOVSKY_EE,
        }
    }

    /// Offset `(d_lng, d_lat)` in degrees to add to a WGS-84 point.
    pub fn delta(&self, lng: f64, lat: f64) -> (f64, f64) {
        let x = lng - DISTORTION_ORIGIN_LNG;
        let y = lat - DISTORTION_ORIGIN_LAT;
        let d_lat = transform_lat(x, y);
        let d_lng = transform_lng(x, y);

        let rad_lat = lat / 180.0 * PI;
        let magic = 1.0 - self.ee * rad_lat.sin().powi(2);
        let sqrt_magic = magic.sqrt();

        // Meridional and prime vertical radii of curvature
        let d_lat = d_lat * 180.0 / ((self.a * (1.0 - self.ee)) / (magic * sqrt_magic) * PI);
        let d_lng = d_lng * 180.0 / (self.a / sqrt_magic * rad_lat.cos() * PI);

        (d_lng, d_lat)
    }

    pub fn from_wgs84(&self, lng: f64, lat: f64) -> (f64, f64) {
        let (d_lng, d_lat) = self.delta(lng, lat);

        (lng + d_lng, lat + d_lat)
    }

    /// First-order inverse: the offset is evaluated at the GCJ-02 point itself
    /// and subtracted once. Not iterated.
    pub fn to_wgs84(&self, lng: f64, lat: f64) -> (f64, f64) {
        let (mg_lng, mg_lat) = self.from_wgs84(lng, lat);

        (lng * 2.0 - mg_lng, lat * 2.0 - mg_lat)
    }
}
