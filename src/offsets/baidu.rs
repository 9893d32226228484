use crate::constants::{BD09_LAT_SHIFT, BD09_LNG_SHIFT, X_PI};

/// The GCJ-02 to BD-09 offset: a fixed shift plus a small polar distortion
/// of radius and angle. Defined everywhere, no region gate applies.
pub(crate) struct BaiduOffset {
    lng_shift: f64,
    lat_shift: f64,
    x_pi: f64,
}

impl BaiduOffset {
    pub const fn standard() -> BaiduOffset {
        Self {
            lng_shift: BD09_LNG_SHIFT,
            lat_shift: BD09_LAT_SHIFT,
            x_pi: X_PI,
        }
    }

    pub fn from_gcj02(&self, lng: f64, lat: f64) -> (f64, f64) {
        let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * self.x_pi).sin();
        let theta = lat.atan2(lng) + 0.000_003 * (lng * self.x_pi).cos();

        (
            z * theta.cos() + self.lng_shift,
            z * theta.sin() + self.lat_shift,
        )
    }

    pub fn to_gcj02(&self, lng: f64, lat: f64) -> (f64, f64) {
        let x = lng - self.lng_shift;
        let y = lat - self.lat_shift;
        let z = (x * x + y * y).sqrt() - 0.00002 * (y * self.x_pi).sin();
        let theta = y.atan2(x) - 0.000_003 * (x * self.x_pi).cos();

        (z * theta.cos(), z * theta.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_shift() {
        let (lng, lat) = BaiduOffset::standard().from_gcj02(0.0, 0.0);

        assert!((lng - 0.0065).abs() < 1e-12);
        assert!((lat - 0.006).abs() < 1e-12);
    }

    #[test]
    fn test_shift_maps_back_to_origin() {
        let (lng, lat) = BaiduOffset::standard().to_gcj02(0.0065, 0.006);

        assert!(lng.abs() < 1e-12);
        assert!(lat.abs() < 1e-12);
    }

    #[test]
    fn test_origin_is_not_a_fixed_point() {
        let (lng, lat) = BaiduOffset::standard().to_gcj02(0.0, 0.0);

        assert!((lng + 0.0065).abs() < 1e-4);
        assert!((lat + 0.006).abs() < 1e-4);
    }
}
