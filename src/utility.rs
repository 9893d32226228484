use crate::Error;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
}

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Distance in meters between two lng/lat points using the
/// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
pub(crate) fn haversine(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    let lat1_r = lat1.to_radians();
    let lat2_r = lat2.to_radians();

    2.0 * EARTH_MEAN_RADIUS_M * (
        ((lat2 - lat1).to_radians() / 2.0).sin().powi(2) +
        lat1_r.cos() * lat2_r.cos() *
        ((lng2 - lng1).to_radians() / 2.0).sin().powi(2)
    ).sqrt().asin()
}

/// Checks that a lng/lat pair is finite and within `[-180, 180]` x `[-90, 90]`.
pub(crate) fn check_lnglat(lng: f64, lat: f64) -> Result<(), Error> {
    let hd = f64::from(dms::HD);
    let qd = f64::from(dms::QD);

    if !(-qd..=qd).contains(&lat) {
        Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
    } else if !(-hd..=hd).contains(&lng) {
        Err(Error::InvalidCoord(format!("Longitude {lng} outside of valid range [-180, 180].")))
    } else {
        Ok(())
    }
}

/// Splits `"lng,lat"`, `"lng, lat"` or `"lng lat"` into its two numbers.
/// Does not range check.
pub(crate) fn parse_lnglat(value: &str) -> Result<(f64, f64), Error> {
    let value = value.trim();
    let pieces = if value.contains(',') {
        value.split(',').map(str::trim).collect::<Vec<_>>()
    } else {
        value.split_whitespace().collect::<Vec<_>>()
    };

    let [lng, lat] = *pieces.as_slice() else {
        return Err(Error::InvalidCoord(format!("Expected \"lng,lat\", got {value:?}")));
    };

    let parse = |piece: &str| piece
        .parse::<f64>()
        .map_err(|_| Error::InvalidCoord(format!("{piece:?} is not a number")));

    Ok((parse(lng)?, parse(lat)?))
}

/// Formats a lng/lat pair as `"lng,lat"` with shortest round-trip floats.
pub(crate) fn fmt_lnglat(f: &mut std::fmt::Formatter<'_>, lng: f64, lat: f64) -> std::fmt::Result {
    let mut buf = ryu::Buffer::new();
    let lng = buf.format(lng);
    let mut buf = ryu::Buffer::new();
    let lat = buf.format(lat);
    write!(f, "{lng},{lat}")
}
