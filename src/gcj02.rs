use std::{fmt::Display, str::FromStr};

use crate::{
    bd09::Bd09,
    convert,
    utility::{check_lnglat, fmt_lnglat, haversine, parse_lnglat},
    wgs84::Wgs84,
    Error, ParseCoord,
};

/// Representation of a GCJ-02 ("Mars") longitude/latitude point, the offset
/// frame mandated for public maps of mainland China (Amap/Gaode, Tencent).
/// Can be converted to/from [`Wgs84`] and [`Bd09`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gcj02 {
    #[cfg_attr(feature = "serde", serde(alias = "lng", alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl Gcj02 {
    /// Internal-only constructor that doesn't check the bounds of lng/lat
    pub(crate) fn new(lng: f64, lat: f64) -> Gcj02 {
        Self {
            longitude: lng,
            latitude: lat,
        }
    }

    /// Tries to create a GCJ-02 point from a lng/lat pair, with the same range
    /// checks as [`Wgs84::create`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either longitude or latitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::Gcj02;
    ///
    /// assert!(Gcj02::create(116.39751670534572, 39.907618208506655).is_ok());
    /// assert!(Gcj02::create(116.39751670534572, f64::NAN).is_err());
    /// ```
    pub fn create(lng: f64, lat: f64) -> Result<Gcj02, Error> {
        check_lnglat(lng, lat)?;
        Ok(Gcj02::new(lng, lat))
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns whether the point falls outside the mainland China region, in
    /// which case converting it to [`Wgs84`] leaves it unchanged.
    pub fn is_outside_mainland_china(&self) -> bool {
        convert::is_outside_mainland_china(self.longitude, self.latitude)
    }

    /// Returns the distance in meters between two [`Gcj02`] points.
    pub fn haversine(&self, other: &Gcj02) -> f64 {
        haversine(self.longitude, self.latitude, other.longitude, other.latitude)
    }

    /// Converts from [`Gcj02`] to [`Wgs84`]
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::{Gcj02, Wgs84};
    ///
    /// let coord = Gcj02::create(116.39751670534572, 39.907618208506655).unwrap();
    /// let original = Wgs84::create(116.3912757, 39.906217).unwrap();
    ///
    /// let converted = coord.to_wgs84();
    ///
    /// // First-order inverse, accurate to about 1e-5 degrees
    /// assert!((converted.longitude() - original.longitude()).abs() < 1e-5);
    /// assert!((converted.latitude() - original.latitude()).abs() < 1e-5);
    /// ```
    pub fn to_wgs84(&self) -> Wgs84 {
        Wgs84::from_gcj02(self)
    }

    /// Converts from [`Gcj02`] to [`Bd09`]
    pub fn to_bd09(&self) -> Bd09 {
        Bd09::from_gcj02(self)
    }

    /// Converts from [`Wgs84`] to [`Gcj02`]
    pub fn from_wgs84(value: &Wgs84) -> Gcj02 {
        let (lng, lat) = convert::wgs84_to_gcj02(value.longitude, value.latitude);
        Gcj02::new(lng, lat)
    }

    /// Converts from [`Bd09`] to [`Gcj02`]
    pub fn from_bd09(value: &Bd09) -> Gcj02 {
        let (lng, lat) = convert::bd09_to_gcj02(value.longitude, value.latitude);
        Gcj02::new(lng, lat)
    }
}

impl From<(f64, f64)> for Gcj02 {
    /// Unchecked, `(lng, lat)` order
    fn from(value: (f64, f64)) -> Self {
        Gcj02::new(value.0, value.1)
    }
}

impl From<Gcj02> for (f64, f64) {
    fn from(value: Gcj02) -> Self {
        (value.longitude, value.latitude)
    }
}

impl From<Wgs84> for Gcj02 {
    fn from(value: Wgs84) -> Self {
        Gcj02::from_wgs84(&value)
    }
}

impl From<Bd09> for Gcj02 {
    fn from(value: Bd09) -> Self {
        Gcj02::from_bd09(&value)
    }
}

impl ParseCoord for Gcj02 {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (lng, lat) = parse_lnglat(value)?;
        Gcj02::create(lng, lat)
    }
}

impl FromStr for Gcj02 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}

impl Display for Gcj02 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_lnglat(f, self.longitude, self.latitude)
    }
}
