use std::{fmt::Display, str::FromStr};

use crate::{
    convert,
    gcj02::Gcj02,
    utility::{check_lnglat, fmt_lnglat, haversine, parse_lnglat},
    wgs84::Wgs84,
    Error, ParseCoord,
};

/// Representation of a BD-09 longitude/latitude point, Baidu Maps' frame. It
/// is a further offset on top of [`Gcj02`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bd09 {
    #[cfg_attr(feature = "serde", serde(alias = "lng", alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl Bd09 {
    pub(crate) fn new(lng: f64, lat: f64) -> Bd09 {
        Self {
            longitude: lng,
            latitude: lat,
        }
    }

    /// Tries to create a BD-09 point from a lng/lat pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either longitude or latitude are invalid.
    pub fn create(lng: f64, lat: f64) -> Result<Bd09, Error> {
        check_lnglat(lng, lat)?;
        Ok(Bd09::new(lng, lat))
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the distance in meters between two [`Bd09`] points.
    pub fn haversine(&self, other: &Bd09) -> f64 {
        haversine(self.longitude, self.latitude, other.longitude, other.latitude)
    }

    pub fn to_wgs84(&self) -> Wgs84 {
        Wgs84::from_bd09(self)
    }

    /// Converts from [`Bd09`] to [`Gcj02`]
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::{Bd09, Gcj02};
    ///
    /// let coord = Gcj02::create(116.39751670534572, 39.907618208506655).unwrap();
    /// let converted = coord.to_bd09().to_gcj02();
    ///
    /// assert!(coord.haversine(&converted) < 0.1);
    /// ```
    pub fn to_gcj02(&self) -> Gcj02 {
        Gcj02::from_bd09(self)
    }

    pub fn from_wgs84(value: &Wgs84) -> Bd09 {
        let (lng, lat) = convert::wgs84_to_bd09(value.longitude, value.latitude);
        Bd09::new(lng, lat)
    }

    pub fn from_gcj02(value: &Gcj02) -> Bd09 {
        let (lng, lat) = convert::gcj02_to_bd09(value.longitude, value.latitude);
        Bd09::new(lng, lat)
    }
}

impl From<(f64, f64)> for Bd09 {
    /// Unchecked, `(lng, lat)` order
    fn from(value: (f64, f64)) -> Self {
        Bd09::new(value.0, value.1)
    }
}

impl From<Bd09> for (f64, f64) {
    fn from(value: Bd09) -> Self {
        (value.longitude, value.latitude)
    }
}

impl From<Wgs84> for Bd09 {
    fn from(value: Wgs84) -> Self {
        Bd09::from_wgs84(&value)
    }
}

impl From<Gcj02> for Bd09 {
    fn from(value: Gcj02) -> Self {
        Bd09::from_gcj02(&value)
    }
}

impl ParseCoord for Bd09 {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (lng, lat) = parse_lnglat(value)?;
        Bd09::create(lng, lat)
    }
}

impl FromStr for Bd09 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}

impl Display for Bd09 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_lnglat(f, self.longitude, self.latitude)
    }
}
