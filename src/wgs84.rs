use std::{fmt::Display, str::FromStr};

use crate::{
    bd09::Bd09,
    convert,
    gcj02::Gcj02,
    utility::{check_lnglat, fmt_lnglat, haversine, parse_lnglat},
    Error, ParseCoord,
};

/// Representation of a WGS-84 longitude/latitude point, the frame used by GPS
/// receivers and most of the world's maps. Can be converted to/from [`Gcj02`]
/// and [`Bd09`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wgs84 {
    #[cfg_attr(feature = "serde", serde(alias = "lng", alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl Wgs84 {
    /// Internal-only constructor that doesn't check the bounds of lng/lat
    pub(crate) fn new(lng: f64, lat: f64) -> Wgs84 {
        Self {
            longitude: lng,
            latitude: lat,
        }
    }

    /// Tries to create a WGS-84 point from a lng/lat pair. First checks if the
    /// values are valid:
    /// * Longitude must be in range [-180,180]
    /// * Latitude must be in range [-90,90]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either longitude or latitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::Wgs84;
    ///
    /// let coord = Wgs84::create(116.3912757, 39.906217);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.longitude(), 116.3912757);
    /// assert_eq!(coord.latitude(), 39.906217);
    ///
    /// let invalid_coord_lat = Wgs84::create(0.0, 100.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lng = Wgs84::create(-200.0, 0.0);
    /// assert!(invalid_coord_lng.is_err());
    /// ```
    pub fn create(lng: f64, lat: f64) -> Result<Wgs84, Error> {
        check_lnglat(lng, lat)?;
        Ok(Wgs84::new(lng, lat))
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns whether the point falls outside the mainland China region, in
    /// which case converting it to [`Gcj02`] leaves it unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use geoshift::Wgs84;
    ///
    /// let coord = Wgs84::create(116.3912757, 39.906217).unwrap();
    /// assert!(!coord.is_outside_mainland_china());
    ///
    /// let coord = Wgs84::create(-73.985278, 40.748333).unwrap();
    /// assert!(coord.is_outside_mainland_china());
    /// ```
    pub fn is_outside_mainland_china(&self) -> bool {
        convert::is_outside_mainland_china(self.longitude, self.latitude)
    }

    /// Returns the distance in meters between two [`Wgs84`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    pub fn haversine(&self, other: &Wgs84) -> f64 {
        haversine(self.longitude, self.latitude, other.longitude, other.latitude)
    }

    /// Converts from [`Wgs84`] to [`Gcj02`]
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::Wgs84;
    ///
    /// let coord = Wgs84::create(116.3912757, 39.906217).unwrap();
    /// let converted = coord.to_gcj02();
    ///
    /// assert!((converted.longitude() - 116.39751670534572).abs() < 1e-6);
    /// assert!((converted.latitude() - 39.907618208506655).abs() < 1e-6);
    ///
    /// // Converting back drifts by well under a meter here
    /// assert!(coord.haversine(&converted.to_wgs84()) < 1.0);
    /// ```
    pub fn to_gcj02(&self) -> Gcj02 {
        Gcj02::from_wgs84(self)
    }

    /// Converts from [`Wgs84`] to [`Bd09`]
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::Wgs84;
    ///
    /// let coord = Wgs84::create(116.3912757, 39.906217).unwrap();
    /// let converted = coord.to_bd09();
    ///
    /// assert!((converted.longitude() - 116.40389064460345).abs() < 1e-6);
    /// assert!((converted.latitude() - 39.91396193389383).abs() < 1e-6);
    /// ```
    pub fn to_bd09(&self) -> Bd09 {
        Bd09::from_wgs84(self)
    }

    /// Converts from [`Gcj02`] to [`Wgs84`]. Approximate, see
    /// [`convert::gcj02_to_wgs84`].
    pub fn from_gcj02(value: &Gcj02) -> Wgs84 {
        let (lng, lat) = convert::gcj02_to_wgs84(value.longitude, value.latitude);
        Wgs84::new(lng, lat)
    }

    /// Converts from [`Bd09`] to [`Wgs84`]. Approximate, see
    /// [`convert::bd09_to_wgs84`].
    pub fn from_bd09(value: &Bd09) -> Wgs84 {
        let (lng, lat) = convert::bd09_to_wgs84(value.longitude, value.latitude);
        Wgs84::new(lng, lat)
    }
}

impl From<(f64, f64)> for Wgs84 {
    /// Unchecked, `(lng, lat)` order
    fn from(value: (f64, f64)) -> Self {
        Wgs84::new(value.0, value.1)
    }
}

impl From<Wgs84> for (f64, f64) {
    fn from(value: Wgs84) -> Self {
        (value.longitude, value.latitude)
    }
}

impl From<Gcj02> for Wgs84 {
    fn from(value: Gcj02) -> Self {
        Wgs84::from_gcj02(&value)
    }
}

impl From<Bd09> for Wgs84 {
    fn from(value: Bd09) -> Self {
        Wgs84::from_bd09(&value)
    }
}

impl ParseCoord for Wgs84 {
    /// Parses `"lng,lat"`, `"lng, lat"` or `"lng lat"`.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::{ParseCoord, Wgs84};
    ///
    /// let coord = Wgs84::parse_coord("116.3912757, 39.906217").unwrap();
    /// assert_eq!(coord.longitude(), 116.3912757);
    ///
    /// assert!(Wgs84::parse_coord("116.3912757").is_err());
    /// // lat,lng order is caught by the range check
    /// assert!(Wgs84::parse_coord("39.906217,116.3912757").is_err());
    /// ```
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (lng, lat) = parse_lnglat(value)?;
        Wgs84::create(lng, lat)
    }
}

impl FromStr for Wgs84 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}

impl Display for Wgs84 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_lnglat(f, self.longitude, self.latitude)
    }
}
