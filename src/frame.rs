use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use log::trace;

use crate::{convert, Error};

/// One of the three coordinate frames this crate converts between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Frame {
    /// World Geodetic System 1984, used by GPS
    Wgs84,
    /// GCJ-02, the China-offset frame used by Amap/Gaode
    Gcj02,
    /// BD-09, Baidu's frame on top of GCJ-02
    Bd09,
}

lazy_static! {
    static ref FRAME_ALIASES: HashMap<&'static str, Frame> = HashMap::from([
        ("wgs84", Frame::Wgs84),
        ("wgs-84", Frame::Wgs84),
        ("wgs", Frame::Wgs84),
        ("gps", Frame::Wgs84),
        ("epsg:4326", Frame::Wgs84),
        ("gcj02", Frame::Gcj02),
        ("gcj-02", Frame::Gcj02),
        ("gcj", Frame::Gcj02),
        ("mars", Frame::Gcj02),
        ("amap", Frame::Gcj02),
        ("gaode", Frame::Gcj02),
        ("bd09", Frame::Bd09),
        ("bd-09", Frame::Bd09),
        ("bd", Frame::Bd09),
        ("baidu", Frame::Bd09),
    ]);
}

impl Frame {
    pub const ALL: [Frame; 3] = [Frame::Wgs84, Frame::Gcj02, Frame::Bd09];

    /// Name of the map provider (or device) that uses the frame.
    pub fn label(self) -> &'static str {
        match self {
            Frame::Wgs84 => "GPS",
            Frame::Gcj02 => "Amap/Gaode",
            Frame::Bd09 => "Baidu",
        }
    }

    /// Whether the mainland China region gate is evaluated on points in this
    /// frame. BD-09 points are never tested directly, only the GCJ-02 point
    /// they pass through on the way to WGS-84.
    pub fn applies_region_gate(self) -> bool {
        matches!(self, Frame::Wgs84 | Frame::Gcj02)
    }

    /// Converts a lng/lat pair from this frame to `to`. Converting to the same
    /// frame returns the input unchanged.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::{convert, Frame};
    ///
    /// let (lng, lat) = (116.3912757, 39.906217);
    ///
    /// assert_eq!(Frame::Wgs84.convert(Frame::Bd09, lng, lat), convert::wgs84_to_bd09(lng, lat));
    /// assert_eq!(Frame::Gcj02.convert(Frame::Gcj02, lng, lat), (lng, lat));
    /// ```
    pub fn convert(self, to: Frame, lng: f64, lat: f64) -> (f64, f64) {
        trace!("Converting {lng},{lat} from {self} to {to}");

        match (self, to) {
            (Frame::Wgs84, Frame::Gcj02) => convert::wgs84_to_gcj02(lng, lat),
            (Frame::Wgs84, Frame::Bd09) => convert::wgs84_to_bd09(lng, lat),
            (Frame::Gcj02, Frame::Wgs84) => convert::gcj02_to_wgs84(lng, lat),
            (Frame::Gcj02, Frame::Bd09) => convert::gcj02_to_bd09(lng, lat),
            (Frame::Bd09, Frame::Wgs84) => convert::bd09_to_wgs84(lng, lat),
            (Frame::Bd09, Frame::Gcj02) => convert::bd09_to_gcj02(lng, lat),
            (Frame::Wgs84, Frame::Wgs84)
            | (Frame::Gcj02, Frame::Gcj02)
            | (Frame::Bd09, Frame::Bd09) => (lng, lat),
        }
    }
}

impl FromStr for Frame {
    type Err = Error;

    /// Parses a frame name, ignoring case and surrounding whitespace.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoshift::Frame;
    ///
    /// assert_eq!("WGS-84".parse::<Frame>().unwrap(), Frame::Wgs84);
    /// assert_eq!(" gaode ".parse::<Frame>().unwrap(), Frame::Gcj02);
    /// assert_eq!("Baidu".parse::<Frame>().unwrap(), Frame::Bd09);
    /// assert!("osgb36".parse::<Frame>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FRAME_ALIASES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::UnknownFrame(s.to_string()))
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Frame::Wgs84 => "WGS-84",
            Frame::Gcj02 => "GCJ-02",
            Frame::Bd09 => "BD-09",
        };
        write!(f, "{name}")
    }
}
