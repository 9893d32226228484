//! Conversions between the WGS-84, GCJ-02 ("Mars") and BD-09 (Baidu)
//! coordinate frames.
//!
//! GCJ-02 is the deliberately offset frame required for public maps of
//! mainland China, and BD-09 is Baidu's further offset on top of it. Both
//! follow the widely published formulas, so results match the other
//! implementations of the same algorithm.
//!
//! ```
//! use geoshift::{convert, Wgs84};
//!
//! // Raw lng/lat pairs
//! let (lng, _lat) = convert::wgs84_to_gcj02(116.3912757, 39.906217);
//! assert!((lng - 116.39751670534572).abs() < 1e-6);
//!
//! // Typed points
//! let coord = Wgs84::create(116.3912757, 39.906217).unwrap();
//! assert!(coord.to_bd09().to_string().starts_with("116.4038906446"));
//! ```
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod bd09;
pub mod convert;
pub mod frame;
pub mod gcj02;
pub mod wgs84;

pub use bd09::Bd09;
pub use frame::Frame;
pub use gcj02::Gcj02;
pub use wgs84::Wgs84;

pub(crate) mod offsets {
    pub mod baidu;
    pub mod mars;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Unknown coordinate frame: {0}")]
    UnknownFrame(String),
}

pub trait ParseCoord {
    /// Parses a point from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if the string is malformed or the
    /// point is out of range.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any point type from a string.
///
/// # Errors
///
/// See [`ParseCoord::parse_coord`].
///
/// # Usage
///
/// ```
/// use geoshift::Gcj02;
///
/// let coord: Gcj02 = geoshift::from_str("121.4737 31.2304").unwrap();
/// assert_eq!(coord.latitude(), 31.2304);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary_lazy<F, E, T>(&self, r#true: F, r#false: E) -> T
    where
        F: Fn() -> T,
        E: Fn() -> T;
}

impl ThisOrThat for bool {
    fn ternary_lazy<F, E, T>(&self, r#true: F, r#false: E) -> T
    where
        F: Fn() -> T,
        E: Fn() -> T,
    {
        if *self { r#true() } else { r#false() }
    }
}
