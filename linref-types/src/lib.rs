#![warn(missing_debug_implementations)]
//! The `linref-types` library defines the measured geometry types consumed by the
//! [`linref`](https://crates.io/crates/linref) linear-referencing algorithms.
//!
//! In most cases, you will only need to use this crate if you're a crate author and want
//! compatibility with the `linref` algorithms. Otherwise, the `linref` crate re-exports
//! these types and additionally provides the locate/clip operations.
//!
//! ## Geometries
//!
//! - **[`Point`]**: A single, possibly empty, [`Coord`]
//! - **[`MultiPoint`]**: A collection of [`Point`]s
//! - **[`LineString`]**: A series of contiguous line segments represented by a [`CoordSeq`]
//! - **[`MultiLineString`]**: A collection of [`LineString`]s
//! - **[`GeometryCollection`]**: A collection of [`Geometry`]s
//! - **[`Geometry`]**: An enumeration of all geometry types, excluding [`Coord`]
//!
//! ## Coordinates
//!
//! - **[`Coord`]**: a four-ordinate coordinate `(x, y, z, m)`. Every coordinate stores all
//!   four scalars; which of `z` and `m` carry meaning is described by the [`Dimensions`]
//!   descriptor of the containing sequence or geometry, never by sentinel values.
//! - **[`CoordSeq`]**: an ordered sequence of [`Coord`]s sharing one [`Dimensions`].
//! - **[`Ordinate`]**: a named coordinate selector (`X`, `Y`, `Z` or `M`).
//! - **[`Srid`]**: an opaque spatial reference tag, propagated by every operation and
//!   never interpreted.
//!
//! By default, ordinate values are `f64`, but this is generic: any numeric type
//! implementing [`CoordNum`] (or [`CoordFloat`] for the interpolating algorithms) works.
//!
//! # Features
//!
//! - `approx`: Allows geometry types to be checked for approximate equality with
//!   [approx](https://github.com/brendanzab/approx)
//! - `serde`: Allows geometry types to be serialized and deserialized with
//!   [Serde](https://serde.rs/)

use core::fmt::Debug;
use num_traits::{Float, Num, NumCast};

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(test)]
#[macro_use]
extern crate approx;

/// For algorithms which can use both integer **and** floating point `Coord`s.
///
/// Floats (`f32` and `f64`) and Integers (`u8`, `i32` etc.) implement this.
///
/// For algorithms which only make sense for floating point, like measure
/// interpolation, see [`CoordFloat`].
pub trait CoordNum: Num + Copy + NumCast + PartialOrd + Debug {}
impl<T: Num + Copy + NumCast + PartialOrd + Debug> CoordNum for T {}

/// For algorithms which can only use floating point `Coord`s, like measure interpolation.
pub trait CoordFloat: CoordNum + Float {}
impl<T: CoordNum + Float> CoordFloat for T {}

pub mod geometry;
pub use geometry::*;

mod error;
pub use error::Error;

#[macro_use]
mod macros;
