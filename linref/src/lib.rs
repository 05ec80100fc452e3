//! The `linref` crate provides linear-referencing primitives and algorithms for
//! measured geometries.
//!
//! # Types
//!
//! - **[`Coord`]**: A four-ordinate coordinate `(x, y, z, m)`
//! - **[`CoordSeq`]**: An ordered sequence of [`Coord`]s sharing one [`Dimensions`]
//! - **[`Point`]**: A single, possibly empty, [`Coord`] with a [`Srid`]
//! - **[`MultiPoint`]**: A collection of [`Point`]s
//! - **[`LineString`]**: A series of contiguous line segments
//! - **[`MultiLineString`]**: A collection of [`LineString`]s
//! - **[`GeometryCollection`]**: A heterogeneous collection of [`Geometry`]s
//! - **[`Geometry`]**: An enumeration of all geometry types
//!
//! The preceding types are reexported from the `linref-types` crate. Consider using
//! that crate if you only need access to these types and no other `linref`
//! functionality.
//!
//! # Algorithms
//!
//! ## Linear referencing
//!
//! - **[`LocateAlong`]**: Find the points on a measured geometry where the
//!   interpolated measure equals a target value, optionally displaced perpendicular
//!   to the line by a signed offset
//! - **[`ClipToOrdinateRange`]**: Extract the portions of a line geometry whose
//!   chosen ordinate lies within a closed interval, interpolating new points at each
//!   crossing of the interval boundary
//! - **[`interpolate_at_ordinate`]**: Produce a coordinate proportionally between two
//!   others, at a target value on one ordinate
//! - **[`measured_by_index`]**: Stamp a linestring with measures distributed linearly
//!   over the vertex index
//!
//! ## Boundary
//!
//! - **[`BoundingRect`]**: Calculate the axis-aligned bounding rectangle of a
//!   geometry
//!
//! # Semantics
//!
//! All operations are purely functional over their inputs: geometries are taken by
//! shared reference, outputs are freshly allocated, and nothing is interpreted from
//! the [`Srid`] beyond propagating it. Ordinate comparisons are exact IEEE-754
//! equality; callers wanting tolerance must pre-snap their values.

pub use crate::algorithm::*;

/// This module includes all the functions of geometric calculations
pub mod algorithm;

mod error;
pub use error::LinearRefError;

/// Measured geometry types.
///
/// Reexported from the `linref-types` crate.
pub mod geometry {
    pub use linref_types::{
        Coord, CoordSeq, Dimensions, Error, Geometry, GeometryCollection, LineString,
        MultiLineString, MultiPoint, Ordinate, Point, Rect, Srid,
    };
}
pub use geometry::*;

pub use linref_types::{coord, CoordFloat, CoordNum};

pub mod prelude {
    pub use crate::algorithm::*;
}

#[cfg(test)]
#[macro_use]
extern crate approx;
