#[cfg(any(feature = "approx", test))]
use approx::{AbsDiffEq, RelativeEq};

use crate::{Coord, CoordNum, Dimensions, Srid};

/// A single coordinate together with its dimensionality and spatial reference.
///
/// A `Point` may be *empty* — the valid-but-no-geometry result some operations
/// produce — in which case it carries no coordinate at all but still knows its
/// dimensionality and SRID.
///
/// # Examples
///
/// ```
/// use linref_types::{coord, Dimensions, Point, Srid};
///
/// let point = Point::new(coord! { x: 1.0, y: 2.0, m: 7.0 }, Dimensions::XYM, Srid(4326));
/// assert_eq!(point.m(), Some(7.0));
///
/// let nothing = Point::<f64>::empty(Dimensions::XYM, Srid(4326));
/// assert!(nothing.is_empty());
/// assert_eq!(nothing.srid(), Srid(4326));
/// ```
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T: CoordNum = f64> {
    coord: Option<Coord<T>>,
    dims: Dimensions,
    srid: Srid,
}

impl<T: CoordNum> Point<T> {
    /// A point at `coord`, normalized against `dims`.
    pub fn new(coord: Coord<T>, dims: Dimensions, srid: Srid) -> Self {
        Self {
            coord: Some(coord.masked(dims)),
            dims,
            srid,
        }
    }

    /// The empty point: no coordinate, but a definite dimensionality and SRID.
    pub fn empty(dims: Dimensions, srid: Srid) -> Self {
        Self {
            coord: None,
            dims,
            srid,
        }
    }

    pub fn coord(&self) -> Option<Coord<T>> {
        self.coord
    }

    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn srid(&self) -> Srid {
        self.srid
    }

    pub fn has_z(&self) -> bool {
        self.dims.has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dims.has_m()
    }

    /// The measure ordinate, when the point is non-empty and measured.
    pub fn m(&self) -> Option<T> {
        if self.dims.has_m() {
            self.coord.map(|c| c.m)
        } else {
            None
        }
    }

    /// The same point restamped with a new dimensionality and spatial reference.
    pub(crate) fn restamped(self, dims: Dimensions, srid: Srid) -> Self {
        Self {
            coord: self.coord.map(|c| c.masked(dims)),
            dims,
            srid,
        }
    }
}

#[cfg(any(feature = "approx", test))]
impl<T: CoordNum + AbsDiffEq> AbsDiffEq for Point<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        if self.dims != other.dims || self.srid != other.srid {
            return false;
        }
        match (&self.coord, &other.coord) {
            (Some(lhs), Some(rhs)) => lhs.abs_diff_eq(rhs, epsilon),
            (None, None) => true,
            _ => false,
        }
    }
}

#[cfg(any(feature = "approx", test))]
impl<T: CoordNum + RelativeEq> RelativeEq for Point<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        if self.dims != other.dims || self.srid != other.srid {
            return false;
        }
        match (&self.coord, &other.coord) {
            (Some(lhs), Some(rhs)) => lhs.relative_eq(rhs, epsilon, max_relative),
            (None, None) => true,
            _ => false,
        }
    }
}
