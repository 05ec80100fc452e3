#[cfg(any(feature = "approx", test))]
use approx::{AbsDiffEq, RelativeEq};

use crate::{CoordNum, Dimensions, Point, Srid};

/// A collection of [`Point`]s sharing one dimensionality and spatial reference.
///
/// Members entering the collection are restamped with the parent's [`Dimensions`]
/// and [`Srid`], so the containment invariant holds by construction.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPoint<T: CoordNum = f64> {
    points: Vec<Point<T>>,
    dims: Dimensions,
    srid: Srid,
}

impl<T: CoordNum> MultiPoint<T> {
    /// Instantiate Self from the raw content value, restamping every member.
    pub fn new(points: Vec<Point<T>>, dims: Dimensions, srid: Srid) -> Self {
        Self {
            points: points
                .into_iter()
                .map(|p| p.restamped(dims, srid))
                .collect(),
            dims,
            srid,
        }
    }

    /// The empty multipoint.
    pub fn empty(dims: Dimensions, srid: Srid) -> Self {
        Self {
            points: Vec::new(),
            dims,
            srid,
        }
    }

    /// Append a point, restamping it with the collection's dimensionality and SRID.
    pub fn push(&mut self, point: Point<T>) {
        self.points.push(point.restamped(self.dims, self.srid));
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point<T>> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
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
}

impl<T: CoordNum> IntoIterator for MultiPoint<T> {
    type Item = Point<T>;
    type IntoIter = ::std::vec::IntoIter<Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T: CoordNum> IntoIterator for &'a MultiPoint<T> {
    type Item = &'a Point<T>;
    type IntoIter = ::std::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(any(feature = "approx", test))]
impl<T: CoordNum + AbsDiffEq> AbsDiffEq for MultiPoint<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        if self.points.len() != other.points.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(lhs, rhs)| lhs.abs_diff_eq(rhs, epsilon))
    }
}

#[cfg(any(feature = "approx", test))]
impl<T: CoordNum + RelativeEq> RelativeEq for MultiPoint<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        if self.points.len() != other.points.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(lhs, rhs)| lhs.relative_eq(rhs, epsilon, max_relative))
    }
}
