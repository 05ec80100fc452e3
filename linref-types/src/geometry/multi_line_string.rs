#[cfg(any(feature = "approx", test))]
use approx::{AbsDiffEq, RelativeEq};

use crate::{CoordNum, Dimensions, LineString, Srid};

/// A collection of [`LineString`]s sharing one dimensionality and spatial reference.
///
/// Members entering the collection are restamped with the parent's [`Dimensions`]
/// and [`Srid`]. Iterating over this object yields the component `LineString`s.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiLineString<T: CoordNum = f64> {
    lines: Vec<LineString<T>>,
    dims: Dimensions,
    srid: Srid,
}

impl<T: CoordNum> MultiLineString<T> {
    /// Instantiate Self from the raw content value, restamping every member.
    pub fn new(lines: Vec<LineString<T>>, dims: Dimensions, srid: Srid) -> Self {
        Self {
            lines: lines
                .into_iter()
                .map(|l| l.restamped(dims, srid))
                .collect(),
            dims,
            srid,
        }
    }

    /// The empty multilinestring.
    pub fn empty(dims: Dimensions, srid: Srid) -> Self {
        Self {
            lines: Vec::new(),
            dims,
            srid,
        }
    }

    /// Append a linestring, restamping it with the collection's dimensionality and
    /// SRID.
    pub fn push(&mut self, line: LineString<T>) {
        self.lines.push(line.restamped(self.dims, self.srid));
    }

    pub fn lines(&self) -> &[LineString<T>] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineString<T>> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
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

impl<T: CoordNum> IntoIterator for MultiLineString<T> {
    type Item = LineString<T>;
    type IntoIter = ::std::vec::IntoIter<LineString<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a, T: CoordNum> IntoIterator for &'a MultiLineString<T> {
    type Item = &'a LineString<T>;
    type IntoIter = ::std::slice::Iter<'a, LineString<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(any(feature = "approx", test))]
impl<T> AbsDiffEq for MultiLineString<T>
where
    T: AbsDiffEq<Epsilon = T> + CoordNum,
    T::Epsilon: Copy,
{
    type Epsilon = T;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if self.lines.len() != other.lines.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(lhs, rhs)| lhs.abs_diff_eq(rhs, epsilon))
    }
}

#[cfg(any(feature = "approx", test))]
impl<T> RelativeEq for MultiLineString<T>
where
    T: AbsDiffEq<Epsilon = T> + CoordNum + RelativeEq,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        if self.lines.len() != other.lines.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(lhs, rhs)| lhs.relative_eq(rhs, epsilon, max_relative))
    }
}
