#[cfg(any(feature = "approx", test))]
use approx::{AbsDiffEq, RelativeEq};

use crate::{CoordSeq, CoordNum, Dimensions, Srid};

/// An ordered sequence of coordinates representing a path between locations,
/// together with its spatial reference.
///
/// To be valid, a `LineString` must be empty or have two or more coordinates. The
/// dimensionality lives on the inner [`CoordSeq`].
///
/// # Examples
///
/// ```
/// use linref_types::{coord, CoordSeq, Dimensions, LineString, Srid};
///
/// let line = LineString::new(
///     CoordSeq::from_coords(
///         Dimensions::XYM,
///         vec![
///             coord! { x: 0.0, y: 0.0, m: 0.0 },
///             coord! { x: 10.0, y: 0.0, m: 10.0 },
///         ],
///     ),
///     Srid(4326),
/// );
///
/// assert!(line.has_m());
/// assert_eq!(line.coords().len(), 2);
/// ```
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineString<T: CoordNum = f64> {
    coords: CoordSeq<T>,
    srid: Srid,
}

impl<T: CoordNum> LineString<T> {
    /// Instantiate Self from a coordinate sequence.
    pub fn new(coords: CoordSeq<T>, srid: Srid) -> Self {
        Self { coords, srid }
    }

    /// An empty linestring with the given dimensionality.
    pub fn empty(dims: Dimensions, srid: Srid) -> Self {
        Self {
            coords: CoordSeq::new(dims),
            srid,
        }
    }

    pub fn coords(&self) -> &CoordSeq<T> {
        &self.coords
    }

    pub fn into_coords(self) -> CoordSeq<T> {
        self.coords
    }

    pub fn srid(&self) -> Srid {
        self.srid
    }

    pub fn dimensions(&self) -> Dimensions {
        self.coords.dimensions()
    }

    pub fn has_z(&self) -> bool {
        self.coords.has_z()
    }

    pub fn has_m(&self) -> bool {
        self.coords.has_m()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The same linestring restamped with a new dimensionality and spatial reference.
    pub(crate) fn restamped(self, dims: Dimensions, srid: Srid) -> Self {
        Self {
            coords: self.coords.with_dimensions(dims),
            srid,
        }
    }
}

#[cfg(any(feature = "approx", test))]
impl<T> AbsDiffEq for LineString<T>
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
        self.srid == other.srid && self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

#[cfg(any(feature = "approx", test))]
impl<T> RelativeEq for LineString<T>
where
    T: AbsDiffEq<Epsilon = T> + CoordNum + RelativeEq,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.srid == other.srid && self.coords.relative_eq(&other.coords, epsilon, max_relative)
    }
}
