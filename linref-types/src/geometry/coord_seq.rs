#[cfg(any(feature = "approx", test))]
use approx::{AbsDiffEq, RelativeEq};

use core::ops::Index;

use crate::{Coord, CoordNum, Dimensions};

/// An ordered sequence of [`Coord`]s sharing a single [`Dimensions`] descriptor.
///
/// This is the container every linear-referencing algorithm consumes and produces.
/// Coordinates entering the sequence are normalized against its dimensionality: the
/// ordinates beyond `ndims` are zeroed, so stored data never carries meaning the
/// descriptor says it lacks.
///
/// # Examples
///
/// ```
/// use linref_types::{coord, CoordSeq, Dimensions};
///
/// let mut seq = CoordSeq::new(Dimensions::XYM);
/// seq.push(coord! { x: 0.0, y: 0.0, m: 0.0 });
/// seq.push(coord! { x: 10.0, y: 0.0, m: 10.0 });
///
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq[1].m, 10.0);
/// ```
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordSeq<T: CoordNum = f64> {
    coords: Vec<Coord<T>>,
    dims: Dimensions,
}

impl<T: CoordNum> CoordSeq<T> {
    /// An empty sequence with the given dimensionality.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            coords: Vec::new(),
            dims,
        }
    }

    /// An empty sequence with room for `capacity` coordinates.
    pub fn with_capacity(dims: Dimensions, capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(capacity),
            dims,
        }
    }

    /// Build a sequence from existing coordinates, normalizing each against `dims`.
    pub fn from_coords(dims: Dimensions, coords: impl IntoIterator<Item = Coord<T>>) -> Self {
        Self {
            coords: coords.into_iter().map(|c| c.masked(dims)).collect(),
            dims,
        }
    }

    /// Append a coordinate, zeroing the ordinates outside the sequence dimensionality.
    pub fn push(&mut self, coord: Coord<T>) {
        self.coords.push(coord.masked(self.dims));
    }

    /// Overwrite the coordinate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, coord: Coord<T>) {
        self.coords[index] = coord.masked(self.dims);
    }

    pub fn get(&self, index: usize) -> Option<&Coord<T>> {
        self.coords.get(index)
    }

    pub fn first(&self) -> Option<&Coord<T>> {
        self.coords.first()
    }

    pub fn last(&self) -> Option<&Coord<T>> {
        self.coords.last()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn has_z(&self) -> bool {
        self.dims.has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dims.has_m()
    }

    /// Return an iterator yielding the members of the sequence as [`Coord`]s.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Coord<T>> {
        self.coords.iter()
    }

    /// The coordinates as a slice.
    pub fn coords(&self) -> &[Coord<T>] {
        &self.coords
    }

    /// Return an iterator yielding one `(start, end)` pair for each line segment in
    /// the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use linref_types::{coord, CoordSeq, Dimensions};
    ///
    /// let seq = CoordSeq::from_coords(
    ///     Dimensions::XY,
    ///     vec![coord! { x: 0., y: 0. }, coord! { x: 5., y: 0. }, coord! { x: 7., y: 9. }],
    /// );
    ///
    /// let mut segments = seq.segments();
    /// assert_eq!(
    ///     Some((coord! { x: 0., y: 0. }, coord! { x: 5., y: 0. })),
    ///     segments.next()
    /// );
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = (Coord<T>, Coord<T>)> + '_ {
        self.coords.windows(2).map(|w| {
            // slice::windows(2) is guaranteed to yield a slice with exactly 2 elements
            unsafe { (*w.get_unchecked(0), *w.get_unchecked(1)) }
        })
    }

    /// Rebuild the sequence under a different dimensionality, re-normalizing every
    /// coordinate.
    pub fn with_dimensions(self, dims: Dimensions) -> Self {
        if dims == self.dims {
            return self;
        }
        Self::from_coords(dims, self.coords)
    }
}

impl<T: CoordNum> Index<usize> for CoordSeq<T> {
    type Output = Coord<T>;

    fn index(&self, index: usize) -> &Coord<T> {
        &self.coords[index]
    }
}

impl<T: CoordNum> IntoIterator for CoordSeq<T> {
    type Item = Coord<T>;
    type IntoIter = ::std::vec::IntoIter<Coord<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl<'a, T: CoordNum> IntoIterator for &'a CoordSeq<T> {
    type Item = &'a Coord<T>;
    type IntoIter = ::std::slice::Iter<'a, Coord<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

#[cfg(any(feature = "approx", test))]
impl<T> AbsDiffEq for CoordSeq<T>
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
        if self.dims != other.dims || self.coords.len() != other.coords.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(lhs, rhs)| lhs.abs_diff_eq(rhs, epsilon))
    }
}

#[cfg(any(feature = "approx", test))]
impl<T> RelativeEq for CoordSeq<T>
where
    T: AbsDiffEq<Epsilon = T> + CoordNum + RelativeEq,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        if self.dims != other.dims || self.coords.len() != other.coords.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(lhs, rhs)| lhs.relative_eq(rhs, epsilon, max_relative))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn push_masks_to_dimensionality() {
        let mut seq = CoordSeq::new(Dimensions::XY);
        seq.push(coord! { x: 1.0, y: 2.0, z: 3.0, m: 4.0 });
        assert_eq!(seq[0], coord! { x: 1.0, y: 2.0 });

        let mut seq = CoordSeq::new(Dimensions::XYM);
        seq.push(coord! { x: 1.0, y: 2.0, z: 3.0, m: 4.0 });
        assert_eq!(seq[0], coord! { x: 1.0, y: 2.0, m: 4.0 });
    }

    #[test]
    fn segments_walk_consecutive_pairs() {
        let seq = CoordSeq::from_coords(
            Dimensions::XYM,
            vec![
                coord! { x: 0.0, y: 0.0, m: 0.0 },
                coord! { x: 5.0, y: 0.0, m: 5.0 },
                coord! { x: 5.0, y: 5.0, m: 10.0 },
            ],
        );
        let segments: Vec<_> = seq.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].1, seq[1]);
        assert_eq!(segments[1].0, seq[1]);
    }

    #[test]
    fn with_dimensions_renormalizes() {
        let seq = CoordSeq::from_coords(
            Dimensions::XYZM,
            vec![coord! { x: 1.0, y: 1.0, z: 2.0, m: 3.0 }],
        );
        let flattened = seq.with_dimensions(Dimensions::XYM);
        assert_eq!(flattened.dimensions(), Dimensions::XYM);
        assert_eq!(flattened[0], coord! { x: 1.0, y: 1.0, m: 3.0 });
    }
}
