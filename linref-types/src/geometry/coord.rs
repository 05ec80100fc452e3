use crate::{CoordNum, Dimensions, Ordinate};

#[cfg(any(feature = "approx", test))]
use approx::{AbsDiffEq, RelativeEq};

/// A lightweight struct used to store a four-ordinate coordinate `(x, y, z, m)`.
///
/// A `Coord` always stores all four scalars. Which of `z` and `m` are meaningful is
/// described by the [`Dimensions`] descriptor of the containing sequence or geometry;
/// absent ordinates are stored as zero, never as sentinel values.
///
/// This type implements the [vector space] operations:
/// [`Add`], [`Sub`], [`Neg`], [`Zero`],
/// [`Mul<T>`][`Mul`], and [`Div<T>`][`Div`] traits.
///
/// # Semantics
///
/// This type does not represent any geospatial primitive, but is used in their
/// definitions. The only requirement is that the ordinates it contains are valid
/// numbers (for eg. not `f64::NAN`).
///
/// [vector space]: //en.wikipedia.org/wiki/Vector_space
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord<T: CoordNum = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub m: T,
}

impl<T: CoordNum> Coord<T> {
    /// A two-dimensional coordinate; `z` and `m` are zero.
    #[inline]
    pub fn xy(x: T, y: T) -> Self {
        Self {
            x,
            y,
            z: T::zero(),
            m: T::zero(),
        }
    }

    /// A coordinate with an elevation; `m` is zero.
    #[inline]
    pub fn xyz(x: T, y: T, z: T) -> Self {
        Self {
            x,
            y,
            z,
            m: T::zero(),
        }
    }

    /// A measured coordinate without elevation; `z` is zero.
    #[inline]
    pub fn xym(x: T, y: T, m: T) -> Self {
        Self {
            x,
            y,
            z: T::zero(),
            m,
        }
    }

    /// A coordinate carrying all four ordinates.
    #[inline]
    pub fn xyzm(x: T, y: T, z: T, m: T) -> Self {
        Self { x, y, z, m }
    }

    /// Returns a tuple that contains the x/horizontal & y/vertical component of the
    /// coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use linref_types::coord;
    ///
    /// let c = coord! {
    ///     x: 40.02f64,
    ///     y: 116.34,
    /// };
    /// let (x, y) = c.x_y();
    ///
    /// assert_eq!(y, 116.34);
    /// assert_eq!(x, 40.02f64);
    /// ```
    #[inline]
    pub fn x_y(&self) -> (T, T) {
        (self.x, self.y)
    }

    /// Read the value stored at the given ordinate.
    ///
    /// Access is positional over the full 4-tuple and always succeeds; whether the
    /// ordinate is meaningful for a particular geometry is governed by its
    /// [`Dimensions`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linref_types::{coord, Ordinate};
    ///
    /// let c = coord! { x: 1.0, y: 2.0, m: 9.5 };
    /// assert_eq!(c.get(Ordinate::Y), 2.0);
    /// assert_eq!(c.get(Ordinate::M), 9.5);
    /// ```
    #[inline]
    pub fn get(&self, ordinate: Ordinate) -> T {
        match ordinate {
            Ordinate::X => self.x,
            Ordinate::Y => self.y,
            Ordinate::Z => self.z,
            Ordinate::M => self.m,
        }
    }

    /// Write a value at the given ordinate.
    #[inline]
    pub fn set(&mut self, ordinate: Ordinate, value: T) {
        match ordinate {
            Ordinate::X => self.x = value,
            Ordinate::Y => self.y = value,
            Ordinate::Z => self.z = value,
            Ordinate::M => self.m = value,
        }
    }

    /// A copy of the coordinate with the ordinates outside `dims` zeroed.
    pub(crate) fn masked(mut self, dims: Dimensions) -> Self {
        if !dims.has_z() {
            self.z = T::zero();
        }
        if !dims.has_m() {
            self.m = T::zero();
        }
        self
    }
}

impl<T: CoordNum> From<(T, T)> for Coord<T> {
    #[inline]
    fn from(coords: (T, T)) -> Self {
        Coord::xy(coords.0, coords.1)
    }
}

impl<T: CoordNum> From<(T, T, T, T)> for Coord<T> {
    #[inline]
    fn from(coords: (T, T, T, T)) -> Self {
        Coord::xyzm(coords.0, coords.1, coords.2, coords.3)
    }
}

impl<T: CoordNum> From<[T; 4]> for Coord<T> {
    #[inline]
    fn from(coords: [T; 4]) -> Self {
        Coord::xyzm(coords[0], coords[1], coords[2], coords[3])
    }
}

impl<T: CoordNum> From<Coord<T>> for (T, T) {
    #[inline]
    fn from(coord: Coord<T>) -> Self {
        (coord.x, coord.y)
    }
}

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Negate a coordinate.
///
/// # Examples
///
/// ```
/// use linref_types::coord;
///
/// let p = coord! { x: 1.25, y: 2.5, m: 4.0 };
/// let q = -p;
///
/// assert_eq!(q.x, -p.x);
/// assert_eq!(q.m, -p.m);
/// ```
impl<T> Neg for Coord<T>
where
    T: CoordNum + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Coord {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            m: -self.m,
        }
    }
}

/// Add two coordinates.
///
/// # Examples
///
/// ```
/// use linref_types::coord;
///
/// let p = coord! { x: 1.25, y: 2.5 };
/// let q = coord! { x: 1.5, y: 2.5 };
/// let sum = p + q;
///
/// assert_eq!(sum.x, 2.75);
/// assert_eq!(sum.y, 5.0);
/// ```
impl<T: CoordNum> Add for Coord<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            m: self.m + rhs.m,
        }
    }
}

/// Subtract a coordinate from another.
///
/// # Examples
///
/// ```
/// use linref_types::coord;
///
/// let p = coord! { x: 1.5, y: 2.5 };
/// let q = coord! { x: 1.25, y: 2.5 };
/// let diff = p - q;
///
/// assert_eq!(diff.x, 0.25);
/// assert_eq!(diff.y, 0.);
/// ```
impl<T: CoordNum> Sub for Coord<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            m: self.m - rhs.m,
        }
    }
}

/// Multiply coordinate wise by a scalar.
///
/// # Examples
///
/// ```
/// use linref_types::coord;
///
/// let p = coord! { x: 1.25, y: 2.5 };
/// let q = p * 4.;
///
/// assert_eq!(q.x, 5.0);
/// assert_eq!(q.y, 10.0);
/// ```
impl<T: CoordNum> Mul<T> for Coord<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            m: self.m * rhs,
        }
    }
}

/// Divide coordinate wise by a scalar.
///
/// # Examples
///
/// ```
/// use linref_types::coord;
///
/// let p = coord! { x: 5., y: 10. };
/// let q = p / 4.;
///
/// assert_eq!(q.x, 1.25);
/// assert_eq!(q.y, 2.5);
/// ```
impl<T: CoordNum> Div<T> for Coord<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Coord {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            m: self.m / rhs,
        }
    }
}

use num_traits::Zero;

impl<T: CoordNum> Coord<T> {
    #[inline]
    pub fn zero() -> Self {
        Coord {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            m: T::zero(),
        }
    }
}

impl<T: CoordNum> Zero for Coord<T> {
    #[inline]
    fn zero() -> Self {
        Self::zero()
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero() && self.m.is_zero()
    }
}

#[cfg(any(feature = "approx", test))]
impl<T: CoordNum + AbsDiffEq> AbsDiffEq for Coord<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
            && T::abs_diff_eq(&self.m, &other.m, epsilon)
    }
}

#[cfg(any(feature = "approx", test))]
impl<T: CoordNum + RelativeEq> RelativeEq for Coord<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
            && T::relative_eq(&self.m, &other.m, epsilon, max_relative)
    }
}
