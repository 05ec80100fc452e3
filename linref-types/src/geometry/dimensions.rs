/// The dimensionality of a geometry: which of the optional `z` and `m` ordinates
/// carry meaning.
///
/// Every coordinate container shares a single `Dimensions` value; individual
/// [`Coord`](crate::Coord)s always store all four scalars, with the dead ones held
/// at zero.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dimensions {
    /// A two-dimensional geometry with X and Y values
    #[default]
    XY,

    /// A three-dimensional geometry with X, Y, and Z values
    XYZ,

    /// A three-dimensional geometry with X, Y, and M values
    XYM,

    /// A four-dimensional geometry with X, Y, Z, and M values
    XYZM,
}

impl Dimensions {
    /// Build a descriptor from presence flags for the two optional ordinates.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Self::XY,
            (true, false) => Self::XYZ,
            (false, true) => Self::XYM,
            (true, true) => Self::XYZM,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Self::XYZ | Self::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Self::XYM | Self::XYZM)
    }

    /// The number of meaningful ordinates: `2 + has_z + has_m`.
    pub fn ndims(&self) -> usize {
        match self {
            Self::XY => 2,
            Self::XYZ | Self::XYM => 3,
            Self::XYZM => 4,
        }
    }

    /// The descriptor with a measure ordinate added.
    pub fn with_m(self) -> Self {
        Self::from_flags(self.has_z(), true)
    }
}
