use core::fmt;

/// An opaque spatial reference identifier.
///
/// Every geometry carries one and every operation propagates it into its outputs
/// unchanged; the value itself is never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Srid(pub i32);

impl Srid {
    /// The conventional tag for an unspecified spatial reference.
    pub const UNKNOWN: Srid = Srid(0);
}

impl From<i32> for Srid {
    fn from(value: i32) -> Self {
        Srid(value)
    }
}

impl fmt::Display for Srid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
