use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MismatchedGeometry {
        expected: &'static str,
        found: &'static str,
    },
    /// An ordinate index outside `0..=3` was used where an [`Ordinate`](crate::Ordinate)
    /// was expected.
    InvalidOrdinateIndex(usize),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MismatchedGeometry { expected, found } => {
                write!(f, "Expected a {}, but found a {}", expected, found)
            }
            Error::InvalidOrdinateIndex(index) => {
                write!(f, "Cannot extract ordinate {}", index)
            }
        }
    }
}
