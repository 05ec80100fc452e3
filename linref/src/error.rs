use std::fmt;

use linref_types::{Dimensions, Ordinate};

/// Failure modes of the linear-referencing operations.
///
/// Valid inputs that produce no geometry are *not* errors: they yield empty
/// geometries or `None` per the operation's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinearRefError {
    /// The requested ordinate is not addressable within the geometry's
    /// dimensionality (`ordinate.index() >= dimensions.ndims()`).
    OrdinateOutOfRange {
        ordinate: Ordinate,
        dimensions: Dimensions,
    },
    /// An interpolation target lay outside the segment's span on the chosen
    /// ordinate.
    TargetNotBetween,
    /// The operation requires a measure dimension the input geometry lacks.
    MissingMeasure,
    /// The input geometry variant is not supported by the operation.
    UnsupportedGeometry { found: &'static str },
}

impl std::error::Error for LinearRefError {}

impl fmt::Display for LinearRefError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearRefError::OrdinateOutOfRange {
                ordinate,
                dimensions,
            } => {
                write!(
                    f,
                    "Cannot address ordinate {} in a {}-d geometry",
                    ordinate,
                    dimensions.ndims()
                )
            }
            LinearRefError::TargetNotBetween => {
                write!(
                    f,
                    "Cannot interpolate to a value not between the input points"
                )
            }
            LinearRefError::MissingMeasure => {
                write!(f, "Input geometry does not have a measure dimension")
            }
            LinearRefError::UnsupportedGeometry { found } => {
                write!(
                    f,
                    "Only linear geometries are supported, {} provided",
                    found
                )
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_output() {
        let error = LinearRefError::OrdinateOutOfRange {
            ordinate: Ordinate::M,
            dimensions: Dimensions::XYM,
        };
        assert_eq!(error.to_string(), "Cannot address ordinate M in a 3-d geometry");

        let error = LinearRefError::UnsupportedGeometry { found: "MultiPoint" };
        assert_eq!(
            error.to_string(),
            "Only linear geometries are supported, MultiPoint provided"
        );
    }
}
