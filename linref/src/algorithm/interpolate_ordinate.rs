use linref_types::{Coord, CoordFloat, Dimensions, Ordinate};

use crate::LinearRefError;

/// Given two coordinates, a working dimensionality, an ordinate, and an interpolation
/// value, generate a new coordinate that is proportionally between the input
/// coordinates, using the values at the chosen ordinate as the scaling factors.
///
/// Every ordinate inside `dimensions` is interpolated; ordinates beyond it are
/// inherited from `a`. The proportion is taken as an absolute value, so the result is
/// insensitive to segment orientation. Callers must not invoke this with
/// `a == b == value` on the chosen ordinate — the proportion is undefined there.
///
/// # Examples
///
/// ```
/// use linref::{coord, interpolate_at_ordinate, Dimensions, Ordinate};
///
/// let a = coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 };
/// let b = coord! { x: 10.0, y: 10.0, z: 0.0, m: 20.0 };
/// let c = interpolate_at_ordinate(&a, &b, Dimensions::XYZM, Ordinate::X, 5.0).unwrap();
/// assert_eq!(c.y, 5.0);
/// assert_eq!(c.m, 10.0);
/// ```
pub fn interpolate_at_ordinate<T: CoordFloat>(
    a: &Coord<T>,
    b: &Coord<T>,
    dimensions: Dimensions,
    ordinate: Ordinate,
    value: T,
) -> Result<Coord<T>, LinearRefError> {
    if ordinate.index() >= dimensions.ndims() {
        return Err(LinearRefError::OrdinateOutOfRange {
            ordinate,
            dimensions,
        });
    }

    let a_value = a.get(ordinate);
    let b_value = b.get(ordinate);
    if a_value.min(b_value) > value || a_value.max(b_value) < value {
        return Err(LinearRefError::TargetNotBetween);
    }

    let proportion = ((value - a_value) / (b_value - a_value)).abs();

    let mut interpolated = *a;
    for k in &Ordinate::ALL[..dimensions.ndims()] {
        let a_value = a.get(*k);
        let b_value = b.get(*k);
        interpolated.set(*k, a_value + proportion * (b_value - a_value));
    }

    Ok(interpolated)
}
