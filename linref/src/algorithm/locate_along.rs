use linref_types::{
    Coord, CoordFloat, CoordSeq, Geometry, LineString, MultiLineString, MultiPoint, Point,
};
use log::warn;

use crate::LinearRefError;

/// Find the points along a geometry where the interpolated measure equals a target
/// value.
///
/// Each hit may be displaced perpendicular to the line by a signed `offset`: a
/// positive offset lies to the left of the direction of travel, a negative one to
/// the right.
///
/// # Examples
///
/// ```
/// use linref::{coord, CoordSeq, Dimensions, LineString, LocateAlong, Srid};
///
/// let line = LineString::new(
///     CoordSeq::from_coords(
///         Dimensions::XYM,
///         vec![
///             coord! { x: 0.0, y: 0.0, m: 0.0 },
///             coord! { x: 10.0, y: 0.0, m: 10.0 },
///         ],
///     ),
///     Srid::UNKNOWN,
/// );
///
/// let hits = line.locate_along(3.0, 0.0);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits.points()[0].m(), Some(3.0));
/// ```
pub trait LocateAlong<T: CoordFloat> {
    type Output;

    fn locate_along(&self, m: T, offset: T) -> Self::Output;
}

/// Locate a measure on one segment, producing at most one interpolated coordinate.
///
/// Zero measure-length segments cannot carry an interpolation; they are reported and
/// skipped so the enclosing walk continues.
fn segment_locate_along<T: CoordFloat>(
    p1: &Coord<T>,
    p2: &Coord<T>,
    m: T,
    offset: T,
) -> Option<Coord<T>> {
    let m1 = p1.m;
    let m2 = p2.m;

    // M is out of range, no new point generated.
    if m < m1.min(m2) || m > m1.max(m2) {
        return None;
    }

    if m1 == m2 {
        warn!("zero measure-length segment encountered at m = {:?}", m1);
        return None;
    }

    // M is in range, new point to be generated.
    let proportion = (m - m1) / (m2 - m1);
    let mut pn = Coord {
        x: p1.x + (p2.x - p1.x) * proportion,
        y: p1.y + (p2.y - p1.y) * proportion,
        z: p1.z + (p2.z - p1.z) * proportion,
        m,
    };

    // Offset to the left or right, if necessary.
    if offset != T::zero() {
        let theta = (p2.y - p1.y).atan2(p2.x - p1.x);
        pn.x = pn.x - theta.sin() * offset;
        pn.y = pn.y + theta.cos() * offset;
    }

    Some(pn)
}

/// Walk every segment of a sequence and collect the measure hits in traversal order.
///
/// Hits coinciding with a shared vertex are emitted once per segment whose measure
/// span contains them, so such values may appear twice. Sequences with fewer than
/// two coordinates produce nothing.
fn coords_locate_along<T: CoordFloat>(
    seq: &CoordSeq<T>,
    m: T,
    offset: T,
) -> Option<CoordSeq<T>> {
    if seq.len() < 2 {
        return None;
    }

    let mut hits: Option<CoordSeq<T>> = None;
    for (p1, p2) in seq.segments() {
        if let Some(pn) = segment_locate_along(&p1, &p2, m, offset) {
            hits.get_or_insert_with(|| CoordSeq::with_capacity(seq.dimensions(), 8))
                .push(pn);
        }
    }
    hits
}

/// Stamp a linestring with measures distributed linearly from `m_start` to `m_end`
/// over the *vertex index* (not the arc length), promoting its dimensionality to
/// include M.
///
/// A single-vertex line receives `m_start`.
///
/// # Examples
///
/// ```
/// use linref::{coord, measured_by_index, CoordSeq, Dimensions, LineString, Srid};
///
/// let line = LineString::new(
///     CoordSeq::from_coords(
///         Dimensions::XY,
///         vec![
///             coord! { x: 0.0, y: 0.0 },
///             coord! { x: 3.0, y: 0.0 },
///             coord! { x: 100.0, y: 0.0 },
///         ],
///     ),
///     Srid::UNKNOWN,
/// );
///
/// let measured = measured_by_index(&line, 0.0, 1.0);
/// assert_eq!(measured.coords()[1].m, 0.5);
/// ```
pub fn measured_by_index<T: CoordFloat>(
    line: &LineString<T>,
    m_start: T,
    m_end: T,
) -> LineString<T> {
    let dims = line.dimensions().with_m();
    let npoints = line.coords().len();
    let mut seq = CoordSeq::with_capacity(dims, npoints);

    for (i, coord) in line.coords().iter().enumerate() {
        let m = if npoints > 1 {
            let fraction = T::from(i).unwrap() / T::from(npoints - 1).unwrap();
            m_start + (m_end - m_start) * fraction
        } else {
            m_start
        };
        seq.push(Coord { m, ..*coord });
    }

    LineString::new(seq, line.srid())
}

impl<T: CoordFloat> LocateAlong<T> for Point<T> {
    type Output = Result<Point<T>, LinearRefError>;

    /// A clone of the point when its measure equals `m` exactly, the empty point
    /// otherwise. The offset does not apply to point inputs.
    fn locate_along(&self, m: T, _offset: T) -> Self::Output {
        if !self.has_m() {
            return Err(LinearRefError::MissingMeasure);
        }
        match self.coord() {
            Some(coord) if coord.m == m => Ok(*self),
            _ => Ok(Point::empty(self.dimensions(), self.srid())),
        }
    }
}

impl<T: CoordFloat> LocateAlong<T> for LineString<T> {
    type Output = MultiPoint<T>;

    /// Locate `m` on every segment of the line. Lines without a measure dimension
    /// are measured on the fly, linearly from 0.0 to 1.0 over the vertex index.
    ///
    /// The result carries the input's SRID and dimensionality; it is empty when no
    /// segment spans the target measure.
    fn locate_along(&self, m: T, offset: T) -> Self::Output {
        let hits = if self.has_m() {
            coords_locate_along(self.coords(), m, offset)
        } else {
            let measured = measured_by_index(self, T::zero(), T::one());
            coords_locate_along(measured.coords(), m, offset)
        };

        match hits {
            Some(seq) => MultiPoint::new(
                seq.iter()
                    .map(|&coord| Point::new(coord, self.dimensions(), self.srid()))
                    .collect(),
                self.dimensions(),
                self.srid(),
            ),
            None => MultiPoint::empty(self.dimensions(), self.srid()),
        }
    }
}

impl<T: CoordFloat> LocateAlong<T> for MultiLineString<T> {
    type Output = Result<MultiPoint<T>, LinearRefError>;

    /// Locate `m` on every member line and merge the hits in member order.
    fn locate_along(&self, m: T, offset: T) -> Self::Output {
        if !self.has_m() {
            return Err(LinearRefError::MissingMeasure);
        }

        let mut merged = MultiPoint::empty(self.dimensions(), self.srid());
        for line in self.iter() {
            let along = line.locate_along(m, offset);
            for point in along.iter() {
                merged.push(*point);
            }
        }
        Ok(merged)
    }
}

impl<T: CoordFloat> LocateAlong<T> for Geometry<T> {
    type Output = Result<Geometry<T>, LinearRefError>;

    /// Dispatch over the supported variants: points, linestrings and
    /// multilinestrings. Inputs without a measure dimension fail unless they are
    /// linestrings, which are measured on the fly.
    fn locate_along(&self, m: T, offset: T) -> Self::Output {
        if !self.has_m() && !matches!(self, Geometry::LineString(_)) {
            return Err(LinearRefError::MissingMeasure);
        }

        match self {
            Geometry::Point(point) => point.locate_along(m, offset).map(Geometry::Point),
            Geometry::LineString(line) => Ok(Geometry::MultiPoint(line.locate_along(m, offset))),
            Geometry::MultiLineString(multi) => {
                multi.locate_along(m, offset).map(Geometry::MultiPoint)
            }
            other => Err(LinearRefError::UnsupportedGeometry {
                found: other.type_name(),
            }),
        }
    }
}
