use linref_types::{
    Coord, CoordFloat, CoordSeq, Dimensions, Geometry, GeometryCollection, LineString,
    MultiLineString, Ordinate, Point, Srid,
};
use log::debug;

use crate::algorithm::interpolate_ordinate::interpolate_at_ordinate;
use crate::LinearRefError;

/// Extract the portions of a line geometry whose chosen ordinate lies within the
/// closed interval `[from, to]`, interpolating new coordinates at every crossing of
/// an interval boundary.
///
/// The result is a [`Geometry::MultiLineString`] when every fragment is a line, and
/// widens to a [`Geometry::GeometryCollection`] as soon as a degenerate single-point
/// fragment is produced. `Ok(None)` means the clip was valid but nothing of the
/// input lies within the interval.
///
/// Reversed bounds are accepted and swapped. Boundary comparisons are exact
/// IEEE-754 equality.
///
/// # Examples
///
/// ```
/// use linref::{
///     coord, ClipToOrdinateRange, CoordSeq, Dimensions, Geometry, LineString, Ordinate, Srid,
/// };
///
/// let line = LineString::new(
///     CoordSeq::from_coords(
///         Dimensions::XY,
///         vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 }],
///     ),
///     Srid::UNKNOWN,
/// );
///
/// let clipped = line
///     .clip_to_ordinate_range(Ordinate::Y, 2.0, 4.0)
///     .unwrap()
///     .unwrap();
/// assert!(matches!(clipped, Geometry::MultiLineString(_)));
/// ```
pub trait ClipToOrdinateRange<T: CoordFloat> {
    type Output;

    fn clip_to_ordinate_range(&self, ordinate: Ordinate, from: T, to: T) -> Self::Output;
}

/// Classifies what the previous vertex contributed to the fragment under
/// construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Added {
    /// The previous vertex lay outside the interval.
    Nothing,
    /// The previous vertex lay strictly inside the interval.
    Inside,
    /// The previous vertex lay exactly on an interval boundary.
    OnBoundary,
}

/// Accumulates clip fragments and owns the container-widening rule: the output
/// starts as a multilinestring and is downgraded to a geometry collection the
/// moment a single-point fragment arrives. The downgrade is one-way.
struct ClipBuilder<T: CoordFloat> {
    geoms: Vec<Geometry<T>>,
    homogeneous: bool,
    dims: Dimensions,
    srid: Srid,
}

impl<T: CoordFloat> ClipBuilder<T> {
    fn new(dims: Dimensions, srid: Srid) -> Self {
        Self {
            geoms: Vec::new(),
            homogeneous: true,
            dims,
            srid,
        }
    }

    /// Save a finished fragment buffer: one coordinate becomes a point (widening
    /// the container), two or more become a linestring.
    fn flush(&mut self, buf: CoordSeq<T>) {
        match buf.len() {
            0 => {}
            1 => {
                debug!("flushing single-coordinate fragment, widening to collection");
                self.homogeneous = false;
                self.geoms
                    .push(Geometry::Point(Point::new(buf[0], self.dims, self.srid)));
            }
            _ => {
                self.geoms
                    .push(Geometry::LineString(LineString::new(buf, self.srid)));
            }
        }
    }

    /// Concatenate the fragments of a member clip result, keeping track of
    /// homogeneity.
    fn absorb(&mut self, clipped: Geometry<T>) {
        match clipped {
            Geometry::MultiLineString(lines) => self
                .geoms
                .extend(lines.into_iter().map(Geometry::LineString)),
            Geometry::GeometryCollection(collection) => {
                self.homogeneous = false;
                self.geoms.extend(collection);
            }
            other => {
                self.homogeneous = false;
                self.geoms.push(other);
            }
        }
    }

    fn finish(self) -> Option<Geometry<T>> {
        if self.geoms.is_empty() {
            return None;
        }
        if self.homogeneous {
            // a homogeneous output contains only line fragments
            let lines = self
                .geoms
                .into_iter()
                .filter_map(|geom| match geom {
                    Geometry::LineString(line) => Some(line),
                    _ => None,
                })
                .collect();
            Some(Geometry::MultiLineString(MultiLineString::new(
                lines, self.dims, self.srid,
            )))
        } else {
            Some(Geometry::GeometryCollection(GeometryCollection::new(
                self.geoms, self.dims, self.srid,
            )))
        }
    }
}

impl<T: CoordFloat> ClipToOrdinateRange<T> for LineString<T> {
    type Output = Result<Option<Geometry<T>>, LinearRefError>;

    fn clip_to_ordinate_range(&self, ordinate: Ordinate, from: T, to: T) -> Self::Output {
        // Ensure 'from' is less than 'to'.
        let (from, to) = if to < from { (to, from) } else { (from, to) };

        let dims = self.dimensions();
        if ordinate.index() >= dims.ndims() {
            return Err(LinearRefError::OrdinateOutOfRange {
                ordinate,
                dimensions: dims,
            });
        }

        debug!(
            "clipping {} vertices on {} to [{:?}, {:?}]",
            self.coords().len(),
            ordinate,
            from,
            to
        );

        let mut out = ClipBuilder::new(dims, self.srid());
        // The fragment under construction. Absent exactly while the walk is in the
        // `Added::Nothing` state.
        let mut buf: Option<CoordSeq<T>> = None;
        let mut added = Added::Nothing;
        let mut prev = Coord::zero();
        let mut value_prev = T::zero();

        for (i, &curr) in self.coords().iter().enumerate() {
            let value = curr.get(ordinate);

            // Is this vertex inside the ordinate range?
            if value >= from && value <= to {
                if buf.is_none() {
                    // The previous vertex contributed nothing, so this starts a new
                    // fragment. When the segment enters across a boundary, open the
                    // fragment with an interpolated boundary coordinate. A vertex
                    // landing exactly on a boundary needs one only if the segment
                    // hopped in from beyond the far boundary.
                    let mut seq = CoordSeq::with_capacity(dims, 32);
                    let crosses_boundary = from != to
                        && ((value > from && value < to)
                            || (value == from && value_prev > to)
                            || (value == to && value_prev < from));
                    if i > 0 && crosses_boundary {
                        let boundary = if value_prev > to { to } else { from };
                        seq.push(interpolate_at_ordinate(
                            &prev, &curr, dims, ordinate, boundary,
                        )?);
                    }
                    buf = Some(seq);
                }
                if let Some(seq) = buf.as_mut() {
                    seq.push(curr);
                }
                added = if value == from || value == to {
                    Added::OnBoundary
                } else {
                    Added::Inside
                };
            } else {
                match added {
                    Added::Inside => {
                        // Transiting out of the range: close the fragment with an
                        // interpolated coordinate at the boundary being crossed.
                        let boundary = if value > to { to } else { from };
                        if let Some(seq) = &mut buf {
                            seq.push(interpolate_at_ordinate(
                                &prev, &curr, dims, ordinate, boundary,
                            )?);
                        }
                    }
                    Added::OnBoundary => {
                        // The previous vertex sat on a boundary. Leaving through the
                        // same side needs nothing; crossing the whole interval to
                        // the far side needs a coordinate at the far boundary.
                        if from != to
                            && ((value_prev == from && value > from)
                                || (value_prev == to && value < to))
                        {
                            let boundary = if value > to { to } else { from };
                            if let Some(seq) = &mut buf {
                                seq.push(interpolate_at_ordinate(
                                    &prev, &curr, dims, ordinate, boundary,
                                )?);
                            }
                        }
                    }
                    Added::Nothing if i > 0 && from != to => {
                        // An outside-to-outside segment can still straddle the whole
                        // interval; it contributes a two-coordinate fragment ordered
                        // along the direction of travel.
                        if value_prev < from && value > to {
                            let mut seq = CoordSeq::with_capacity(dims, 2);
                            seq.push(interpolate_at_ordinate(&curr, &prev, dims, ordinate, from)?);
                            seq.push(interpolate_at_ordinate(&curr, &prev, dims, ordinate, to)?);
                            buf = Some(seq);
                        } else if value_prev > to && value < from {
                            let mut seq = CoordSeq::with_capacity(dims, 2);
                            seq.push(interpolate_at_ordinate(&curr, &prev, dims, ordinate, to)?);
                            seq.push(interpolate_at_ordinate(&curr, &prev, dims, ordinate, from)?);
                            buf = Some(seq);
                        }
                    }
                    Added::Nothing => {}
                }

                // Save any extant fragment and reset.
                if let Some(seq) = buf.take() {
                    out.flush(seq);
                }
                added = Added::Nothing;
            }

            prev = curr;
            value_prev = value;
        }

        // Still a fragment left to be saved out.
        if let Some(seq) = buf.take() {
            out.flush(seq);
        }

        Ok(out.finish())
    }
}

impl<T: CoordFloat> ClipToOrdinateRange<T> for MultiLineString<T> {
    type Output = Result<Option<Geometry<T>>, LinearRefError>;

    /// Clip every member line and concatenate the fragments in member order. The
    /// container is a multilinestring iff every fragment is a line; any point
    /// fragment widens it to a geometry collection.
    fn clip_to_ordinate_range(&self, ordinate: Ordinate, from: T, to: T) -> Self::Output {
        if let [line] = self.lines() {
            return line.clip_to_ordinate_range(ordinate, from, to);
        }

        let mut out = ClipBuilder::new(self.dimensions(), self.srid());
        for line in self.iter() {
            if let Some(clipped) = line.clip_to_ordinate_range(ordinate, from, to)? {
                out.absorb(clipped);
            }
        }
        Ok(out.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use linref_types::coord;

    fn measured_line(coords: Vec<Coord<f64>>) -> LineString<f64> {
        LineString::new(CoordSeq::from_coords(Dimensions::XYZM, coords), Srid(4326))
    }

    fn fragment_lines(geometry: Geometry<f64>) -> Vec<CoordSeq<f64>> {
        match geometry {
            Geometry::MultiLineString(lines) => {
                lines.into_iter().map(LineString::into_coords).collect()
            }
            other => panic!("expected a MultiLineString, got {:?}", other),
        }
    }

    #[test]
    fn interior_clip_interpolates_both_ends() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 2.0, 7.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        let seq = &fragments[0];
        assert_eq!(seq.len(), 2);
        assert_relative_eq!(seq[0].x, 2.0);
        assert_relative_eq!(seq[0].m, 2.0);
        assert_relative_eq!(seq[1].x, 7.0);
        assert_relative_eq!(seq[1].m, 7.0);
    }

    #[test]
    fn entering_mid_segment_opens_with_boundary_coordinate() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 2.0, 12.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        assert_relative_eq!(fragments[0][0].m, 2.0);
        assert_relative_eq!(fragments[0][1].m, 10.0);
    }

    #[test]
    fn exiting_mid_segment_closes_with_boundary_coordinate() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, -2.0, 7.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        assert_relative_eq!(fragments[0][0].m, 0.0);
        assert_relative_eq!(fragments[0][1].m, 7.0);
    }

    #[test]
    fn straddling_segment_contributes_two_interpolated_coordinates() {
        let line = measured_line(vec![
            coord! { x: -5.0, y: 0.0, z: 0.0, m: -5.0 },
            coord! { x: 15.0, y: 0.0, z: 0.0, m: 15.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 0.0, 10.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        let seq = &fragments[0];
        assert_relative_eq!(seq[0].x, 0.0);
        assert_relative_eq!(seq[0].m, 0.0);
        assert_relative_eq!(seq[1].x, 10.0);
        assert_relative_eq!(seq[1].m, 10.0);
    }

    #[test]
    fn descending_straddle_orders_along_travel() {
        let line = measured_line(vec![
            coord! { x: 15.0, y: 0.0, z: 0.0, m: 15.0 },
            coord! { x: -5.0, y: 0.0, z: 0.0, m: -5.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 0.0, 10.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        // travelling downward, so the upper boundary comes first
        assert_relative_eq!(fragments[0][0].m, 10.0);
        assert_relative_eq!(fragments[0][1].m, 0.0);
    }

    #[test]
    fn each_crossing_segment_contributes_a_fragment() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 5.0, y: 0.0, z: 0.0, m: 5.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 15.0, y: 0.0, z: 0.0, m: 5.0 },
            coord! { x: 20.0, y: 0.0, z: 0.0, m: 0.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 2.0, 4.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 4);
        for seq in &fragments {
            assert_eq!(seq.len(), 2);
            for coord in seq.iter() {
                assert!(coord.m >= 2.0 && coord.m <= 4.0);
            }
        }
        // ascending segments carry the lower boundary first, descending ones the
        // upper
        assert_relative_eq!(fragments[0][0].m, 2.0);
        assert_relative_eq!(fragments[1][0].m, 4.0);
    }

    #[test]
    fn vertices_inside_are_kept_verbatim() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 3.0, y: 1.0, z: 0.0, m: 3.0 },
            coord! { x: 6.0, y: -1.0, z: 0.0, m: 6.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 2.0, 7.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        let seq = &fragments[0];
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[1], coord! { x: 3.0, y: 1.0, z: 0.0, m: 3.0 });
        assert_eq!(seq[2], coord! { x: 6.0, y: -1.0, z: 0.0, m: 6.0 });
    }

    #[test]
    fn boundary_touch_and_retreat_adds_no_interpolation() {
        // the middle vertex touches the upper boundary and the line retreats
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 5.0, y: 0.0, z: 0.0, m: 5.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 7.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 0.0, 5.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].len(), 2);
        assert_relative_eq!(fragments[0][1].m, 5.0);
    }

    #[test]
    fn boundary_touch_then_far_side_exit_interpolates() {
        // the first vertex sits on the lower boundary; the segment leaves across the
        // upper one
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 7.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 0.0, 5.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        let seq = &fragments[0];
        assert_eq!(seq.len(), 2);
        assert_relative_eq!(seq[0].m, 0.0);
        assert_relative_eq!(seq[1].m, 5.0);
        assert_relative_eq!(seq[1].x, 50.0 / 7.0);
    }

    #[test]
    fn boundary_hop_into_range_interpolates_far_boundary() {
        // the first vertex lies beyond the upper boundary and the second lands
        // exactly on the lower one
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 7.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 0.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 0.0, 5.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        let seq = &fragments[0];
        assert_relative_eq!(seq[0].m, 5.0);
        assert_relative_eq!(seq[1].m, 0.0);
    }

    #[test]
    fn degenerate_interval_emits_points_in_a_collection() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 5.0, y: 0.0, z: 0.0, m: 5.0 },
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, 5.0, 5.0)
            .unwrap()
            .unwrap();

        let collection = match clipped {
            Geometry::GeometryCollection(collection) => collection,
            other => panic!("expected a GeometryCollection, got {:?}", other),
        };
        assert_eq!(collection.len(), 1);
        let point = match &collection.geometries()[0] {
            Geometry::Point(point) => *point,
            other => panic!("expected a Point, got {:?}", other),
        };
        let coord = point.coord().unwrap();
        assert_relative_eq!(coord.x, 5.0);
        assert_eq!(coord.m, 5.0);
    }

    #[test]
    fn degenerate_interval_ignores_mid_segment_crossings() {
        // the ordinate passes through 5 strictly between the vertices
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        assert_eq!(line.clip_to_ordinate_range(Ordinate::M, 5.0, 5.0).unwrap(), None);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        assert_eq!(
            line.clip_to_ordinate_range(Ordinate::M, 7.0, 2.0).unwrap(),
            line.clip_to_ordinate_range(Ordinate::M, 2.0, 7.0).unwrap()
        );
    }

    #[test]
    fn fully_outside_line_clips_to_nothing() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        assert_eq!(
            line.clip_to_ordinate_range(Ordinate::M, 20.0, 30.0).unwrap(),
            None
        );
    }

    #[test]
    fn fully_inside_line_survives_whole() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        let clipped = line
            .clip_to_ordinate_range(Ordinate::M, -5.0, 15.0)
            .unwrap()
            .unwrap();
        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].coords(), line.coords().coords());
    }

    #[test]
    fn clipping_is_idempotent() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 5.0, y: 0.0, z: 0.0, m: 5.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 0.0 },
        ]);
        let once = line
            .clip_to_ordinate_range(Ordinate::M, 2.0, 4.0)
            .unwrap()
            .unwrap();
        let multi = match once.clone() {
            Geometry::MultiLineString(multi) => multi,
            other => panic!("expected a MultiLineString, got {:?}", other),
        };
        let twice = multi
            .clip_to_ordinate_range(Ordinate::M, 2.0, 4.0)
            .unwrap()
            .unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn clip_on_other_ordinates() {
        // clip on Y of a plain 2D line
        let line = LineString::new(
            CoordSeq::from_coords(
                Dimensions::XY,
                vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 }],
            ),
            Srid::UNKNOWN,
        );
        let clipped = line
            .clip_to_ordinate_range(Ordinate::Y, 2.0, 4.0)
            .unwrap()
            .unwrap();
        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 1);
        assert_relative_eq!(fragments[0][0].x, 2.0);
        assert_relative_eq!(fragments[0][1].x, 4.0);
    }

    #[test]
    fn unaddressable_ordinate_is_rejected() {
        let line = LineString::new(
            CoordSeq::from_coords(
                Dimensions::XYM,
                vec![
                    coord! { x: 0.0, y: 0.0, m: 0.0 },
                    coord! { x: 10.0, y: 0.0, m: 10.0 },
                ],
            ),
            Srid::UNKNOWN,
        );
        // the positionally-fourth M ordinate is beyond an XYM line's three dims
        assert_eq!(
            line.clip_to_ordinate_range(Ordinate::M, 2.0, 7.0),
            Err(LinearRefError::OrdinateOutOfRange {
                ordinate: Ordinate::M,
                dimensions: Dimensions::XYM,
            })
        );
    }

    #[test]
    fn multi_line_concatenates_member_fragments() {
        let multi = MultiLineString::new(
            vec![
                measured_line(vec![
                    coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
                    coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
                ]),
                measured_line(vec![
                    coord! { x: 0.0, y: 5.0, z: 0.0, m: 0.0 },
                    coord! { x: 10.0, y: 5.0, z: 0.0, m: 10.0 },
                ]),
            ],
            Dimensions::XYZM,
            Srid(4326),
        );
        let clipped = multi
            .clip_to_ordinate_range(Ordinate::M, 2.0, 7.0)
            .unwrap()
            .unwrap();

        let fragments = fragment_lines(clipped);
        assert_eq!(fragments.len(), 2);
        assert_relative_eq!(fragments[0][0].y, 0.0);
        assert_relative_eq!(fragments[1][0].y, 5.0);
    }

    #[test]
    fn multi_line_widens_when_any_member_produces_a_point() {
        let multi = MultiLineString::new(
            vec![
                measured_line(vec![
                    coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
                    coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
                ]),
                // this member only touches the degenerate interval at a vertex
                measured_line(vec![
                    coord! { x: 0.0, y: 5.0, z: 0.0, m: 0.0 },
                    coord! { x: 5.0, y: 5.0, z: 0.0, m: 5.0 },
                    coord! { x: 10.0, y: 5.0, z: 0.0, m: 0.0 },
                ]),
            ],
            Dimensions::XYZM,
            Srid(4326),
        );
        let clipped = multi
            .clip_to_ordinate_range(Ordinate::M, 5.0, 5.0)
            .unwrap()
            .unwrap();

        let collection = match clipped {
            Geometry::GeometryCollection(collection) => collection,
            other => panic!("expected a GeometryCollection, got {:?}", other),
        };
        assert_eq!(collection.len(), 1);
        assert!(matches!(collection.geometries()[0], Geometry::Point(_)));
    }

    #[test]
    fn empty_multi_line_clips_to_nothing() {
        let multi = MultiLineString::<f64>::empty(Dimensions::XYZM, Srid(4326));
        assert_eq!(
            multi.clip_to_ordinate_range(Ordinate::M, 0.0, 1.0).unwrap(),
            None
        );
    }

    #[test]
    fn single_member_multi_line_delegates() {
        let line = measured_line(vec![
            coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
            coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
        ]);
        let multi = MultiLineString::new(vec![line.clone()], Dimensions::XYZM, Srid(4326));
        assert_eq!(
            multi.clip_to_ordinate_range(Ordinate::M, 2.0, 7.0).unwrap(),
            line.clip_to_ordinate_range(Ordinate::M, 2.0, 7.0).unwrap()
        );
    }
}
