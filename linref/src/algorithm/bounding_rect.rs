use linref_types::{Coord, CoordNum, Geometry, GeometryCollection, LineString, MultiLineString,
    MultiPoint, Point, Rect};

/// Calculation of the bounding rectangle of a geometry.
///
/// Only the `x` and `y` ordinates participate; measures and elevations do not affect
/// the envelope.
pub trait BoundingRect<T: CoordNum> {
    type Output;

    /// Return the bounding rectangle of a geometry
    ///
    /// # Examples
    ///
    /// ```
    /// use linref::{coord, BoundingRect, CoordSeq, Dimensions, LineString, Srid};
    ///
    /// let line = LineString::new(
    ///     CoordSeq::from_coords(
    ///         Dimensions::XY,
    ///         vec![
    ///             coord! { x: 40.02, y: 116.34 },
    ///             coord! { x: 42.02, y: 116.34 },
    ///             coord! { x: 42.02, y: 118.34 },
    ///         ],
    ///     ),
    ///     Srid::UNKNOWN,
    /// );
    ///
    /// let rect = line.bounding_rect().unwrap();
    /// assert_eq!(rect.min().x, 40.02);
    /// assert_eq!(rect.max().y, 118.34);
    /// ```
    fn bounding_rect(&self) -> Self::Output;
}

fn get_bounding_rect<T, I>(coords: I) -> Option<Rect<T>>
where
    T: CoordNum,
    I: IntoIterator<Item = Coord<T>>,
{
    let mut iter = coords.into_iter();
    iter.next().map(|first| {
        iter.fold(Rect::new(first, first), |rect, coord| {
            rect.expanded_to_include(coord)
        })
    })
}

impl<T: CoordNum> BoundingRect<T> for Point<T> {
    type Output = Option<Rect<T>>;

    fn bounding_rect(&self) -> Self::Output {
        self.coord().map(|c| Rect::new(c, c))
    }
}

impl<T: CoordNum> BoundingRect<T> for LineString<T> {
    type Output = Option<Rect<T>>;

    fn bounding_rect(&self) -> Self::Output {
        get_bounding_rect(self.coords().iter().copied())
    }
}

impl<T: CoordNum> BoundingRect<T> for MultiPoint<T> {
    type Output = Option<Rect<T>>;

    fn bounding_rect(&self) -> Self::Output {
        get_bounding_rect(self.iter().filter_map(Point::coord))
    }
}

impl<T: CoordNum> BoundingRect<T> for MultiLineString<T> {
    type Output = Option<Rect<T>>;

    fn bounding_rect(&self) -> Self::Output {
        get_bounding_rect(self.iter().flat_map(|line| line.coords().iter().copied()))
    }
}

impl<T: CoordNum> BoundingRect<T> for GeometryCollection<T> {
    type Output = Option<Rect<T>>;

    fn bounding_rect(&self) -> Self::Output {
        get_bounding_rect(
            self.iter()
                .filter_map(Geometry::bounding_rect)
                .flat_map(|rect| [rect.min(), rect.max()]),
        )
    }
}

impl<T: CoordNum> BoundingRect<T> for Geometry<T> {
    type Output = Option<Rect<T>>;

    fn bounding_rect(&self) -> Self::Output {
        match self {
            Geometry::Point(g) => g.bounding_rect(),
            Geometry::LineString(g) => g.bounding_rect(),
            Geometry::MultiPoint(g) => g.bounding_rect(),
            Geometry::MultiLineString(g) => g.bounding_rect(),
            Geometry::GeometryCollection(g) => g.bounding_rect(),
        }
    }
}
