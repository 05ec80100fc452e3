pub(crate) mod coord;
pub(crate) mod coord_seq;
pub(crate) mod dimensions;
pub(crate) mod geometry_collection;
pub(crate) mod line_string;
pub(crate) mod multi_line_string;
pub(crate) mod multi_point;
pub(crate) mod ordinate;
pub(crate) mod point;
pub(crate) mod rect;
pub(crate) mod srid;

// re-export all the geometry variants:
pub use coord::Coord;
pub use coord_seq::CoordSeq;
pub use dimensions::Dimensions;
pub use geometry_collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use ordinate::Ordinate;
pub use point::Point;
pub use rect::Rect;
pub use srid::Srid;

use crate::{CoordNum, Error};

/// An enum representing any possible geometry type.
///
/// All geometry variants ([`Point`], [`LineString`], etc.) can be converted to a `Geometry`
/// using [`Into::into`]. Conversely, [`TryFrom::try_from`] can be used to convert a
/// [`Geometry`] _back_ to one of its specific enum members.
///
/// # Example
///
/// ```
/// use linref_types::{coord, Dimensions, Geometry, Point, Srid};
/// let p = Point::new(coord! { x: 1.0, y: 1.0 }, Dimensions::XY, Srid::UNKNOWN);
/// let pe: Geometry = p.into();
/// let pn = Point::try_from(pe).unwrap();
/// ```
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry<T: CoordNum = f64> {
    Point(Point<T>),
    LineString(LineString<T>),
    MultiPoint(MultiPoint<T>),
    MultiLineString(MultiLineString<T>),
    GeometryCollection(GeometryCollection<T>),
}

impl<T: CoordNum> Geometry<T> {
    /// The spatial reference tag carried by this geometry.
    pub fn srid(&self) -> Srid {
        match self {
            Geometry::Point(g) => g.srid(),
            Geometry::LineString(g) => g.srid(),
            Geometry::MultiPoint(g) => g.srid(),
            Geometry::MultiLineString(g) => g.srid(),
            Geometry::GeometryCollection(g) => g.srid(),
        }
    }

    /// The dimensionality descriptor shared by every coordinate of this geometry.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Geometry::Point(g) => g.dimensions(),
            Geometry::LineString(g) => g.dimensions(),
            Geometry::MultiPoint(g) => g.dimensions(),
            Geometry::MultiLineString(g) => g.dimensions(),
            Geometry::GeometryCollection(g) => g.dimensions(),
        }
    }

    pub fn has_z(&self) -> bool {
        self.dimensions().has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dimensions().has_m()
    }

    /// True when the geometry contains no coordinates at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// A human readable name for the variant, used in error reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Rebuild the geometry with the given dimensionality and spatial reference,
    /// restamping every nested member. Ordinates outside the new dimensionality are
    /// zeroed.
    pub(crate) fn restamped(self, dims: Dimensions, srid: Srid) -> Self {
        match self {
            Geometry::Point(g) => Geometry::Point(g.restamped(dims, srid)),
            Geometry::LineString(g) => Geometry::LineString(g.restamped(dims, srid)),
            Geometry::MultiPoint(g) => Geometry::MultiPoint(MultiPoint::new(
                g.into_iter().collect(),
                dims,
                srid,
            )),
            Geometry::MultiLineString(g) => Geometry::MultiLineString(MultiLineString::new(
                g.into_iter().collect(),
                dims,
                srid,
            )),
            Geometry::GeometryCollection(g) => Geometry::GeometryCollection(
                GeometryCollection::new(g.into_iter().collect(), dims, srid),
            ),
        }
    }
}

impl<T: CoordNum> From<Point<T>> for Geometry<T> {
    fn from(x: Point<T>) -> Self {
        Self::Point(x)
    }
}
impl<T: CoordNum> From<LineString<T>> for Geometry<T> {
    fn from(x: LineString<T>) -> Self {
        Self::LineString(x)
    }
}
impl<T: CoordNum> From<MultiPoint<T>> for Geometry<T> {
    fn from(x: MultiPoint<T>) -> Self {
        Self::MultiPoint(x)
    }
}
impl<T: CoordNum> From<MultiLineString<T>> for Geometry<T> {
    fn from(x: MultiLineString<T>) -> Self {
        Self::MultiLineString(x)
    }
}
impl<T: CoordNum> From<GeometryCollection<T>> for Geometry<T> {
    fn from(x: GeometryCollection<T>) -> Self {
        Self::GeometryCollection(x)
    }
}

macro_rules! try_from_geometry_impl {
    ($($type: ident),+ $(,)? ) => {
        $(
        /// Convert a Geometry enum into its inner type.
        ///
        /// Fails if the enum case does not match the type you are trying to convert it to.
        impl<T: CoordNum> TryFrom<Geometry<T>> for $type<T> {
            type Error = Error;

            fn try_from(geom: Geometry<T>) -> Result<Self, Self::Error> {
                match geom {
                    Geometry::$type(g) => Ok(g),
                    other => Err(Error::MismatchedGeometry {
                        expected: stringify!($type),
                        found: other.type_name(),
                    }),
                }
            }
        }
        )+
    };
}

try_from_geometry_impl!(
    Point,
    LineString,
    MultiPoint,
    MultiLineString,
    GeometryCollection,
);
