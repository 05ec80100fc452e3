use crate::{CoordNum, Dimensions, Geometry, Srid};

/// A heterogeneous collection of [`Geometry`] members sharing one dimensionality and
/// spatial reference.
///
/// This is the widened output shell produced when a clip yields mixed line and point
/// fragments. Members entering the collection are restamped with the parent's
/// [`Dimensions`] and [`Srid`], recursively.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryCollection<T: CoordNum = f64> {
    geoms: Vec<Geometry<T>>,
    dims: Dimensions,
    srid: Srid,
}

impl<T: CoordNum> GeometryCollection<T> {
    /// Instantiate Self from the raw content value, restamping every member.
    pub fn new(geoms: Vec<Geometry<T>>, dims: Dimensions, srid: Srid) -> Self {
        Self {
            geoms: geoms
                .into_iter()
                .map(|g| g.restamped(dims, srid))
                .collect(),
            dims,
            srid,
        }
    }

    /// The empty collection.
    pub fn empty(dims: Dimensions, srid: Srid) -> Self {
        Self {
            geoms: Vec::new(),
            dims,
            srid,
        }
    }

    /// Append a member, restamping it with the collection's dimensionality and SRID.
    pub fn push(&mut self, geom: Geometry<T>) {
        self.geoms.push(geom.restamped(self.dims, self.srid));
    }

    pub fn geometries(&self) -> &[Geometry<T>] {
        &self.geoms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Geometry<T>> {
        self.geoms.iter()
    }

    pub fn len(&self) -> usize {
        self.geoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geoms.is_empty()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn srid(&self) -> Srid {
        self.srid
    }

    pub fn has_z(&self) -> bool {
        self.dims.has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dims.has_m()
    }
}

impl<T: CoordNum> IntoIterator for GeometryCollection<T> {
    type Item = Geometry<T>;
    type IntoIter = ::std::vec::IntoIter<Geometry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.geoms.into_iter()
    }
}

impl<'a, T: CoordNum> IntoIterator for &'a GeometryCollection<T> {
    type Item = &'a Geometry<T>;
    type IntoIter = ::std::slice::Iter<'a, Geometry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.geoms.iter()
    }
}
