/// Calculate the axis-aligned bounding rectangle of a geometry.
pub mod bounding_rect;
/// Clip line geometries to the portions whose chosen ordinate lies within a range.
pub mod clip_to_ordinate_range;
/// Interpolate a coordinate between two others at a target ordinate value.
pub mod interpolate_ordinate;
/// Locate the points along a measured geometry at a given measure value.
pub mod locate_along;

pub use bounding_rect::BoundingRect;
pub use clip_to_ordinate_range::ClipToOrdinateRange;
pub use interpolate_ordinate::interpolate_at_ordinate;
pub use locate_along::{measured_by_index, LocateAlong};
