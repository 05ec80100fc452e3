/// Creates a [`Coord`](crate::Coord) from the given scalars.
///
/// ```txt
/// coord! { x: <number>, y: <number> }
/// coord! { x: <number>, y: <number>, z: <number> }
/// coord! { x: <number>, y: <number>, m: <number> }
/// coord! { x: <number>, y: <number>, z: <number>, m: <number> }
/// ```
///
/// Ordinates that are not supplied are zero; whether they are meaningful at all
/// is decided by the [`Dimensions`](crate::Dimensions) of the containing sequence
/// or geometry.
///
/// # Examples
///
/// ```
/// use linref_types::coord;
///
/// let c = coord! { x: 181.2, y: 51.79, m: 12.5 };
///
/// assert_eq!(c.x, 181.2);
/// assert_eq!(c.m, 12.5);
/// assert_eq!(c.z, 0.0);
/// ```
#[macro_export]
macro_rules! coord {
    (x: $x:expr, y: $y:expr $(,)* ) => {
        $crate::Coord::xy($x, $y)
    };
    (x: $x:expr, y: $y:expr, z: $z:expr $(,)* ) => {
        $crate::Coord::xyz($x, $y, $z)
    };
    (x: $x:expr, y: $y:expr, m: $m:expr $(,)* ) => {
        $crate::Coord::xym($x, $y, $m)
    };
    (x: $x:expr, y: $y:expr, z: $z:expr, m: $m:expr $(,)* ) => {
        $crate::Coord::xyzm($x, $y, $z, $m)
    };
}
