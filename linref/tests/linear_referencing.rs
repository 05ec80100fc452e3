use approx::assert_relative_eq;
use linref::{
    coord, ClipToOrdinateRange, Coord, CoordSeq, Dimensions, Geometry, LineString, LocateAlong,
    MultiLineString, Ordinate, Srid,
};

fn xym_line(coords: Vec<Coord<f64>>) -> LineString<f64> {
    LineString::new(CoordSeq::from_coords(Dimensions::XYM, coords), Srid(4326))
}

fn xyzm_line(coords: Vec<Coord<f64>>) -> LineString<f64> {
    LineString::new(CoordSeq::from_coords(Dimensions::XYZM, coords), Srid(4326))
}

fn fragments(clipped: Geometry<f64>) -> Vec<Geometry<f64>> {
    match clipped {
        Geometry::MultiLineString(lines) => {
            lines.into_iter().map(Geometry::LineString).collect()
        }
        Geometry::GeometryCollection(collection) => collection.into_iter().collect(),
        other => panic!("expected a collection output, got {:?}", other),
    }
}

#[test]
fn simple_crossing() {
    let line = xym_line(vec![
        coord! { x: 0.0, y: 0.0, m: 0.0 },
        coord! { x: 10.0, y: 0.0, m: 10.0 },
    ]);

    let hits = line.locate_along(3.0, 0.0);
    assert_eq!(hits.len(), 1);
    let hit = hits.points()[0].coord().unwrap();
    assert_relative_eq!(hit.x, 3.0);
    assert_relative_eq!(hit.y, 0.0);
    assert_eq!(hit.m, 3.0);
}

#[test]
fn offset_to_the_left() {
    let line = xym_line(vec![
        coord! { x: 0.0, y: 0.0, m: 0.0 },
        coord! { x: 10.0, y: 0.0, m: 10.0 },
    ]);

    // travel along +X; left is +Y
    let hits = line.locate_along(5.0, 2.0);
    assert_eq!(hits.len(), 1);
    let hit = hits.points()[0].coord().unwrap();
    assert_relative_eq!(hit.x, 5.0);
    assert_relative_eq!(hit.y, 2.0);
    assert_eq!(hit.m, 5.0);
}

#[test]
fn range_clip_entering() {
    let line = xyzm_line(vec![
        coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
        coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
    ]);

    let clipped = line
        .clip_to_ordinate_range(Ordinate::M, 2.0, 7.0)
        .unwrap()
        .unwrap();
    assert!(matches!(clipped, Geometry::MultiLineString(_)));

    let parts = fragments(clipped);
    assert_eq!(parts.len(), 1);
    let line = match &parts[0] {
        Geometry::LineString(line) => line,
        other => panic!("expected a LineString fragment, got {:?}", other),
    };
    assert_eq!(line.coords().len(), 2);
    assert_relative_eq!(line.coords()[0].x, 2.0);
    assert_relative_eq!(line.coords()[0].m, 2.0);
    assert_relative_eq!(line.coords()[1].x, 7.0);
    assert_relative_eq!(line.coords()[1].m, 7.0);
}

#[test]
fn range_clip_straddling() {
    let line = xyzm_line(vec![
        coord! { x: -5.0, y: 0.0, z: 0.0, m: -5.0 },
        coord! { x: 15.0, y: 0.0, z: 0.0, m: 15.0 },
    ]);

    let clipped = line
        .clip_to_ordinate_range(Ordinate::M, 0.0, 10.0)
        .unwrap()
        .unwrap();
    assert!(matches!(clipped, Geometry::MultiLineString(_)));

    let parts = fragments(clipped);
    assert_eq!(parts.len(), 1);
    let line = match &parts[0] {
        Geometry::LineString(line) => line,
        other => panic!("expected a LineString fragment, got {:?}", other),
    };
    assert_relative_eq!(line.coords()[0].x, 0.0);
    assert_relative_eq!(line.coords()[0].m, 0.0);
    assert_relative_eq!(line.coords()[1].x, 10.0);
    assert_relative_eq!(line.coords()[1].m, 10.0);
}

#[test]
fn boundary_touch_without_entry() {
    let line = xyzm_line(vec![
        coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
        coord! { x: 5.0, y: 0.0, z: 0.0, m: 5.0 },
        coord! { x: 0.0, y: 0.0, z: 0.0, m: 10.0 },
    ]);

    let clipped = line
        .clip_to_ordinate_range(Ordinate::M, 5.0, 5.0)
        .unwrap()
        .unwrap();
    assert!(matches!(clipped, Geometry::GeometryCollection(_)));

    let parts = fragments(clipped);
    assert_eq!(parts.len(), 1);
    let point = match &parts[0] {
        Geometry::Point(point) => *point,
        other => panic!("expected a Point fragment, got {:?}", other),
    };
    let coord = point.coord().unwrap();
    assert_relative_eq!(coord.x, 5.0);
    assert_eq!(coord.m, 5.0);
}

#[test]
fn multi_enter() {
    // M rises and falls across the interval four times; every crossing segment
    // leaves its own fragment
    let line = xyzm_line(vec![
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
    assert!(matches!(clipped, Geometry::MultiLineString(_)));

    let parts = fragments(clipped);
    assert_eq!(parts.len(), 4);
    for part in &parts {
        let line = match part {
            Geometry::LineString(line) => line,
            other => panic!("expected a LineString fragment, got {:?}", other),
        };
        for coord in line.coords().iter() {
            assert!(coord.m >= 2.0 && coord.m <= 4.0);
        }
    }
}

#[test]
fn interval_swap_invariance() {
    let line = xyzm_line(vec![
        coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
        coord! { x: 5.0, y: 0.0, z: 0.0, m: 5.0 },
        coord! { x: 10.0, y: 0.0, z: 0.0, m: 0.0 },
    ]);
    assert_eq!(
        line.clip_to_ordinate_range(Ordinate::M, 1.0, 4.0).unwrap(),
        line.clip_to_ordinate_range(Ordinate::M, 4.0, 1.0).unwrap()
    );
}

#[test]
fn clip_idempotence() {
    let line = xyzm_line(vec![
        coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
        coord! { x: 5.0, y: 0.0, z: 0.0, m: 5.0 },
        coord! { x: 10.0, y: 0.0, z: 0.0, m: 0.0 },
        coord! { x: 15.0, y: 0.0, z: 0.0, m: 5.0 },
    ]);
    let once = line
        .clip_to_ordinate_range(Ordinate::M, 1.0, 4.0)
        .unwrap()
        .unwrap();
    let multi = MultiLineString::try_from(once.clone()).unwrap();
    let twice = multi
        .clip_to_ordinate_range(Ordinate::M, 1.0, 4.0)
        .unwrap()
        .unwrap();
    assert_eq!(once, twice);
}

#[test]
fn empty_clip_is_none() {
    let line = xyzm_line(vec![
        coord! { x: 0.0, y: 0.0, z: 0.0, m: 0.0 },
        coord! { x: 10.0, y: 0.0, z: 0.0, m: 10.0 },
    ]);
    assert_eq!(
        line.clip_to_ordinate_range(Ordinate::M, 11.0, 12.0).unwrap(),
        None
    );
}

#[test]
fn every_fragment_vertex_stays_in_range() {
    let line = xyzm_line(vec![
        coord! { x: 0.0, y: 0.0, z: 0.0, m: 3.0 },
        coord! { x: 2.0, y: 1.0, z: 0.0, m: 9.0 },
        coord! { x: 4.0, y: 0.0, z: 0.0, m: 1.0 },
        coord! { x: 6.0, y: 2.0, z: 0.0, m: 6.0 },
        coord! { x: 8.0, y: 3.0, z: 0.0, m: 12.0 },
    ]);
    let clipped = line
        .clip_to_ordinate_range(Ordinate::M, 2.0, 8.0)
        .unwrap()
        .unwrap();

    for part in fragments(clipped) {
        if let Geometry::LineString(line) = part {
            assert!(line.coords().len() >= 2);
            for coord in line.coords().iter() {
                assert!(coord.m >= 2.0 && coord.m <= 8.0);
            }
        }
    }
}

#[test]
fn locate_along_geometry_propagates_srid() {
    let line = xym_line(vec![
        coord! { x: 0.0, y: 0.0, m: 0.0 },
        coord! { x: 10.0, y: 0.0, m: 10.0 },
    ]);
    let geometry: Geometry<f64> = line.into();
    let located = geometry.locate_along(5.0, 0.0).unwrap();
    assert_eq!(located.srid(), Srid(4326));
    assert_eq!(located.dimensions(), Dimensions::XYM);
}
