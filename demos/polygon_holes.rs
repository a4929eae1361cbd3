//! Boxes inside, across and within the hole of a polygon.
use bbox_intersect::prelude::*;

fn main() {
    let polygon = Geometry::Polygon {
        coordinates: vec![
            vec![vec![0.0, 0.0], vec![10.0, 0.0], vec![10.0, 10.0], vec![0.0, 10.0], vec![0.0, 0.0]],
            vec![vec![2.0, 2.0], vec![4.0, 2.0], vec![4.0, 4.0], vec![2.0, 4.0], vec![2.0, 2.0]],
        ],
    };
    let tester = BboxTest::default();

    for values in [[6.0, 6.0, 8.0, 8.0], [3.0, 3.0, 5.0, 5.0], [2.1, 2.1, 3.9, 3.9], [12.0, 12.0, 14.0, 14.0]] {
        let Ok(bbox) = Bbox::from_flat(&values) else {
            continue;
        };
        match tester.test_geometry(&bbox, &polygon) {
            Ok(hit) => println!("{values:?}: {hit}"),
            Err(e) => println!("{values:?}: {e}"),
        }
    }
}
