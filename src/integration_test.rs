#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;
    use serde_json::json;

    #[test]
    fn test_line_string_scenarios() {
        assert!(!test_json("[0, 0, 10, 10]", r#"{"type": "LineString", "coordinates": [[20, 20], [30, 30]]}"#).unwrap());
        assert!(test_json("[0, 0, 10, 10]", r#"{"type": "LineString", "coordinates": [[-5, 5], [15, 5]]}"#).unwrap());
    }

    #[test]
    fn test_polygon_scenarios() {
        let exterior = json!([[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]);
        let hole = json!([[2, 2], [4, 2], [4, 4], [2, 4], [2, 2]]);
        let tester = BboxTest::default();

        let solid = json!({"type": "Polygon", "coordinates": [exterior]});
        assert!(tester.test_value(&json!([2, 2, 4, 4]), &solid).unwrap());

        let holed = json!({"type": "Polygon", "coordinates": [exterior, hole]});
        assert!(!tester.test_value(&json!([2.1, 2.1, 3.9, 3.9]), &holed).unwrap());
        // Box in the solid part, away from the hole
        assert!(tester.test_value(&json!([6, 6, 8, 8]), &holed).unwrap());
    }

    #[test]
    fn test_repeated_vertices_below_box() {
        let line = r#"{"type": "LineString", "coordinates": [[-5, -5], [-5, -5]]}"#;
        assert!(!test_json("[0, 0, 10, 10]", line).unwrap());
        let polygon = r#"{"type": "Polygon", "coordinates": [[[-20, -20], [-20, -20], [-15, -20], [-15, -15], [-20, -20]]]}"#;
        assert!(!test_json("[0, 0, 10, 10]", polygon).unwrap());
    }

    #[test]
    fn test_corner_pair_bbox_matches_flat() {
        let geometry = r#"{"type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]}"#;
        assert_eq!(
            test_json("[2, 2, 4, 4]", geometry).unwrap(),
            test_json("[[2, 2], [4, 4]]", geometry).unwrap()
        );
    }

    #[test]
    fn test_feature_input() {
        let feature = r#"{
            "type": "Feature",
            "properties": {"name": "plaza"},
            "geometry": {"type": "MultiPoint", "coordinates": [[50, 50], [3, 3]]}
        }"#;
        assert!(test_json("[0, 0, 10, 10]", feature).unwrap());
        assert!(!test_json("[4, 4, 10, 10]", feature).unwrap());
    }

    #[test]
    fn test_geometry_collection_input() {
        let collection = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [100, 100]},
                {"type": "GeometryCollection", "geometries": [
                    {"type": "MultiLineString", "coordinates": [[[5, -5], [5, 15]]]}
                ]}
            ]
        });
        assert!(BboxTest::default().test_value(&json!([0, 0, 10, 10]), &collection).unwrap());

        let shallow = BboxTest::new(Options::default().max_depth(1));
        let result = shallow.test_value(&json!([0, 0, 10, 10]), &collection);
        assert!(matches!(result, Err(IntersectError::DepthExceeded { limit: 1 })));
    }

    #[test]
    fn test_three_dimensional_input() {
        let line = r#"{"type": "LineString", "coordinates": [[-1, 0.5, 0.5], [2, 0.5, 0.5]]}"#;
        assert!(test_json("[0, 0, 0, 1, 1, 1]", line).unwrap());
        assert!(test_json("[[0, 0, 0], [1, 1, 1]]", line).unwrap());
        assert!(!test_json("[0, 0, 5, 1, 1, 6]", line).unwrap());
    }

    #[test]
    fn test_error_cases() {
        let point = r#"{"type": "Point", "coordinates": [1, 1]}"#;
        assert!(matches!(test_json("[10, 0, 0, 10]", point), Err(IntersectError::MalformedInput(_))));
        assert!(matches!(test_json("[0, 0, 10]", point), Err(IntersectError::MalformedInput(_))));
        assert!(matches!(test_json("[[0, 0], [1, 1, 1]]", point), Err(IntersectError::MalformedInput(_))));
        assert!(matches!(
            test_json("[0, 0, 10, 10]", r#"{"type": "Triangle", "coordinates": []}"#),
            Err(IntersectError::UnsupportedGeometryType(t)) if t == "Triangle"
        ));
        assert!(matches!(test_json("[0, 0, 10, 10", point), Err(IntersectError::Json(_))));
    }

    #[test]
    fn test_box_edges_strategy_end_to_end() {
        let tester = BboxTest::new(Options::default().segment_test(SegmentTest::BoxEdges));
        let polygon = r#"{"type": "Polygon", "coordinates": [[[-5, 4], [15, 4], [15, 6], [-5, 6], [-5, 4]]]}"#;
        assert!(tester.test_json("[0, 0, 10, 10]", polygon).unwrap());
        assert!(!tester.test_json("[20, 20, 30, 30]", polygon).unwrap());
    }

    #[test]
    fn test_options_from_json() {
        let options: Options = serde_json::from_str(r#"{"clip_to_segment": true, "max_depth": 2}"#).unwrap();
        let tester = BboxTest::new(options);
        assert!(tester.options().clip_to_segment);
        let line = r#"{"type": "LineString", "coordinates": [[30, 30], [20, 20]]}"#;
        assert!(!tester.test_json("[0, 0, 10, 10]", line).unwrap());
        assert!(test_json("[0, 0, 10, 10]", line).unwrap());
    }
}
