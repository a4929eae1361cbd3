//! Test a bbox against GeoJSON features read as JSON text.
use bbox_intersect::prelude::*;

fn main() -> Result<(), IntersectError> {
    let features = [
        r#"{"type": "Feature", "properties": {"name": "pier"},
            "geometry": {"type": "LineString", "coordinates": [[-5, 5], [15, 5]]}}"#,
        r#"{"type": "Feature", "properties": {"name": "buoy"},
            "geometry": {"type": "Point", "coordinates": [25, 25]}}"#,
        r#"{"type": "Feature", "properties": {"name": "island"},
            "geometry": {"type": "Polygon", "coordinates": [[[-20, -20], [20, -20], [20, 20], [-20, 20], [-20, -20]]]}}"#,
    ];

    let bbox = Bbox::from_flat(&[0.0, 0.0, 10.0, 10.0])?;
    for text in features {
        let feature: GeoJson = text.parse()?;
        println!("{} intersects {:?}: {}", feature.geometry().type_name(), bbox, test(&bbox, &feature)?);
    }
    Ok(())
}
