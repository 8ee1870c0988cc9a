use globe_paths::projection::{mercator, sphere};
use globe_paths::{
    build_continuous_path, continuous_mercator_path, great_circle_arc, line_arc_with, ArcOptions,
    GeneratorOptions, GeoPoint, PointGeometry, Result, SlerpGenerator,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("globe-paths - Coordinate Transform Walkthrough\n");

    let cities = vec![
        ("Montreal, QC", GeoPoint::from_lat_lon(45.5017, -73.5673)),
        ("Paris, FR", GeoPoint::from_lat_lon(48.8566, 2.3522)),
        ("Tokyo, JP", GeoPoint::from_lat_lon(35.6762, 139.6503)),
        ("Vancouver, BC", GeoPoint::from_lat_lon(49.2827, -123.1207)),
        ("Auckland, NZ", GeoPoint::from_lat_lon(-36.8485, 174.7633)),
    ];

    println!("1. Globe positions (unit sphere):");
    for (name, point) in &cities {
        let pos = sphere::position_from_geo(*point, 1.0);
        println!("   {:<14} x={:+.4} y={:+.4} z={:+.4}", name, pos.x, pos.y, pos.z);
    }

    println!("\n2. Web Mercator:");
    for (name, point) in &cities {
        let planar = mercator::project(*point);
        println!("   {:<14} x={:.2} y={:.2}", name, planar.x, planar.y);
    }

    let options = ArcOptions::from_json(r#"{"segments": 16}"#)?;
    let generator = SlerpGenerator::new();

    println!("\n3. Arcs between neighbouring cities:");
    for pair in cities.windows(2) {
        let (from_name, from) = pair[0];
        let (to_name, to) = pair[1];

        let linear = line_arc_with(from, to, &options);
        let npoints = options.segments + 1;
        let great_circle =
            match great_circle_arc(&generator, from.lat, from.lon, to.lat, to.lon, npoints) {
                Ok(positions) => positions,
                Err(e) => {
                    println!("   Great circle unavailable: {}", e);
                    Vec::new()
                }
            };

        println!(
            "   {} -> {}: linear {} points, great circle {} points",
            from_name,
            to_name,
            linear.len(),
            great_circle.len()
        );
    }

    println!("\n4. Date-line route (Tokyo -> Vancouver) on a flat map:");
    let route: Vec<[f64; 2]> = [139.65, 160.0, 175.0, -170.0, -150.0, -123.12]
        .iter()
        .zip([35.68, 42.0, 48.0, 52.0, 51.0, 49.28])
        .map(|(&lon, lat)| [lon, lat])
        .collect();

    let continuous = build_continuous_path(&route);
    let planar = continuous_mercator_path(&route);
    for ((raw, adjusted), xy) in route.iter().zip(&continuous).zip(&planar) {
        println!(
            "   lon {:>8.2} -> {:>8.2}   x={:.0} y={:.0}",
            raw[0], adjusted[0], xy.x, xy.y
        );
    }

    println!("\n5. Generator request:");
    let (_, start) = cities[0];
    let (_, end) = cities[1];
    println!("   start:   {}", serde_json::to_string(&PointGeometry::from(start))?);
    println!("   end:     {}", serde_json::to_string(&PointGeometry::from(end))?);
    println!("   options: {}", serde_json::to_string(&GeneratorOptions { npoints: 32 })?);

    Ok(())
}
