//! Print the geometry-lesson traces: hull scan, polygon area fan,
//! point-in-polygon verdicts, half-plane intersection vertices.

use blackboard::api::{
    area_trace, graham_scan, point_in_polygon, HullAction, Region, RegionShape,
};
use blackboard::fixtures;
use blackboard::Vec2;

fn main() {
    let cloud = fixtures::lesson_points();
    let hull = graham_scan(&cloud.points).expect("lesson cloud is non-degenerate");
    println!("hull anchor={} frames={}", hull.anchor, hull.frames.len());
    for frame in &hull.frames {
        let tag = match frame.action {
            HullAction::Anchor => "anchor".to_string(),
            HullAction::Push { point } => format!("push {point}"),
            HullAction::Pop { point, turn } => format!("pop {point} (cross {turn:.1})"),
        };
        let stack: Vec<String> = frame.stack.iter().map(|i| i.to_string()).collect();
        println!("  {tag:<18} stack=[{}]", stack.join(","));
    }
    println!("hull vertices: {:?}", hull.hull);

    let concave = fixtures::lesson_polygon_concave();
    let trace = area_trace(&concave.verts).expect("octagon");
    for (i, term) in trace.terms.iter().enumerate() {
        println!("area term {i}: {:+.1}", term.signed);
    }
    println!("area={} (signed {:+})", trace.area, trace.signed_area);
    println!(
        "probe {:?} inside={}",
        concave.probe,
        point_in_polygon(&concave.verts, concave.probe)
    );

    let hexagon = fixtures::lesson_polygon_convex();
    let region = Region::from_convex_polygon(&hexagon.verts).expect("convex hexagon");
    match region.shape() {
        RegionShape::Bounded(verts) => {
            println!("half-plane intersection: {} vertices", verts.len());
            for v in verts {
                println!("  ({:.2}, {:.2})", v.x, v.y);
            }
        }
        other => println!("unexpected region shape {other:?}"),
    }
    for probe in [
        Vec2::new(2.0, 2.0),
        Vec2::new(4.0, 3.0),
        Vec2::new(0.0, 2.0),
        Vec2::new(6.0, 1.0),
    ] {
        println!(
            "  probe ({}, {}) inside={}",
            probe.x,
            probe.y,
            region.contains_eps(probe, 0.0)
        );
    }
}
