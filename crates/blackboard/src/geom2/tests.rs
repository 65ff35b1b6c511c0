use nalgebra::{vector, Vector2};
use proptest::prelude::*;

use super::*;
use crate::fixtures;

#[test]
fn dot_and_cross_pinned_values() {
    // The lesson figures annotate these exact numbers.
    assert_eq!(dot(vector![4.0, 3.0], vector![6.0, 1.0]), 27.0);
    assert_eq!(cross(vector![4.0, 2.0], vector![2.0, 4.0]), 12.0);
    // Positive cross = counterclockwise turn from the first vector.
    assert!(cross(vector![1.0, 0.0], vector![0.0, 1.0]) > 0.0);
    assert!(cross(vector![0.0, 1.0], vector![1.0, 0.0]) < 0.0);
}

#[test]
fn angle_between_basics() {
    let th = angle_between(vector![1.0, 0.0], vector![0.0, 2.0]).unwrap();
    assert!((th - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert_eq!(
        angle_between(vector![0.0, 0.0], vector![1.0, 0.0]),
        Err(GeomError::DegenerateVector)
    );
}

#[test]
fn rotate_about_matches_lesson_figure() {
    // P=(5,3) rotated 60° about O=(3,3).
    let q = rotate_about(
        vector![5.0, 3.0],
        vector![3.0, 3.0],
        std::f64::consts::FRAC_PI_3,
    );
    assert!((q - vector![4.0, 3.0 + 3.0f64.sqrt()]).norm() < 1e-12);
}

#[test]
fn hull_of_lesson_cloud_is_convex_and_contains_all_points() {
    let lesson = fixtures::lesson_points();
    let trace = graham_scan(&lesson.points).unwrap();
    let hull: Vec<Vector2<f64>> = trace.hull.iter().map(|&i| lesson.points[i]).collect();
    // Strictly counterclockwise, no collinear triple survives.
    for k in 0..hull.len() {
        let a = hull[k];
        let b = hull[(k + 1) % hull.len()];
        let c = hull[(k + 2) % hull.len()];
        assert!(orient(a, b, c) > 0.0, "hull turn at {k} not strict CCW");
    }
    let region = Region::from_convex_polygon(&hull).unwrap();
    for &p in &lesson.points {
        assert!(region.contains_eps(p, 1e-9));
    }
    assert_eq!(trace.hull[0], trace.anchor);
    // First frame seeds the stack with the anchor.
    assert_eq!(trace.frames[0].stack, vec![trace.anchor]);
}

#[test]
fn hull_pops_collinear_boundary_points() {
    // Midpoint of the bottom edge is popped (cross == 0 convention).
    let pts = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
    ];
    let trace = graham_scan(&pts).unwrap();
    assert_eq!(trace.hull.len(), 4);
    assert!(!trace.hull.contains(&2));
    assert!(trace
        .frames
        .iter()
        .any(|f| matches!(f.action, HullAction::Pop { point: 2, .. })));
}

#[test]
fn hull_degenerate_inputs_are_distinguished() {
    let two = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
    assert_eq!(
        graham_scan(&two).unwrap_err(),
        GeomError::TooFewPoints { needed: 3, got: 2 }
    );
    let line = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    assert_eq!(graham_scan(&line).unwrap_err(), GeomError::Collinear);
}

#[test]
fn winding_number_on_lesson_polygons() {
    let concave = fixtures::lesson_polygon_concave();
    // The lesson's probe point sits left of the deep V, inside.
    assert!(point_in_polygon(&concave.verts, concave.probe));
    // A point in the V notch is outside despite being inside the bbox.
    assert!(!point_in_polygon(&concave.verts, vector![4.0, 4.0]));
    assert!(!point_in_polygon(&concave.verts, vector![20.0, 20.0]));

    let convex = fixtures::lesson_polygon_convex();
    let c = centroid(&convex.verts).unwrap();
    assert!(point_in_polygon(&convex.verts, c));
}

#[test]
fn winding_number_boundary_convention() {
    // CCW unit square: bottom/left boundary inside, top/right outside.
    let square = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!(point_in_polygon(&square, vector![0.0, 0.5]));
    assert!(point_in_polygon(&square, vector![0.5, 0.0]));
    assert!(!point_in_polygon(&square, vector![1.0, 0.5]));
    assert!(!point_in_polygon(&square, vector![0.5, 1.0]));
    assert!(point_in_polygon(&square, vector![0.0, 0.0]));
    assert!(!point_in_polygon(&square, vector![1.0, 1.0]));
}

#[test]
fn area_trace_sums_to_shoelace() {
    let concave = fixtures::lesson_polygon_concave();
    let trace = area_trace(&concave.verts).unwrap();
    assert!((trace.signed_area - signed_area(&concave.verts)).abs() < 1e-12);
    assert_eq!(trace.area, 16.0);
    // The notch produces at least one negative fan term.
    assert!(trace.terms.iter().any(|t| t.signed < 0.0));

    let convex = fixtures::lesson_polygon_convex();
    assert!((area(&convex.verts) - 13.5).abs() < 1e-12);
    assert_eq!(
        area_trace(&[vector![0.0, 0.0], vector![1.0, 0.0]]).unwrap_err(),
        GeomError::TooFewPoints { needed: 3, got: 2 }
    );
}

#[test]
fn segment_projection_and_distance() {
    // Lesson values: P=(2,5) against segment (1,1)-(5,4).
    let proj = project_onto_segment(vector![2.0, 5.0], vector![1.0, 1.0], vector![5.0, 4.0]);
    assert!((proj.t - 0.64).abs() < 1e-12);
    assert!((proj.dist - 2.6).abs() < 1e-12);
    // Projection past an endpoint clamps to it.
    let past = project_onto_segment(vector![10.0, 10.0], vector![0.0, 0.0], vector![1.0, 0.0]);
    assert_eq!(past.t, 1.0);
    assert!((past.foot - vector![1.0, 0.0]).norm() < 1e-12);
    // Degenerate segment falls back to point distance.
    let degen = project_onto_segment(vector![3.0, 4.0], vector![0.0, 0.0], vector![0.0, 0.0]);
    assert_eq!(degen.dist, 5.0);
}

#[test]
fn line_intersection_area_ratio() {
    let cfg = GeomCfg::default();
    // Lesson figure: AB=(1,1)->(5,4), CD=(1,4)->(5,2) meet at t=0.6.
    let hit = line_intersection(
        vector![1.0, 1.0],
        vector![5.0, 4.0],
        vector![1.0, 4.0],
        vector![5.0, 2.0],
        cfg,
    )
    .unwrap();
    assert!((hit.t - 0.6).abs() < 1e-12);
    assert!((hit.point - vector![3.4, 2.8]).norm() < 1e-12);
    // Parallel lines have no intersection parameter.
    assert!(line_intersection(
        vector![1.0, 1.0],
        vector![5.0, 3.0],
        vector![1.0, 3.0],
        vector![5.0, 5.0],
        cfg,
    )
    .is_none());
}

#[test]
fn segment_intersection_cases() {
    let cfg = GeomCfg::default();
    // Crossing diagonals of a square meet at (3,3).
    assert!(segments_intersect(
        vector![1.0, 1.0],
        vector![5.0, 5.0],
        vector![1.0, 5.0],
        vector![5.0, 1.0],
        cfg,
    ));
    assert!(!segments_intersect(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
        cfg,
    ));
    // Endpoint touch counts.
    assert!(segments_intersect(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![1.0, 1.0],
        vector![2.0, 0.0],
        cfg,
    ));
}

#[test]
fn segment_circle_lesson() {
    // The lesson tests a polygon edge against a circle at (2.5,2.5), r=1.5.
    let center = vector![2.5, 2.5];
    assert!(segment_circle_intersects(
        vector![1.0, 1.0],
        vector![4.0, 1.0],
        center,
        1.5,
    ));
    assert!(!segment_circle_intersects(
        vector![5.0, 1.0],
        vector![5.0, 5.0],
        center,
        1.5,
    ));
}

#[test]
fn region_contradiction_and_box() {
    // x <= 0 and x >= 1 -> empty.
    let mut p = Region::default();
    p.insert(HalfPlane::new(vector![1.0, 0.0], 0.0));
    p.insert(HalfPlane::new(vector![-1.0, 0.0], -1.0));
    assert!(matches!(p.shape(), RegionShape::Empty));
    // Unit box -> bounded with four corners.
    let mut q = Region::default();
    q.insert(HalfPlane::new(vector![1.0, 0.0], 1.0));
    q.insert(HalfPlane::new(vector![-1.0, 0.0], 0.0));
    q.insert(HalfPlane::new(vector![0.0, 1.0], 1.0));
    q.insert(HalfPlane::new(vector![0.0, -1.0], 0.0));
    match q.shape() {
        RegionShape::Bounded(verts) => assert_eq!(verts.len(), 4),
        other => panic!("expected bounded box, got {other:?}"),
    }
    // Two half-planes never bound a region.
    let mut half = Region::default();
    half.insert(HalfPlane::new(vector![1.0, 0.0], 1.0));
    half.insert(HalfPlane::new(vector![0.0, 1.0], 1.0));
    assert!(matches!(half.shape(), RegionShape::Unbounded));
    // eps semantics: positive enlarges, negative shrinks.
    assert!(p.is_empty_eps(1e-9));
    assert!(!q.is_empty_eps(-1e-6));
}

#[test]
fn hexagon_equals_intersection_of_its_edge_half_planes() {
    let lesson = fixtures::lesson_polygon_convex();
    let region = Region::from_convex_polygon(&lesson.verts).unwrap();
    let verts = region.shape().vertices().expect("hexagon is bounded");
    assert_eq!(verts.len(), lesson.verts.len());
    for v in &lesson.verts {
        assert!(region.contains_eps(*v, 1e-9));
        assert!(
            verts.iter().any(|u| (u - v).norm() < 1e-6),
            "missing vertex {v:?}"
        );
    }
    // The lesson's probe points, two in and two out.
    assert!(region.contains_eps(vector![2.0, 2.0], 0.0));
    assert!(region.contains_eps(vector![4.0, 3.0], 0.0));
    assert!(!region.contains_eps(vector![0.0, 2.0], 0.0));
    assert!(!region.contains_eps(vector![6.0, 1.0], 0.0));
}

#[test]
fn region_merge_coalesces_parallels() {
    let mut a = Region::default();
    a.insert(HalfPlane::new(vector![1.0, 0.0], 2.0));
    let mut b = Region::default();
    b.insert(HalfPlane::new(vector![2.0, 0.0], 2.0)); // x <= 1 once normalized
    let merged = a.intersect(&b);
    assert_eq!(merged.planes.len(), 1);
    assert!((merged.planes[0].c - 1.0).abs() < 1e-12);
}

use super::rand::{draw_point_cloud, CloudCfg, ReplayToken};

proptest! {
    /// Every sampled cloud's hull contains the whole cloud.
    #[test]
    fn hull_contains_cloud(seed in 0u64..64) {
        let cfg = CloudCfg { count: 24, radius: 5.0 };
        let tok = ReplayToken { seed, index: 0 };
        let points = draw_point_cloud(cfg, tok);
        if let Ok(trace) = graham_scan(&points) {
            let hull: Vec<Vector2<f64>> = trace.hull.iter().map(|&i| points[i]).collect();
            let region = Region::from_convex_polygon(&hull).unwrap();
            for &p in &points {
                prop_assert!(region.contains_eps(p, 1e-9));
            }
        }
    }
}
