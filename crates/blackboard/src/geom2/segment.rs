//! Line and segment lessons: distances, projections, intersections.

use nalgebra::Vector2;
use serde::Serialize;

use super::types::GeomCfg;
use super::util::{cross, dot};

/// Projection of a point onto a segment, with the parameter clamped to the
/// segment (the lesson draws the foot `H` when `0 <= t <= 1`, else the
/// nearer endpoint).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SegmentProjection {
    /// Clamped parameter along `a → b`.
    pub t: f64,
    pub foot: Vector2<f64>,
    pub dist: f64,
}

/// Distance from `p` to the infinite line through `a`, `b`.
///
/// `None` when the two line points coincide within `cfg.eps_det`.
pub fn point_line_distance(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    cfg: GeomCfg,
) -> Option<f64> {
    let ab = b - a;
    let len = ab.norm();
    if len <= cfg.eps_det {
        return None;
    }
    Some(cross(ab, p - a).abs() / len)
}

/// Closest point on the segment `a → b` and the distance to it.
pub fn project_onto_segment(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
) -> SegmentProjection {
    let ab = b - a;
    let len2 = ab.norm_squared();
    let t = if len2 == 0.0 {
        0.0
    } else {
        (dot(p - a, ab) / len2).clamp(0.0, 1.0)
    };
    let foot = a + ab * t;
    SegmentProjection {
        t,
        foot,
        dist: (p - foot).norm(),
    }
}

/// Distance from `p` to the segment `a → b`.
#[inline]
pub fn point_segment_distance(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    project_onto_segment(p, a, b).dist
}

/// Intersection of lines AB and CD by the area-ratio method.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LineHit {
    /// Parameter along `a → b` (the ratio of the two signed areas).
    pub t: f64,
    pub point: Vector2<f64>,
}

/// `t = cross(C−A, D−C) / cross(B−A, D−C)`; `None` when the denominator is
/// within `cfg.eps_det` of zero (parallel or degenerate lines).
pub fn line_intersection(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    cfg: GeomCfg,
) -> Option<LineHit> {
    let ab = b - a;
    let cd = d - c;
    let denom = cross(ab, cd);
    if denom.abs() <= cfg.eps_det {
        return None;
    }
    let t = cross(c - a, cd) / denom;
    Some(LineHit {
        t,
        point: a + ab * t,
    })
}

/// Do the closed segments AB and CD intersect?
///
/// Each segment's endpoints must straddle the other segment's line; touching
/// at an endpoint counts as intersecting.
pub fn segments_intersect(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let d1 = cross(b - a, c - a);
    let d2 = cross(b - a, d - a);
    let d3 = cross(d - c, a - c);
    let d4 = cross(d - c, b - c);
    if (d1 * d2) < 0.0 && (d3 * d4) < 0.0 {
        return true;
    }
    let on = |o: Vector2<f64>, p: Vector2<f64>, q: Vector2<f64>, s: f64| {
        s.abs() <= cfg.eps_on
            && q.x >= o.x.min(p.x) - cfg.eps_on
            && q.x <= o.x.max(p.x) + cfg.eps_on
            && q.y >= o.y.min(p.y) - cfg.eps_on
            && q.y <= o.y.max(p.y) + cfg.eps_on
    };
    on(a, b, c, d1) || on(a, b, d, d2) || on(c, d, a, d3) || on(c, d, b, d4)
}

/// Does the segment come within `radius` of `center`? Used by the
/// polygon-edge-versus-circle lesson.
#[inline]
pub fn segment_circle_intersects(
    a: Vector2<f64>,
    b: Vector2<f64>,
    center: Vector2<f64>,
    radius: f64,
) -> bool {
    point_segment_distance(center, a, b) <= radius
}
