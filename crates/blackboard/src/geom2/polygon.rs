//! Polygon lessons: shoelace area with a fan-triangle trace, winding-number
//! containment, area centroid.

use nalgebra::Vector2;
use serde::Serialize;

use super::types::GeomError;
use super::util::{cross, orient};

/// Signed shoelace area; positive for counterclockwise vertex order.
pub fn signed_area(verts: &[Vector2<f64>]) -> f64 {
    let mut acc = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        acc += cross(p, q);
    }
    acc / 2.0
}

/// Absolute polygon area.
#[inline]
pub fn area(verts: &[Vector2<f64>]) -> f64 {
    signed_area(verts).abs()
}

/// One fan triangle (v0, v[i], v[i+1]) with its signed contribution.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AreaTerm {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
    /// Half the cross product of (b−a, c−a); negative terms carve notches
    /// out of concave polygons.
    pub signed: f64,
}

/// Area decomposition replayed by the animation one triangle at a time.
#[derive(Clone, Debug, Serialize)]
pub struct AreaTrace {
    pub terms: Vec<AreaTerm>,
    pub signed_area: f64,
    pub area: f64,
}

/// Fan decomposition from the first vertex.
pub fn area_trace(verts: &[Vector2<f64>]) -> Result<AreaTrace, GeomError> {
    if verts.len() < 3 {
        return Err(GeomError::TooFewPoints {
            needed: 3,
            got: verts.len(),
        });
    }
    let a = verts[0];
    let mut terms = Vec::with_capacity(verts.len() - 2);
    let mut total = 0.0;
    for w in verts[1..].windows(2) {
        let signed = orient(a, w[0], w[1]) / 2.0;
        total += signed;
        terms.push(AreaTerm {
            a,
            b: w[0],
            c: w[1],
            signed,
        });
    }
    Ok(AreaTrace {
        terms,
        signed_area: total,
        area: total.abs(),
    })
}

/// Winding-number containment with the half-open edge rule.
///
/// For each edge (a, b): an upward crossing (`a.y <= p.y < b.y`) with `p`
/// strictly left of the edge increments the counter, a downward crossing
/// (`b.y <= p.y < a.y`) with `p` strictly right decrements it. The half-open
/// comparison means a vertex at exactly `p.y` is counted by only one of its
/// two edges, which kills the classic double-count at shared vertices.
/// Boundary behavior that follows: points on left/bottom edges of a CCW
/// polygon report inside, points on right/top edges report outside.
pub fn point_in_polygon(verts: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    let mut winding = 0i32;
    for i in 0..verts.len() {
        let a = verts[i];
        let b = verts[(i + 1) % verts.len()];
        if a.y <= p.y {
            if b.y > p.y && orient(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && orient(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding != 0
}

/// Area centroid (vertices in CCW order, non-degenerate).
pub fn centroid(verts: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if verts.len() < 3 {
        return None;
    }
    let mut a = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let w = cross(p, q);
        a += w;
        cx += (p.x + q.x) * w;
        cy += (p.y + q.y) * w;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}
