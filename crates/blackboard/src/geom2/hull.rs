//! Graham-scan convex hull with a per-push/pop frame trace.
//!
//! Convention: the scan pops while the last turn is not strictly
//! counterclockwise (`cross <= 0`), so points exactly collinear with a hull
//! edge are excluded from the result. The lesson animation replays the
//! recorded stack states one frame at a time.

use nalgebra::Vector2;
use serde::Serialize;

use super::types::GeomError;
use super::util::{angle_of, orient};

/// What happened in one scan step; indices refer to the input slice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum HullAction {
    /// Anchor selected (lexicographically smallest y, then x).
    Anchor,
    Push { point: usize },
    /// `turn` is the offending cross product (<= 0).
    Pop { point: usize, turn: f64 },
}

/// Stack state after one action.
#[derive(Clone, Debug, Serialize)]
pub struct HullFrame {
    pub action: HullAction,
    pub stack: Vec<usize>,
}

/// Full trace of one Graham scan.
#[derive(Clone, Debug, Serialize)]
pub struct HullTrace {
    pub anchor: usize,
    /// Input indices in polar-angle order about the anchor (anchor first).
    pub scan_order: Vec<usize>,
    pub frames: Vec<HullFrame>,
    /// Hull vertices, counterclockwise, starting at the anchor.
    pub hull: Vec<usize>,
}

/// Graham scan over `points`; needs at least 3 non-collinear distinct points.
pub fn graham_scan(points: &[Vector2<f64>]) -> Result<HullTrace, GeomError> {
    let distinct = count_distinct(points);
    if distinct < 3 {
        return Err(GeomError::TooFewPoints {
            needed: 3,
            got: distinct,
        });
    }

    let anchor = (0..points.len())
        .min_by(|&i, &j| {
            let (a, b) = (points[i], points[j]);
            (a.y, a.x)
                .partial_cmp(&(b.y, b.x))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("nonempty input");
    let ap = points[anchor];

    // Polar-angle order about the anchor; ties broken by distance so that
    // collinear candidates arrive near-to-far and get popped consistently.
    let mut order: Vec<usize> = (0..points.len())
        .filter(|&i| i != anchor && points[i] != ap)
        .collect();
    order.sort_by(|&i, &j| {
        let a = points[i] - ap;
        let b = points[j] - ap;
        (angle_of(a), a.norm())
            .partial_cmp(&(angle_of(b), b.norm()))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut scan_order = vec![anchor];
    scan_order.extend(&order);

    let mut frames = Vec::new();
    let mut stack = vec![anchor];
    frames.push(HullFrame {
        action: HullAction::Anchor,
        stack: stack.clone(),
    });
    for &i in &order {
        while stack.len() > 1 {
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            let turn = orient(points[below], points[top], points[i]);
            if turn > 0.0 {
                break;
            }
            stack.pop();
            frames.push(HullFrame {
                action: HullAction::Pop { point: top, turn },
                stack: stack.clone(),
            });
        }
        stack.push(i);
        frames.push(HullFrame {
            action: HullAction::Push { point: i },
            stack: stack.clone(),
        });
    }

    if stack.len() < 3 {
        return Err(GeomError::Collinear);
    }
    Ok(HullTrace {
        anchor,
        scan_order,
        frames,
        hull: stack,
    })
}

fn count_distinct(points: &[Vector2<f64>]) -> usize {
    let mut seen: Vec<Vector2<f64>> = Vec::with_capacity(points.len());
    for &p in points {
        if !seen.contains(&p) {
            seen.push(p);
        }
    }
    seen.len()
}
