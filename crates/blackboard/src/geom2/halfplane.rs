//! Half-plane intersection lesson: ordered half-plane regions and the deque
//! sweep that classifies their intersection.
//!
//! A `Region` keeps its half-planes strict: unit normals, sorted by normal
//! angle, parallel constraints coalesced to the most restrictive offset.
//! The ordering is what lets the sweep run in one pass and makes merges of
//! two regions a sorted-stream merge.

use std::collections::VecDeque;

use nalgebra::Vector2;
use serde::Serialize;

use super::types::HalfPlane;
use super::util::{angle_of, canonicalize_unit, cross};

/// Intersection of closed half-planes, kept in strict ordered form.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Region {
    pub planes: Vec<HalfPlane>,
}

/// Classification of a region's point set.
#[derive(Clone, Debug, Serialize)]
pub enum RegionShape {
    Empty,
    Unbounded,
    /// Vertices of the bounding convex polygon, counterclockwise.
    Bounded(Vec<Vector2<f64>>),
}

impl RegionShape {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, RegionShape::Empty)
    }

    #[inline]
    pub fn vertices(self) -> Option<Vec<Vector2<f64>>> {
        match self {
            RegionShape::Bounded(v) => Some(v),
            _ => None,
        }
    }
}

impl Region {
    /// Insert one half-plane, preserving order and coalescing parallels.
    pub fn insert(&mut self, h: HalfPlane) {
        let Some((n, c)) = canonicalize_unit(h.n, h.c) else {
            return;
        };
        let key = angle_of(n);
        let mut lo = 0usize;
        let mut hi = self.planes.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if angle_of(self.planes[mid].n) <= key {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        if lo > 0 && (self.planes[lo - 1].n - n).norm() < 1e-9 {
            if c < self.planes[lo - 1].c {
                self.planes[lo - 1].c = c;
            }
            return;
        }
        if lo < self.planes.len() && (self.planes[lo].n - n).norm() < 1e-9 {
            if c < self.planes[lo].c {
                self.planes[lo].c = c;
            }
            return;
        }
        self.planes.insert(lo, HalfPlane::new(n, c));
    }

    /// Intersect two regions (merge of two angle-sorted streams).
    pub fn intersect(&self, other: &Region) -> Region {
        let mut i = 0;
        let mut j = 0;
        let mut out: Vec<HalfPlane> = Vec::with_capacity(self.planes.len() + other.planes.len());
        while i < self.planes.len() && j < other.planes.len() {
            let a = self.planes[i];
            let b = other.planes[j];
            let ai = angle_of(a.n);
            let bj = angle_of(b.n);
            if (ai - bj).abs() < 1e-12 {
                push_or_coalesce(&mut out, a.n, a.c.min(b.c));
                i += 1;
                j += 1;
            } else if ai < bj {
                push_or_coalesce(&mut out, a.n, a.c);
                i += 1;
            } else {
                push_or_coalesce(&mut out, b.n, b.c);
                j += 1;
            }
        }
        for &h in &self.planes[i..] {
            push_or_coalesce(&mut out, h.n, h.c);
        }
        for &h in &other.planes[j..] {
            push_or_coalesce(&mut out, h.n, h.c);
        }
        Region { planes: out }
    }

    /// Membership with slack: positive `eps` enlarges every half-plane.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.planes.iter().all(|h| h.satisfies_eps(p, eps))
    }

    /// Classify the intersection with slack applied to every offset.
    pub fn shape_eps(&self, eps: f64) -> RegionShape {
        sweep(&self.planes, eps)
    }

    /// Shorthand for `shape_eps(0.0)`.
    #[inline]
    pub fn shape(&self) -> RegionShape {
        self.shape_eps(0.0)
    }

    #[inline]
    pub fn is_empty_eps(&self, eps: f64) -> bool {
        self.shape_eps(eps).is_empty()
    }

    /// Region of a convex polygon: one inward half-plane per CCW edge (the
    /// outward normal of edge p→q is the 90° clockwise turn of q−p).
    pub fn from_convex_polygon(verts: &[Vector2<f64>]) -> Option<Region> {
        if verts.len() < 3 {
            return None;
        }
        let mut region = Region::default();
        for k in 0..verts.len() {
            let p = verts[k];
            let q = verts[(k + 1) % verts.len()];
            let edge = q - p;
            let n = Vector2::new(edge.y, -edge.x);
            region.insert(HalfPlane::new(n, n.dot(&p)));
        }
        if region.planes.len() < 3 {
            return None;
        }
        Some(region)
    }
}

#[inline]
fn push_or_coalesce(out: &mut Vec<HalfPlane>, n: Vector2<f64>, c: f64) {
    if let Some(last) = out.last_mut() {
        if (last.n - n).norm() < 1e-9 {
            if c < last.c {
                last.c = c;
            }
            return;
        }
    }
    out.push(HalfPlane::new(n, c));
}

#[inline]
fn wrap_angle(a: f64) -> f64 {
    let mut x = a;
    while x <= -std::f64::consts::PI {
        x += 2.0 * std::f64::consts::PI;
    }
    while x > std::f64::consts::PI {
        x -= 2.0 * std::f64::consts::PI;
    }
    x
}

fn boundary_intersection(h1: HalfPlane, h2: HalfPlane) -> Option<Vector2<f64>> {
    let det = cross(h1.n, h2.n);
    if det.abs() < 1e-12 {
        return None;
    }
    // Solve [n1; n2] x = (c1, c2) by Cramer's rule.
    let x = (h1.c * h2.n.y - h2.c * h1.n.y) / det;
    let y = (h1.n.x * h2.c - h2.n.x * h1.c) / det;
    Some(Vector2::new(x, y))
}

/// Deque sweep over angle-sorted half-planes.
fn sweep(planes: &[HalfPlane], eps: f64) -> RegionShape {
    if planes.is_empty() {
        return RegionShape::Unbounded;
    }
    // Opposite parallel pairs give an interval test: n·x <= c1 and
    // (-n)·x <= c2 force s = n·x into [-c2, c1], empty iff -c2 > c1.
    let angles: Vec<f64> = planes.iter().map(|h| angle_of(h.n)).collect();
    for (i, hi) in planes.iter().enumerate() {
        let target = wrap_angle(angles[i] + std::f64::consts::PI);
        let mut lo = 0usize;
        let mut hi_idx = angles.len();
        while lo < hi_idx {
            let mid = (lo + hi_idx) / 2;
            if angles[mid] < target {
                lo = mid + 1;
            } else {
                hi_idx = mid;
            }
        }
        if lo < angles.len() && (angles[lo] - target).abs() < 1e-12 {
            let c1 = hi.c;
            let c2 = planes[lo].c;
            if (-c1).max(-c2) > c1.min(c2) {
                return RegionShape::Empty;
            }
        }
    }

    let mut dq: VecDeque<usize> = VecDeque::new();
    for (i, h) in planes.iter().enumerate() {
        while dq.len() >= 2 {
            let l1 = dq[dq.len() - 2];
            let l2 = dq[dq.len() - 1];
            if let Some(p) = boundary_intersection(planes[l1], planes[l2]) {
                if h.satisfies_eps(p, eps) {
                    break;
                }
            }
            dq.pop_back();
        }
        while dq.len() >= 2 {
            let f1 = dq[0];
            let f2 = dq[1];
            if let Some(p) = boundary_intersection(planes[f1], planes[f2]) {
                if h.satisfies_eps(p, eps) {
                    break;
                }
            }
            dq.pop_front();
        }
        dq.push_back(i);
    }
    while dq.len() >= 3 {
        let l1 = dq[dq.len() - 2];
        let l2 = dq[dq.len() - 1];
        if let Some(p) = boundary_intersection(planes[l1], planes[l2]) {
            if planes[dq[0]].satisfies_eps(p, eps) {
                break;
            }
        }
        dq.pop_back();
    }
    while dq.len() >= 3 {
        let f1 = dq[0];
        let f2 = dq[1];
        if let Some(p) = boundary_intersection(planes[f1], planes[f2]) {
            if planes[dq[dq.len() - 1]].satisfies_eps(p, eps) {
                break;
            }
        }
        dq.pop_front();
    }
    if dq.is_empty() {
        return RegionShape::Empty;
    }
    if dq.len() < 3 {
        return RegionShape::Unbounded;
    }
    let m = dq.len();
    let mut verts = Vec::with_capacity(m);
    for k in 0..m {
        let i1 = dq[k];
        let i2 = dq[(k + 1) % m];
        match boundary_intersection(planes[i1], planes[i2]) {
            Some(p) => verts.push(p),
            None => return RegionShape::Unbounded,
        }
    }
    if verts.len() >= 3 {
        RegionShape::Bounded(verts)
    } else {
        RegionShape::Unbounded
    }
}
