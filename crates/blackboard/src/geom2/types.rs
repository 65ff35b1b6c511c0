//! Basic 2D types and tolerances shared by the geometry lessons.
//!
//! - `GeomCfg`: centralizes epsilons for degenerate denominators and
//!   on-boundary slack.
//! - `HalfPlane`: closed half-plane `n·x <= c` with helper predicates.
//! - `GeomError`: distinguished conditions for degenerate lesson inputs.

use std::fmt;

use nalgebra::Vector2;
use serde::Serialize;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Below this a determinant/denominator counts as zero (parallel lines,
    /// zero-length vectors).
    pub eps_det: f64,
    /// Slack for containment and collinearity predicates.
    pub eps_on: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_on: 1e-9,
        }
    }
}

/// Closed half-plane `n · x <= c` (no normalization required here).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct HalfPlane {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl HalfPlane {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }
}

/// Degenerate-input conditions for the geometry lessons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Operation needs at least `needed` distinct points.
    TooFewPoints { needed: usize, got: usize },
    /// All input points lie on one line; no polygon exists.
    Collinear,
    /// A direction-dependent quantity was asked of a (near-)zero vector.
    DegenerateVector,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GeomError::TooFewPoints { needed, got } => {
                write!(f, "need at least {needed} distinct points, got {got}")
            }
            GeomError::Collinear => write!(f, "input points are collinear"),
            GeomError::DegenerateVector => write!(f, "zero-length vector has no direction"),
        }
    }
}

impl std::error::Error for GeomError {}
