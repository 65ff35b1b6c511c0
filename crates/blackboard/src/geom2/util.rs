//! Vector primitives: dot/cross products, turn tests, rotation.

use nalgebra::Vector2;

use super::types::{GeomCfg, GeomError};

/// Dot product `a·b = |a||b|cos θ`; sign classifies the angle as
/// acute/right/obtuse.
#[inline]
pub fn dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.dot(&b)
}

/// 2D scalar cross product `a.x·b.y − a.y·b.x`.
///
/// Positive means the turn from `a` to `b` is counterclockwise; the
/// magnitude is the area of the parallelogram the two vectors span (half of
/// it is the triangle area).
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Cross product of `o→a` and `o→b`: the turn test used by hull and
/// containment code.
#[inline]
pub fn orient(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    cross(a - o, b - o)
}

/// Are the three points collinear within `cfg.eps_on`?
#[inline]
pub fn collinear(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, cfg: GeomCfg) -> bool {
    orient(a, b, c).abs() <= cfg.eps_on
}

/// Unsigned angle between two vectors, in [0, π].
pub fn angle_between(a: Vector2<f64>, b: Vector2<f64>) -> Result<f64, GeomError> {
    let na = a.norm();
    let nb = b.norm();
    if na == 0.0 || nb == 0.0 {
        return Err(GeomError::DegenerateVector);
    }
    let cos = (dot(a, b) / (na * nb)).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Rotate `p` counterclockwise by `theta` about `center`.
pub fn rotate_about(p: Vector2<f64>, center: Vector2<f64>, theta: f64) -> Vector2<f64> {
    let d = p - center;
    let (s, c) = theta.sin_cos();
    center + Vector2::new(c * d.x - s * d.y, s * d.x + c * d.y)
}

#[inline]
pub(crate) fn angle_of(n: Vector2<f64>) -> f64 {
    n.y.atan2(n.x)
}

#[inline]
pub(crate) fn canonicalize_unit(n: Vector2<f64>, c: f64) -> Option<(Vector2<f64>, f64)> {
    let norm = n.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return None;
    }
    Some((n / norm, c / norm))
}
