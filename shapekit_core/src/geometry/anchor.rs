// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: path anchors (single path segments)

use crate::error::{GeometryError, Result};
use crate::types::Vector;
use serde::{Deserialize, Serialize};

/// Gauss–Legendre nodes on `[-1, 1]` as `(weight, abscissa)` pairs.
///
/// One 24 node pass is exact to rounding for smooth curves. Curves with a
/// cusp have a kink in their speed, so the rule is applied adaptively.
const GAUSS_LEGENDRE_24: [(f64, f64); 24] = [
    (0.012341229799987334, -0.9951872199970213),
    (0.028531388628933813, -0.9747285559713095),
    (0.044277438817419676, -0.9382745520027328),
    (0.05929858491543666, -0.8864155270044011),
    (0.07334648141108027, -0.820001985973903),
    (0.08619016153195322, -0.7401241915785544),
    (0.0976186521041139, -0.6480936519369755),
    (0.10744427011596562, -0.5454214713888396),
    (0.11550566805372561, -0.4337935076260451),
    (0.12167047292780335, -0.3150426796961634),
    (0.12583745634682839, -0.1911188674736163),
    (0.12793819534675224, -0.06405689286260563),
    (0.12793819534675224, 0.06405689286260563),
    (0.12583745634682839, 0.1911188674736163),
    (0.12167047292780335, 0.3150426796961634),
    (0.11550566805372561, 0.4337935076260451),
    (0.10744427011596562, 0.5454214713888396),
    (0.0976186521041139, 0.6480936519369755),
    (0.08619016153195322, 0.7401241915785544),
    (0.07334648141108027, 0.820001985973903),
    (0.05929858491543666, 0.8864155270044011),
    (0.044277438817419676, 0.9382745520027328),
    (0.028531388628933813, 0.9747285559713095),
    (0.012341229799987334, 0.9951872199970213),
];

/// Bisection steps used to invert arc length, enough to reach f64 precision.
const BISECTION_STEPS: usize = 52;

/// Relative agreement between one interval and its two halves.
const ARC_LENGTH_TOLERANCE: f64 = 1e-12;

/// Maximum interval splits when integrating curve speed.
const MAX_ARC_LENGTH_DEPTH: u32 = 20;

/// Running position of a path walk.
///
/// Anchors never track where they start; the owning path threads this through
/// each anchor in turn. The default cursor sits at the origin, which is what
/// standalone anchor queries use.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathCursor {
    /// End point of the previous anchor
    pub current: Vector,
    /// Start point of the current subpath, target of a close
    pub start: Vector,
}

impl PathCursor {
    /// Cursor positioned at `p` with `p` as subpath start.
    pub fn at(p: Vector) -> Self {
        Self {
            current: p,
            start: p,
        }
    }
}

/// A single path segment with absolute control and target points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anchor {
    /// Start a new subpath at `target`.
    Move { target: Vector },
    /// Straight line to `target`.
    Line { target: Vector },
    /// Quadratic Bézier curve.
    QuadCurve { control: Vector, target: Vector },
    /// Cubic Bézier curve.
    CubicCurve {
        control1: Vector,
        control2: Vector,
        target: Vector,
    },
    /// Close the current subpath.
    Close,
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::Move {
            target: Vector::ZERO,
        }
    }
}

impl Anchor {
    /// Move anchor to `(x, y)`.
    pub fn move_to(x: f64, y: f64) -> Self {
        Anchor::Move {
            target: Vector::new(x, y),
        }
    }

    /// Line anchor ending at `(x, y)`.
    pub fn line_to(x: f64, y: f64) -> Self {
        Anchor::Line {
            target: Vector::new(x, y),
        }
    }

    /// Quadratic anchor with control `(x1, y1)` ending at `(x2, y2)`.
    pub fn quad_to(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Anchor::QuadCurve {
            control: Vector::new(x1, y1),
            target: Vector::new(x2, y2),
        }
    }

    /// Cubic anchor with controls `(x1, y1)`, `(x2, y2)` ending at `(x3, y3)`.
    pub fn cubic_to(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Anchor::CubicCurve {
            control1: Vector::new(x1, y1),
            control2: Vector::new(x2, y2),
            target: Vector::new(x3, y3),
        }
    }

    /// Anchor closing the current subpath.
    pub fn close() -> Self {
        Anchor::Close
    }

    /// Replace this anchor with a move.
    pub fn set_move(&mut self, x: f64, y: f64) -> &mut Self {
        *self = Anchor::move_to(x, y);
        self
    }

    /// Replace this anchor with a line.
    pub fn set_line(&mut self, x: f64, y: f64) -> &mut Self {
        *self = Anchor::line_to(x, y);
        self
    }

    /// Replace this anchor with a quadratic curve.
    pub fn set_quad_curve(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        *self = Anchor::quad_to(x1, y1, x2, y2);
        self
    }

    /// Replace this anchor with a cubic curve.
    pub fn set_cubic_curve(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> &mut Self {
        *self = Anchor::cubic_to(x1, y1, x2, y2, x3, y3);
        self
    }

    /// Replace this anchor with a curve from a flat coordinate list.
    ///
    /// Four coordinates produce a quadratic curve, six a cubic one.
    pub fn set_curve(&mut self, coords: &[f64]) -> Result<&mut Self> {
        match *coords {
            [x1, y1, x2, y2] => Ok(self.set_quad_curve(x1, y1, x2, y2)),
            [x1, y1, x2, y2, x3, y3] => Ok(self.set_cubic_curve(x1, y1, x2, y2, x3, y3)),
            _ => Err(GeometryError::InvalidState(
                "a curve takes 4 (quadratic) or 6 (cubic) coordinates",
            )),
        }
    }

    /// Replace this anchor with a close.
    pub fn set_close(&mut self) -> &mut Self {
        *self = Anchor::Close;
        self
    }

    /// Apply `f` to every vector in the payload, keeping the variant.
    pub fn map(&self, f: impl Fn(Vector) -> Vector) -> Anchor {
        match *self {
            Anchor::Move { target } => Anchor::Move { target: f(target) },
            Anchor::Line { target } => Anchor::Line { target: f(target) },
            Anchor::QuadCurve { control, target } => Anchor::QuadCurve {
                control: f(control),
                target: f(target),
            },
            Anchor::CubicCurve {
                control1,
                control2,
                target,
            } => Anchor::CubicCurve {
                control1: f(control1),
                control2: f(control2),
                target: f(target),
            },
            Anchor::Close => Anchor::Close,
        }
    }

    /// Copy with every point offset by `v`.
    pub fn add(&self, v: Vector) -> Anchor {
        self.map(|p| p.add(v))
    }

    /// Copy with every point offset by `-v`.
    pub fn sub(&self, v: Vector) -> Anchor {
        self.map(|p| p.sub(v))
    }

    /// Copy with every point scaled about the origin.
    pub fn multiply(&self, scalar: f64) -> Anchor {
        self.map(|p| p.multiply(scalar))
    }

    /// Payload vectors in control-then-target order.
    pub fn points(&self) -> Vec<Vector> {
        match *self {
            Anchor::Move { target } | Anchor::Line { target } => vec![target],
            Anchor::QuadCurve { control, target } => vec![control, target],
            Anchor::CubicCurve {
                control1,
                control2,
                target,
            } => vec![control1, control2, target],
            Anchor::Close => Vec::new(),
        }
    }

    /// Cursor after this anchor has been drawn from `cursor`.
    pub fn end_point(&self, cursor: PathCursor) -> PathCursor {
        match *self {
            Anchor::Move { target } => PathCursor::at(target),
            Anchor::Line { target }
            | Anchor::QuadCurve { target, .. }
            | Anchor::CubicCurve { target, .. } => PathCursor {
                current: target,
                start: cursor.start,
            },
            Anchor::Close => PathCursor::at(cursor.start),
        }
    }

    /// Arc length when drawn from the origin.
    pub fn length(&self) -> f64 {
        self.length_from(PathCursor::default())
    }

    /// Arc length when drawn from `cursor`.
    ///
    /// Moves and closes contribute no length.
    pub fn length_from(&self, cursor: PathCursor) -> f64 {
        self.length_until(cursor, 1.0)
    }

    /// Arc length from the start of the anchor up to parameter `t`.
    pub fn length_until(&self, cursor: PathCursor, t: f64) -> f64 {
        let p0 = cursor.current;
        match *self {
            Anchor::Move { .. } | Anchor::Close => 0.0,
            Anchor::Line { target } => target.sub(p0).length() * t,
            Anchor::QuadCurve { control, target } => {
                integrate_speed(t, |u| quad_derivative(p0, control, target, u))
            }
            Anchor::CubicCurve {
                control1,
                control2,
                target,
            } => integrate_speed(t, |u| cubic_derivative(p0, control1, control2, target, u)),
        }
    }

    /// Parameter at which the anchor has covered `len` units of arc.
    ///
    /// Curves are inverted by a fixed number of bisection steps.
    pub fn parameter_at_length(&self, cursor: PathCursor, len: f64) -> f64 {
        let total = self.length_from(cursor);
        if total <= 0.0 || len <= 0.0 {
            return 0.0;
        }
        if len >= total {
            return 1.0;
        }
        match self {
            Anchor::Line { .. } => len / total,
            _ => {
                let (mut lo, mut hi) = (0.0, 1.0);
                for _ in 0..BISECTION_STEPS {
                    let mid = 0.5 * (lo + hi);
                    if self.length_until(cursor, mid) < len {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                0.5 * (lo + hi)
            }
        }
    }

    /// Position at parameter `t` when drawn from the origin.
    pub fn vector_at(&self, t: f64) -> Result<Vector> {
        self.vector_at_from(PathCursor::default(), t)
    }

    /// Position at parameter `t` in `[0, 1]` when drawn from `cursor`.
    pub fn vector_at_from(&self, cursor: PathCursor, t: f64) -> Result<Vector> {
        let p0 = cursor.current;
        match *self {
            Anchor::Move { .. } => Err(GeometryError::UnsupportedOperation(
                "cannot evaluate position for this anchor kind",
            )),
            Anchor::Line { target } => Ok(p0.lerp(target, t)),
            Anchor::QuadCurve { control, target } => Ok(quad_point(p0, control, target, t)),
            Anchor::CubicCurve {
                control1,
                control2,
                target,
            } => Ok(cubic_point(p0, control1, control2, target, t)),
            Anchor::Close => Ok(p0.lerp(cursor.start, t)),
        }
    }
}

pub(crate) fn quad_point(p0: Vector, c: Vector, p1: Vector, t: f64) -> Vector {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let d = t * t;
    Vector::new(
        a * p0.x + b * c.x + d * p1.x,
        a * p0.y + b * c.y + d * p1.y,
    )
}

pub(crate) fn cubic_point(p0: Vector, c1: Vector, c2: Vector, p1: Vector, t: f64) -> Vector {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Vector::new(
        a * p0.x + b * c1.x + c * c2.x + d * p1.x,
        a * p0.y + b * c1.y + c * c2.y + d * p1.y,
    )
}

fn quad_derivative(p0: Vector, c: Vector, p1: Vector, t: f64) -> Vector {
    let mt = 1.0 - t;
    c.sub(p0).multiply(2.0 * mt).add(p1.sub(c).multiply(2.0 * t))
}

fn cubic_derivative(p0: Vector, c1: Vector, c2: Vector, p1: Vector, t: f64) -> Vector {
    let mt = 1.0 - t;
    c1.sub(p0)
        .multiply(3.0 * mt * mt)
        .add(c2.sub(c1).multiply(6.0 * mt * t))
        .add(p1.sub(c2).multiply(3.0 * t * t))
}

/// Integrate `|d(u)|` over `[0, t]`.
fn integrate_speed(t: f64, derivative: impl Fn(f64) -> Vector) -> f64 {
    let whole = gauss_legendre(0.0, t, &derivative);
    let tol = whole.abs() * ARC_LENGTH_TOLERANCE;
    adaptive_speed(0.0, t, whole, tol, MAX_ARC_LENGTH_DEPTH, &derivative)
}

/// Split `[a, b]` until both halves agree with the whole within `tol`.
fn adaptive_speed(
    a: f64,
    b: f64,
    whole: f64,
    tol: f64,
    depth: u32,
    derivative: &impl Fn(f64) -> Vector,
) -> f64 {
    let mid = 0.5 * (a + b);
    let left = gauss_legendre(a, mid, derivative);
    let right = gauss_legendre(mid, b, derivative);
    let halves = left + right;
    if depth == 0 || !halves.is_finite() || (halves - whole).abs() <= tol {
        return halves;
    }
    adaptive_speed(a, mid, left, 0.5 * tol, depth - 1, derivative)
        + adaptive_speed(mid, b, right, 0.5 * tol, depth - 1, derivative)
}

fn gauss_legendre(a: f64, b: f64, derivative: &impl Fn(f64) -> Vector) -> f64 {
    let half = 0.5 * (b - a);
    let center = 0.5 * (a + b);
    let mut sum = 0.0;
    for &(weight, x) in GAUSS_LEGENDRE_24.iter() {
        sum += weight * derivative(half * x + center).length();
    }
    half * sum
}
