// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: Bézier flattening helpers

use crate::types::Vector;
use smallvec::SmallVec;

/// Hard limit on subdivision so flattening always terminates.
pub const MAX_SUBDIVISION_DEPTH: u32 = 16;

/// Straight piece of a flattened outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vector,
    pub to: Vector,
}

impl LineSegment {
    /// Euclidean length of the piece.
    pub fn length(&self) -> f64 {
        self.to.sub(self.from).length()
    }
}

/// Output buffer used by the flattening routines.
pub type Segments = SmallVec<[LineSegment; 32]>;

/// Control polygon of a cubic Bézier.
#[derive(Debug, Clone, Copy)]
struct CubicHull([Vector; 4]);

impl CubicHull {
    /// De Casteljau split at `t = 0.5`.
    fn halves(self) -> (CubicHull, CubicHull) {
        let [p0, c1, c2, p3] = self.0;
        let (a, b, c) = (p0.lerp(c1, 0.5), c1.lerp(c2, 0.5), c2.lerp(p3, 0.5));
        let (ab, bc) = (a.lerp(b, 0.5), b.lerp(c, 0.5));
        let on_curve = ab.lerp(bc, 0.5);
        (
            CubicHull([p0, a, ab, on_curve]),
            CubicHull([on_curve, bc, c, p3]),
        )
    }

    /// Both control points lie within `tol` of the chord.
    fn is_flat(&self, tol: f64) -> bool {
        let [p0, c1, c2, p3] = self.0;
        let limit = tol * tol;
        point_line_distance_sq(c1, p0, p3) <= limit && point_line_distance_sq(c2, p0, p3) <= limit
    }

    fn chord(&self) -> LineSegment {
        LineSegment {
            from: self.0[0],
            to: self.0[3],
        }
    }
}

/// Flatten a quadratic curve by elevating it to a cubic.
pub fn flatten_quad(p0: Vector, c: Vector, p1: Vector, tolerance: f64, out: &mut Segments) {
    let c1 = p0.add(c.sub(p0).multiply(2.0 / 3.0));
    let c2 = p1.add(c.sub(p1).multiply(2.0 / 3.0));
    flatten_cubic(p0, c1, c2, p1, tolerance, out);
}

/// Flatten a cubic curve, halving it until each piece is within `tolerance`
/// of its chord or [`MAX_SUBDIVISION_DEPTH`] is reached.
pub fn flatten_cubic(
    p0: Vector,
    c1: Vector,
    c2: Vector,
    p3: Vector,
    tolerance: f64,
    out: &mut Segments,
) {
    subdivide(CubicHull([p0, c1, c2, p3]), tolerance, 0, out);
}

fn subdivide(hull: CubicHull, tolerance: f64, depth: u32, out: &mut Segments) {
    if depth >= MAX_SUBDIVISION_DEPTH || hull.is_flat(tolerance) {
        out.push(hull.chord());
        return;
    }
    let (left, right) = hull.halves();
    subdivide(left, tolerance, depth + 1, out);
    subdivide(right, tolerance, depth + 1, out);
}

/// Squared distance from `p` to the infinite line through `a` and `b`.
fn point_line_distance_sq(p: Vector, a: Vector, b: Vector) -> f64 {
    let chord = b.sub(a);
    let chord_sq = chord.dot(chord);
    let offset = p.sub(a);
    // Closed curves collapse the chord to a point.
    if chord_sq == 0.0 {
        return offset.dot(offset);
    }
    let cross = offset.x * chord.y - offset.y * chord.x;
    cross * cross / chord_sq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::anchor::cubic_point;

    #[test]
    fn halves_meet_on_curve() {
        let pts = [
            Vector::new(0.0, 0.0),
            Vector::new(10.0, 40.0),
            Vector::new(30.0, -20.0),
            Vector::new(40.0, 10.0),
        ];
        let (left, right) = CubicHull(pts).halves();
        let on_curve = cubic_point(pts[0], pts[1], pts[2], pts[3], 0.5);
        assert!(left.0[3].approx_eq(on_curve, 1e-12));
        assert_eq!(left.0[3], right.0[0]);
        assert_eq!(left.0[0], pts[0]);
        assert_eq!(right.0[3], pts[3]);
    }

    #[test]
    fn straight_cubic_is_one_segment() {
        let mut out = Segments::new();
        flatten_cubic(
            Vector::new(0.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::new(2.0, 0.0),
            Vector::new(3.0, 0.0),
            0.1,
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to, Vector::new(3.0, 0.0));
    }

    #[test]
    fn curved_quad_is_subdivided_and_connected() {
        let mut out = Segments::new();
        flatten_quad(
            Vector::new(0.0, 0.0),
            Vector::new(50.0, 100.0),
            Vector::new(100.0, 0.0),
            0.1,
            &mut out,
        );
        assert!(out.len() > 4);
        for pair in out.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        let total: f64 = out.iter().map(LineSegment::length).sum();
        assert!((total - 147.89428575453212).abs() < 0.5);
    }

    #[test]
    fn loop_curve_terminates() {
        let mut out = Segments::new();
        let p = Vector::new(5.0, 5.0);
        flatten_cubic(p, Vector::new(50.0, 0.0), Vector::new(0.0, 50.0), p, 0.0, &mut out);
        assert!(out.len() <= 1 << MAX_SUBDIVISION_DEPTH);
        assert!(out.len() > 1000);
    }
}
