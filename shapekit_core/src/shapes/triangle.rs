// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: triangle primitive

use crate::geometry::Polygon;
use crate::mixins::{copy_mixin_state, impl_mixins, Moveable, Styles};
use crate::options::TessellationOptions;
use crate::traits::{Tessellate, Transformable};
use crate::types::Vector;
use std::borrow::Cow;

/// Triangle whose first corner is its position.
///
/// The other two corners are stored relative to the first so that moving and
/// rotating only touch the position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangle {
    pub moveable: Moveable,
    pub styles: Styles,
    /// Second corner relative to the first
    pub b: Vector,
    /// Third corner relative to the first
    pub c: Vector,
}

impl_mixins!(Triangle);

impl Triangle {
    /// Create from three absolute corners.
    pub fn new(x: f64, y: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self {
            moveable: Moveable::at(x, y),
            styles: Styles::default(),
            b: Vector::new(x2 - x, y2 - y),
            c: Vector::new(x3 - x, y3 - y),
        }
    }

    /// Corners in absolute coordinates, ignoring rotation.
    pub fn corners(&self) -> [Vector; 3] {
        let origin = self.moveable.position();
        [origin, origin.add(self.b), origin.add(self.c)]
    }
}

impl Transformable for Triangle {
    fn scale(&mut self, scalar: f64) {
        self.b = self.b.multiply(scalar);
        self.c = self.c.multiply(scalar);
        self.styles.scale_styles(scalar);
    }
}

impl Tessellate for Triangle {
    fn to_polygon(&self, opts: &TessellationOptions) -> Cow<'_, Polygon> {
        let vertices = vec![Vector::ZERO, self.b, self.c];
        let mut poly = Polygon::from_vertices(self.moveable.x, self.moveable.y, vertices);
        copy_mixin_state(self, &mut poly);
        match opts.effective_spacing() {
            Some(spacing) => Cow::Owned(poly.resample(spacing)),
            None => Cow::Owned(poly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Triangle {
        Triangle::new(10.0, 15.0, 30.0, 15.0, 10.0, 45.0)
    }

    #[test]
    fn corners_relative_to_origin() {
        let t = tri();
        assert_eq!(t.b, Vector::new(20.0, 0.0));
        assert_eq!(t.c, Vector::new(0.0, 30.0));
        assert_eq!(t.corners()[2], Vector::new(10.0, 45.0));
    }

    #[test]
    fn translate_moves_whole_triangle() {
        let mut t = tri();
        t.translate(5.0, 5.0, true);
        assert_eq!(
            t.corners(),
            [
                Vector::new(15.0, 20.0),
                Vector::new(35.0, 20.0),
                Vector::new(15.0, 50.0)
            ]
        );
    }

    #[test]
    fn scale_relative_corners() {
        let mut t = tri();
        t.scale(2.0);
        assert_eq!(t.b, Vector::new(40.0, 0.0));
        assert_eq!(t.c, Vector::new(0.0, 60.0));
        assert_eq!(t.moveable.position(), Vector::new(10.0, 15.0));
    }

    #[test]
    fn polygon_measurements() {
        let t = tri();
        let poly = t.to_polygon(&TessellationOptions::default());
        assert_eq!(poly.len(), 3);
        assert!((poly.length() - (20.0 + 30.0 + 1300f64.sqrt())).abs() < 1e-9);
        let c = poly.centroid().unwrap();
        assert!(c.approx_eq(Vector::new(10.0 + 20.0 / 3.0, 15.0 + 10.0), 1e-9));

        let sampled = t.to_polygon(&TessellationOptions::with_spacing(10.0));
        assert_eq!(sampled.len(), 8);
    }
}
