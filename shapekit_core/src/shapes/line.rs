// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: line primitive

use crate::geometry::Polygon;
use crate::mixins::{copy_mixin_state, impl_mixins, Moveable, Styles};
use crate::options::TessellationOptions;
use crate::traits::{Tessellate, Transformable};
use crate::types::Vector;
use std::borrow::Cow;

/// Straight line from its position to an absolute end point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// Start point and rotation
    pub moveable: Moveable,
    pub styles: Styles,
    /// Absolute end point
    pub end: Vector,
}

impl_mixins!(Line);

impl Line {
    /// Line from `(x, y)` to the absolute point `(x2, y2)`.
    pub fn new(x: f64, y: f64, x2: f64, y2: f64) -> Self {
        Self {
            moveable: Moveable::at(x, y),
            styles: Styles::default(),
            end: Vector::new(x2, y2),
        }
    }

    /// Absolute start point.
    pub fn start(&self) -> Vector {
        self.moveable.position()
    }

    /// Distance between the end points.
    pub fn length(&self) -> f64 {
        self.end.sub(self.start()).length()
    }
}

impl Transformable for Line {
    /// Moves both end points, keeping length and direction.
    fn translate(&mut self, x: f64, y: f64, relative: bool) {
        let change = self.end.sub(self.start());
        self.moveable.translate(x, y, relative);
        self.end = self.start().add(change);
    }

    /// Scales the end point away from the fixed start point.
    fn scale(&mut self, scalar: f64) {
        let start = self.start();
        self.end = self.end.sub(start).multiply(scalar).add(start);
        self.styles.scale_styles(scalar);
    }
}

impl Tessellate for Line {
    fn to_polygon(&self, opts: &TessellationOptions) -> Cow<'_, Polygon> {
        let vertices = vec![Vector::ZERO, self.end.sub(self.start())];
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

    #[test]
    fn scale_moves_second_point_only() {
        let mut line = Line::new(0.0, 0.0, 10.0, 0.0);
        line.scale(2.0);
        assert_eq!(line.start(), Vector::new(0.0, 0.0));
        assert_eq!(line.end, Vector::new(20.0, 0.0));
        line.translate(5.0, 5.0, true);
        assert_eq!(line.start(), Vector::new(5.0, 5.0));
        assert_eq!(line.end, Vector::new(25.0, 5.0));
    }

    #[test]
    fn absolute_move_keeps_vector() {
        let mut line = Line::new(10.0, 15.0, 20.0, 25.0);
        line.translate(100.0, 100.0, false);
        assert_eq!(line.start(), Vector::new(100.0, 100.0));
        assert_eq!(line.end, Vector::new(110.0, 110.0));
    }

    #[test]
    fn scale_from_offset_start() {
        let mut line = Line::new(10.0, 15.0, 20.0, 25.0);
        line.scale(0.5);
        assert_eq!(line.end, Vector::new(15.0, 20.0));
        assert_eq!(line.styles.stroke_width, 0.5);
    }

    #[test]
    fn polygon_is_there_and_back() {
        let line = Line::new(10.0, 15.0, 20.0, 15.0);
        let poly = line.to_polygon(&TessellationOptions::default());
        assert_eq!(poly.vertices(), &[Vector::ZERO, Vector::new(10.0, 0.0)]);
        assert_eq!(poly.origin(), Vector::new(10.0, 15.0));
        assert_eq!(poly.length(), 2.0 * line.length());

        let sampled = line.to_polygon(&TessellationOptions::with_spacing(5.0));
        assert_eq!(sampled.len(), 4);
        assert_eq!(sampled.vertices()[3], Vector::new(5.0, 0.0));
    }

    #[test]
    fn copy_is_independent() {
        let line = Line::new(0.0, 0.0, 10.0, 0.0);
        let mut copy = line.clone();
        copy.scale(3.0);
        assert_eq!(line.end, Vector::new(10.0, 0.0));
        assert_eq!(copy.end, Vector::new(30.0, 0.0));
    }
}
