// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: drawable shape primitives

mod ellipse;
mod line;
mod triangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use triangle::Triangle;

use crate::geometry::{Path, Polygon};
use crate::mixins::{Mixins, Moveable, Styles};
use crate::options::TessellationOptions;
use crate::traits::{Tessellate, Transformable};
use crate::types::Vector;
use std::borrow::Cow;

/// Any drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Ellipse(Ellipse),
    Line(Line),
    Triangle(Triangle),
    Polygon(Polygon),
    Path(Path),
}

macro_rules! dispatch {
    ($self:expr, $shape:ident => $body:expr) => {
        match $self {
            AnyShape::Ellipse($shape) => $body,
            AnyShape::Line($shape) => $body,
            AnyShape::Triangle($shape) => $body,
            AnyShape::Polygon($shape) => $body,
            AnyShape::Path($shape) => $body,
        }
    };
}

impl AnyShape {
    /// Lowercase kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyShape::Ellipse(_) => "ellipse",
            AnyShape::Line(_) => "line",
            AnyShape::Triangle(_) => "triangle",
            AnyShape::Polygon(_) => "polygon",
            AnyShape::Path(_) => "path",
        }
    }
}

impl Mixins for AnyShape {
    fn moveable(&self) -> &Moveable {
        dispatch!(self, s => s.moveable())
    }
    fn moveable_mut(&mut self) -> &mut Moveable {
        dispatch!(self, s => s.moveable_mut())
    }
    fn styles(&self) -> &Styles {
        dispatch!(self, s => s.styles())
    }
    fn styles_mut(&mut self) -> &mut Styles {
        dispatch!(self, s => s.styles_mut())
    }
}

impl Transformable for AnyShape {
    fn translate(&mut self, x: f64, y: f64, relative: bool) {
        dispatch!(self, s => s.translate(x, y, relative))
    }
    fn rotate(&mut self, deg: f64, pivot: Option<Vector>, relative: bool) {
        dispatch!(self, s => s.rotate(deg, pivot, relative))
    }
    fn scale(&mut self, scalar: f64) {
        dispatch!(self, s => s.scale(scalar))
    }
}

impl Tessellate for AnyShape {
    fn to_polygon(&self, opts: &TessellationOptions) -> Cow<'_, Polygon> {
        dispatch!(self, s => s.to_polygon(opts))
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(impl From<$variant> for AnyShape {
            fn from(shape: $variant) -> Self {
                AnyShape::$variant(shape)
            }
        })*
    };
}

impl_from!(Ellipse, Line, Triangle, Polygon, Path);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_dispatches_line_override() {
        let mut shape = AnyShape::from(Line::new(0.0, 0.0, 10.0, 0.0));
        shape.translate(5.0, 5.0, false);
        match &shape {
            AnyShape::Line(line) => assert_eq!(line.end, Vector::new(15.0, 5.0)),
            other => panic!("unexpected {}", other.kind()),
        }
    }

    #[test]
    fn heterogeneous_tessellation() {
        let shapes: Vec<AnyShape> = vec![
            Ellipse::new(0.0, 0.0, 10.0, 10.0).into(),
            Triangle::new(0.0, 0.0, 10.0, 0.0, 0.0, 10.0).into(),
            Line::new(0.0, 0.0, 3.0, 4.0).into(),
        ];
        let counts: Vec<usize> = shapes
            .iter()
            .map(|s| s.to_polygon(&TessellationOptions::default()).len())
            .collect();
        assert_eq!(counts, vec![16, 3, 2]);
    }

    #[test]
    fn rotate_through_enum() {
        let mut shape = AnyShape::from(Polygon::new(1.0, 2.0));
        shape.rotate(30.0, Some(Vector::new(1.0, 1.0)), true);
        assert_eq!(shape.moveable().rotation, 30.0);
        assert_eq!(shape.moveable().rotation_x, 2.0);
        assert_eq!(shape.kind(), "polygon");
    }
}
