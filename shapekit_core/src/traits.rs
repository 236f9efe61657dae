// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: shape capabilities

use crate::geometry::Polygon;
use crate::mixins::Mixins;
use crate::options::TessellationOptions;
use crate::types::Vector;
use std::borrow::Cow;

/// In-place geometric transforms.
///
/// Translation and rotation act on the shared [`Moveable`](crate::mixins::Moveable)
/// state unless a shape needs to keep more of itself in sync.
pub trait Transformable: Mixins {
    /// Move to `(x, y)`, or by `(x, y)` when `relative` is set.
    fn translate(&mut self, x: f64, y: f64, relative: bool) {
        self.moveable_mut().translate(x, y, relative);
    }

    /// Set the rotation in degrees around an optional pivot.
    fn rotate(&mut self, deg: f64, pivot: Option<Vector>, relative: bool) {
        self.moveable_mut().rotate(deg, pivot, relative);
    }

    /// Scale the shape's own dimensions and its stroke.
    fn scale(&mut self, scalar: f64);
}

/// Conversion of a shape boundary into an explicit polygon.
pub trait Tessellate {
    /// Polygon approximating this shape's boundary.
    ///
    /// Polygons without resampling hand back themselves as
    /// [`Cow::Borrowed`]; every other shape produces an owned polygon.
    fn to_polygon(&self, opts: &TessellationOptions) -> Cow<'_, Polygon>;
}
