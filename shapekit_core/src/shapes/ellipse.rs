// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: ellipse primitive

use crate::geometry::Polygon;
use crate::mixins::{copy_mixin_state, impl_mixins, Moveable, Sizeable, Styles};
use crate::options::TessellationOptions;
use crate::traits::{Tessellate, Transformable};
use crate::types::Vector;
use std::borrow::Cow;
use std::f64::consts::PI;

/// Ellipse centered on its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ellipse {
    /// Center and rotation
    pub moveable: Moveable,
    pub size: Sizeable,
    pub styles: Styles,
}

impl_mixins!(Ellipse);

impl Ellipse {
    /// Ellipse centered at `(x, y)` with the given box size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            moveable: Moveable::at(x, y),
            size: Sizeable::new(width, height),
            styles: Styles::default(),
        }
    }

    /// Approximate circumference used to derive sample counts.
    ///
    /// This is `π(w + h)`, not the exact ellipse perimeter.
    pub fn circumference(&self) -> f64 {
        PI * (self.size.width + self.size.height)
    }

    /// Number of boundary samples for the given options.
    pub fn num_vectors(&self, opts: &TessellationOptions) -> usize {
        opts.sample_count(self.circumference())
            .unwrap_or(opts.num_vectors)
    }
}

impl Transformable for Ellipse {
    fn scale(&mut self, scalar: f64) {
        self.size.scale_box(scalar);
        self.styles.scale_styles(scalar);
    }
}

impl Tessellate for Ellipse {
    fn to_polygon(&self, opts: &TessellationOptions) -> Cow<'_, Polygon> {
        let count = self.num_vectors(opts);
        let step = if count > 0 { 360.0 / count as f64 } else { 0.0 };
        let vertices = (0..count)
            .map(|i| {
                let (sin, cos) = (i as f64 * step).to_radians().sin_cos();
                Vector::new(cos * self.size.width, sin * self.size.height)
            })
            .collect();
        let mut poly = Polygon::from_vertices(self.moveable.x, self.moveable.y, vertices);
        copy_mixin_state(self, &mut poly);
        log::trace!("ellipse tessellated into {count} vertices");
        Cow::Owned(poly)
    }
}
