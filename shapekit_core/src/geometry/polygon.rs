// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: closed polygon engine

use crate::error::{GeometryError, Result};
use crate::mixins::{copy_mixin_state, impl_mixins, Moveable, Styles};
use crate::options::{TessellationOptions, MAX_SAMPLE_COUNT};
use crate::traits::{Tessellate, Transformable};
use crate::types::{Bounds, Vector};
use std::borrow::Cow;

/// An ordered, implicitly closed loop of vertices relative to an origin.
///
/// Edge `i` runs from `vertices[i]` to `vertices[(i + 1) % n]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// Origin and rotation
    pub moveable: Moveable,
    /// Paint state
    pub styles: Styles,
    vertices: Vec<Vector>,
}

impl_mixins!(Polygon);

impl Polygon {
    /// Create an empty polygon with its origin at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            moveable: Moveable::at(x, y),
            ..Self::default()
        }
    }

    /// Create a polygon from vertices taken as-is.
    pub fn from_vertices(x: f64, y: f64, vertices: Vec<Vector>) -> Self {
        Self {
            vertices,
            ..Self::new(x, y)
        }
    }

    /// Position the vertices are relative to.
    pub fn origin(&self) -> Vector {
        self.moveable.position()
    }

    /// Vertices relative to the origin.
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex.
    ///
    /// The boundary of a polygon always passes through its origin: when the
    /// first appended point is not `(0, 0)`, an origin vertex is pushed first.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        if self.vertices.is_empty() && (x != 0.0 || y != 0.0) {
            self.vertices.push(Vector::ZERO);
        }
        self.vertices.push(Vector::new(x, y));
        self
    }

    /// Set the starting vertex of an empty polygon.
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        if !self.vertices.is_empty() {
            return Err(GeometryError::InvalidState(
                "move_to can only be used on an empty polygon",
            ));
        }
        self.vertices.push(Vector::new(x, y));
        Ok(self)
    }

    /// Iterate `(start, end)` pairs over every edge of the closed loop.
    pub fn loop_vectors(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Perimeter of the closed loop.
    pub fn length(&self) -> f64 {
        self.loop_vectors()
            .map(|(start, stop)| stop.sub(start).length())
            .sum()
    }

    /// Point `len` units along the boundary, starting at the first vertex.
    ///
    /// Lengths at or past the perimeter wrap to the first vertex.
    pub fn vector_at_length(&self, len: f64) -> Result<Vector> {
        let first = *self.vertices.first().ok_or(GeometryError::DegenerateGeometry(
            "polygon has no vertices",
        ))?;
        let mut walked = 0.0;
        for (start, stop) in self.loop_vectors() {
            let edge = stop.sub(start);
            let edge_len = edge.length();
            if walked + edge_len > len {
                let remaining = len - walked;
                return Ok(start.add(edge.normalize()?.multiply(remaining)));
            }
            walked += edge_len;
        }
        Ok(first)
    }

    /// Point at `scalar` of the perimeter, usually within `[0, 1]`.
    pub fn vector_at(&self, scalar: f64) -> Result<Vector> {
        self.vector_at_length(self.length() * scalar)
    }

    /// Axis-aligned bounds offset by the origin.
    ///
    /// The extent is seeded at `0`, so the local origin is always inside the
    /// box even when every vertex lies to one side of it.
    pub fn bounds(&self) -> Bounds {
        let (mut xmin, mut ymin, mut xmax, mut ymax) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for v in &self.vertices {
            xmin = xmin.min(v.x);
            xmax = xmax.max(v.x);
            ymin = ymin.min(v.y);
            ymax = ymax.max(v.y);
        }
        Bounds {
            x: self.moveable.x + xmin,
            y: self.moveable.y + ymin,
            width: xmax - xmin,
            height: ymax - ymin,
        }
    }

    /// Area centroid offset by the origin.
    ///
    /// Sums consecutive vertex pairs only; the closing edge back to the first
    /// vertex is left out. For polygons starting at the origin (anything
    /// built with [`line_to`](Self::line_to)) that edge contributes nothing.
    pub fn centroid(&self) -> Result<Vector> {
        let pairs = self.vertices.windows(2).map(|w| (w[0], w[1]));
        self.shoelace(pairs)
    }

    /// Area centroid over every edge of the closed loop.
    pub fn closed_centroid(&self) -> Result<Vector> {
        self.shoelace(self.loop_vectors())
    }

    fn shoelace(&self, pairs: impl Iterator<Item = (Vector, Vector)>) -> Result<Vector> {
        let mut area = 0.0;
        let mut x_acc = 0.0;
        let mut y_acc = 0.0;
        for (a, b) in pairs {
            let cross = a.x * b.y - b.x * a.y;
            area += cross;
            x_acc += (a.x + b.x) * cross;
            y_acc += (a.y + b.y) * cross;
        }
        area /= 2.0;
        // Area tolerance scales with the squared extent.
        let extent = self.bounds();
        let extent = extent.width.max(extent.height);
        if area.abs() <= f64::EPSILON * extent * extent || !area.is_finite() {
            return Err(GeometryError::DegenerateGeometry(
                "centroid of a polygon without area",
            ));
        }
        Ok(Vector::new(
            self.moveable.x + x_acc / (6.0 * area),
            self.moveable.y + y_acc / (6.0 * area),
        ))
    }

    /// Resample the boundary every `spacing` units.
    ///
    /// The vertex count is the perimeter divided by `spacing`, truncated and
    /// capped at [`MAX_SAMPLE_COUNT`].
    pub fn resample(&self, spacing: f64) -> Polygon {
        let count = ((self.length() / spacing) as usize).min(MAX_SAMPLE_COUNT);
        let mut vertices = Vec::with_capacity(count);
        for i in 0..count {
            match self.vector_at_length(i as f64 * spacing) {
                Ok(v) => vertices.push(v),
                Err(err) => {
                    log::warn!("stopping polygon resample at vertex {i}: {err}");
                    break;
                }
            }
        }
        log::trace!(
            "resampled polygon from {} to {} vertices",
            self.vertices.len(),
            vertices.len()
        );
        let mut poly = Polygon::from_vertices(self.moveable.x, self.moveable.y, vertices);
        copy_mixin_state(self, &mut poly);
        poly
    }
}

impl Transformable for Polygon {
    fn scale(&mut self, scalar: f64) {
        for v in &mut self.vertices {
            *v = v.multiply(scalar);
        }
        self.styles.scale_styles(scalar);
    }
}

impl Tessellate for Polygon {
    fn to_polygon(&self, opts: &TessellationOptions) -> Cow<'_, Polygon> {
        match opts.effective_spacing() {
            Some(spacing) => Cow::Owned(self.resample(spacing)),
            None => Cow::Borrowed(self),
        }
    }
}
