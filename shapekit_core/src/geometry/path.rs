// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: vector path representation

use super::anchor::{Anchor, PathCursor};
use super::flatten::{flatten_cubic, flatten_quad, LineSegment, Segments};
use super::polygon::Polygon;
use crate::error::{GeometryError, Result};
use crate::mixins::{copy_mixin_state, impl_mixins, Moveable, Styles};
use crate::options::TessellationOptions;
use crate::traits::{Tessellate, Transformable};
use crate::types::Vector;
use std::borrow::Cow;

/// A sequence of [`Anchor`]s forming a vector path.
///
/// Anchor coordinates are relative to the path origin. Drawing starts at
/// `(0, 0)` until the first move.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Path {
    /// Origin and rotation
    pub moveable: Moveable,
    /// Paint state
    pub styles: Styles,
    anchors: Vec<Anchor>,
}

impl_mixins!(Path);

impl Path {
    /// Create a new empty path with its origin at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            moveable: Moveable::at(x, y),
            ..Self::default()
        }
    }

    /// Anchors in drawing order.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Append an arbitrary anchor.
    pub fn push(&mut self, anchor: Anchor) -> &mut Self {
        self.anchors.push(anchor);
        self
    }

    /// Append a move command.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Anchor::move_to(x, y))
    }

    /// Append a line command.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Anchor::line_to(x, y))
    }

    /// Append a quadratic Bézier curve command.
    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.push(Anchor::quad_to(x1, y1, x2, y2))
    }

    /// Append a cubic Bézier curve command.
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.push(Anchor::cubic_to(x1, y1, x2, y2, x3, y3))
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.push(Anchor::Close)
    }

    /// Anchors paired with the cursor they are drawn from.
    pub fn segments(&self) -> impl Iterator<Item = (PathCursor, &Anchor)> + '_ {
        self.anchors.iter().scan(PathCursor::default(), |cursor, anchor| {
            let from = *cursor;
            *cursor = anchor.end_point(from);
            Some((from, anchor))
        })
    }

    /// Total drawn length, closing lines included.
    pub fn length(&self) -> f64 {
        self.segments()
            .map(|(cursor, anchor)| drawn_length(anchor, cursor))
            .sum()
    }

    /// Point `len` units along the drawn outline.
    ///
    /// Lengths past the end wrap to the start of the first subpath.
    pub fn vector_at_length(&self, len: f64) -> Result<Vector> {
        let mut first = None;
        let mut walked = 0.0;
        for (cursor, anchor) in self.segments() {
            if matches!(anchor, Anchor::Move { .. }) {
                continue;
            }
            first.get_or_insert(cursor.current);
            let seg_len = drawn_length(anchor, cursor);
            if walked + seg_len > len {
                let remaining = len - walked;
                let t = match anchor {
                    Anchor::Close => remaining / seg_len,
                    _ => anchor.parameter_at_length(cursor, remaining),
                };
                return anchor.vector_at_from(cursor, t);
            }
            walked += seg_len;
        }
        first.ok_or(GeometryError::DegenerateGeometry(
            "path has nothing drawable",
        ))
    }

    /// Point at `scalar` of the total length.
    pub fn vector_at(&self, scalar: f64) -> Result<Vector> {
        self.vector_at_length(self.length() * scalar)
    }

    /// Flatten the path into line segments using recursive subdivision of curves.
    pub fn flatten(&self, tolerance: f64) -> Segments {
        let mut result = Segments::new();
        for (cursor, anchor) in self.segments() {
            flatten_anchor(anchor, cursor, tolerance, &mut result);
        }
        result
    }

    /// One polygon per subpath. A subpath ends at a move or a close.
    ///
    /// Curves are flattened with the configured tolerance; with a spacing the
    /// flattened outline is resampled as a closed loop.
    pub fn to_polygons(&self, opts: &TessellationOptions) -> Vec<Polygon> {
        let mut outlines: Vec<Vec<Vector>> = Vec::new();
        let mut current: Vec<Vector> = Vec::new();
        for (cursor, anchor) in self.segments() {
            if matches!(anchor, Anchor::Move { .. }) {
                if current.len() > 1 {
                    outlines.push(std::mem::take(&mut current));
                }
                current.clear();
                continue;
            }
            let mut segs = Segments::new();
            flatten_anchor(anchor, cursor, opts.flatten_tolerance, &mut segs);
            for seg in segs {
                if current.is_empty() {
                    current.push(seg.from);
                }
                current.push(seg.to);
            }
            // Drawing after a close starts a new subpath at the same start point.
            if matches!(anchor, Anchor::Close) && current.len() > 1 {
                outlines.push(std::mem::take(&mut current));
            }
        }
        if current.len() > 1 {
            outlines.push(current);
        }

        let polys: Vec<Polygon> = outlines
            .into_iter()
            .map(|mut vertices| {
                if vertices.len() > 1 && vertices.last() == vertices.first() {
                    vertices.pop();
                }
                let mut poly =
                    Polygon::from_vertices(self.moveable.x, self.moveable.y, vertices);
                copy_mixin_state(self, &mut poly);
                match opts.effective_spacing() {
                    Some(spacing) => poly.resample(spacing),
                    None => poly,
                }
            })
            .collect();
        log::trace!(
            "path with {} anchors produced {} polygons",
            self.anchors.len(),
            polys.len()
        );
        polys
    }
}

/// Length an anchor adds to the outline; a close draws back to the subpath start.
fn drawn_length(anchor: &Anchor, cursor: PathCursor) -> f64 {
    match anchor {
        Anchor::Close => cursor.start.sub(cursor.current).length(),
        _ => anchor.length_from(cursor),
    }
}

fn flatten_anchor(anchor: &Anchor, cursor: PathCursor, tolerance: f64, out: &mut Segments) {
    let current = cursor.current;
    match *anchor {
        Anchor::Move { .. } => {}
        Anchor::Line { target } => out.push(LineSegment {
            from: current,
            to: target,
        }),
        Anchor::QuadCurve { control, target } => {
            flatten_quad(current, control, target, tolerance, out)
        }
        Anchor::CubicCurve {
            control1,
            control2,
            target,
        } => flatten_cubic(current, control1, control2, target, tolerance, out),
        Anchor::Close => {
            if current != cursor.start {
                out.push(LineSegment {
                    from: current,
                    to: cursor.start,
                });
            }
        }
    }
}

impl Transformable for Path {
    fn scale(&mut self, scalar: f64) {
        for anchor in &mut self.anchors {
            *anchor = anchor.multiply(scalar);
        }
        self.styles.scale_styles(scalar);
    }
}

impl Tessellate for Path {
    /// Polygon of the first subpath; see [`Path::to_polygons`] for all of them.
    fn to_polygon(&self, opts: &TessellationOptions) -> Cow<'_, Polygon> {
        let poly = self.to_polygons(opts).into_iter().next().unwrap_or_else(|| {
            let mut empty = Polygon::new(self.moveable.x, self.moveable.y);
            copy_mixin_state(self, &mut empty);
            empty
        });
        Cow::Owned(poly)
    }
}
