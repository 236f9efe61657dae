// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: attribute maps handed to a markup renderer
//!
//! Shapes expose their screen-space values as name → string pairs. Number
//! formatting goes through [`NumberFormat`] so rounding policy lives in one
//! place.

use crate::geometry::{Anchor, Path, Polygon};
use crate::mixins::{Moveable, Styles};
use crate::shapes::{AnyShape, Ellipse, Line, Triangle};
use crate::types::Vector;
use std::collections::BTreeMap;

/// Attribute name → serialized value.
pub type AttributeMap = BTreeMap<&'static str, String>;

/// Serialization of floating point values.
pub trait NumberFormat {
    fn format(&self, value: f64) -> String;
}

/// Fixed number of decimals with trailing zeros trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPrecision {
    pub digits: usize,
}

impl Default for FixedPrecision {
    fn default() -> Self {
        Self { digits: 2 }
    }
}

impl NumberFormat for FixedPrecision {
    fn format(&self, value: f64) -> String {
        let mut s = format!("{:.*}", self.digits, value);
        if s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(trimmed);
        }
        if s == "-0" {
            s = "0".to_string();
        }
        s
    }
}

/// Shapes that can describe themselves to a renderer.
pub trait Attributes {
    fn attributes(&self, fmt: &dyn NumberFormat) -> AttributeMap;
}

fn join_points<'a>(points: impl IntoIterator<Item = &'a Vector>, fmt: &dyn NumberFormat) -> String {
    points
        .into_iter()
        .map(|v| format!("{} {}", fmt.format(v.x), fmt.format(v.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Transform for a shape whose geometry is relative to its position.
fn transform_attribute(m: &Moveable, translate: bool, fmt: &dyn NumberFormat, attrs: &mut AttributeMap) {
    let mut parts = Vec::new();
    if translate && (m.x != 0.0 || m.y != 0.0) {
        parts.push(format!("translate({} {})", fmt.format(m.x), fmt.format(m.y)));
    }
    if m.rotation != 0.0 {
        parts.push(format!(
            "rotate({} {} {})",
            fmt.format(m.rotation),
            fmt.format(m.rotation_x),
            fmt.format(m.rotation_y)
        ));
    }
    if !parts.is_empty() {
        attrs.insert("transform", parts.join(" "));
    }
}

fn style_attributes(styles: &Styles, fmt: &dyn NumberFormat, attrs: &mut AttributeMap) {
    let paint = |c: &Option<String>| c.clone().unwrap_or_else(|| "none".to_string());
    attrs.insert("fill", paint(&styles.fill));
    attrs.insert("stroke", paint(&styles.stroke));
    attrs.insert("stroke-width", fmt.format(styles.stroke_width));
}

impl Attributes for Ellipse {
    fn attributes(&self, fmt: &dyn NumberFormat) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.insert("cx", fmt.format(self.moveable.x));
        attrs.insert("cy", fmt.format(self.moveable.y));
        attrs.insert("rx", fmt.format(self.size.width / 2.0));
        attrs.insert("ry", fmt.format(self.size.height / 2.0));
        transform_attribute(&self.moveable, false, fmt, &mut attrs);
        style_attributes(&self.styles, fmt, &mut attrs);
        attrs
    }
}

impl Attributes for Line {
    fn attributes(&self, fmt: &dyn NumberFormat) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.insert("x1", fmt.format(self.moveable.x));
        attrs.insert("y1", fmt.format(self.moveable.y));
        attrs.insert("x2", fmt.format(self.end.x));
        attrs.insert("y2", fmt.format(self.end.y));
        transform_attribute(&self.moveable, false, fmt, &mut attrs);
        style_attributes(&self.styles, fmt, &mut attrs);
        attrs
    }
}

impl Attributes for Triangle {
    fn attributes(&self, fmt: &dyn NumberFormat) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.insert("points", join_points(&[Vector::ZERO, self.b, self.c], fmt));
        transform_attribute(&self.moveable, true, fmt, &mut attrs);
        style_attributes(&self.styles, fmt, &mut attrs);
        attrs
    }
}

impl Attributes for Polygon {
    fn attributes(&self, fmt: &dyn NumberFormat) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.insert("points", join_points(self.vertices(), fmt));
        transform_attribute(&self.moveable, true, fmt, &mut attrs);
        style_attributes(&self.styles, fmt, &mut attrs);
        attrs
    }
}

impl Attributes for Path {
    fn attributes(&self, fmt: &dyn NumberFormat) -> AttributeMap {
        let d = self
            .anchors()
            .iter()
            .map(|anchor| match anchor {
                Anchor::Move { .. } => format!("M {}", join_points(&anchor.points(), fmt)),
                Anchor::Line { .. } => format!("L {}", join_points(&anchor.points(), fmt)),
                Anchor::QuadCurve { .. } => format!("Q {}", join_points(&anchor.points(), fmt)),
                Anchor::CubicCurve { .. } => format!("C {}", join_points(&anchor.points(), fmt)),
                Anchor::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let mut attrs = AttributeMap::new();
        attrs.insert("d", d);
        transform_attribute(&self.moveable, true, fmt, &mut attrs);
        style_attributes(&self.styles, fmt, &mut attrs);
        attrs
    }
}

impl Attributes for AnyShape {
    fn attributes(&self, fmt: &dyn NumberFormat) -> AttributeMap {
        match self {
            AnyShape::Ellipse(s) => s.attributes(fmt),
            AnyShape::Line(s) => s.attributes(fmt),
            AnyShape::Triangle(s) => s.attributes(fmt),
            AnyShape::Polygon(s) => s.attributes(fmt),
            AnyShape::Path(s) => s.attributes(fmt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Transformable;

    #[test]
    fn fixed_precision_trims() {
        let fmt = FixedPrecision::default();
        assert_eq!(fmt.format(10.0), "10");
        assert_eq!(fmt.format(1.5), "1.5");
        assert_eq!(fmt.format(1.23456), "1.23");
        assert_eq!(fmt.format(-0.001), "0");
        assert_eq!(FixedPrecision { digits: 0 }.format(120.0), "120");
    }

    #[test]
    fn ellipse_attributes() {
        let e = Ellipse::new(10.0, 15.0, 300.0, 305.0);
        let attrs = e.attributes(&FixedPrecision::default());
        assert_eq!(attrs["cx"], "10");
        assert_eq!(attrs["rx"], "150");
        assert_eq!(attrs["ry"], "152.5");
        assert_eq!(attrs["fill"], "none");
        assert!(!attrs.contains_key("transform"));
    }

    #[test]
    fn triangle_points_and_transform() {
        let mut t = Triangle::new(10.0, 15.0, 30.0, 15.0, 10.0, 45.0);
        t.rotate(45.0, Some(Vector::new(1.0, 2.0)), false);
        let attrs = t.attributes(&FixedPrecision::default());
        assert_eq!(attrs["points"], "0 0 20 0 0 30");
        assert_eq!(attrs["transform"], "translate(10 15) rotate(45 1 2)");
    }

    #[test]
    fn path_data() {
        let mut p = Path::new(0.0, 0.0);
        p.move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .curve_to(10.0, 10.0, 0.0, 10.0)
            .close();
        let attrs = AnyShape::from(p).attributes(&FixedPrecision::default());
        assert_eq!(attrs["d"], "M 0 0 L 10 0 Q 10 10 0 10 Z");
    }
}
