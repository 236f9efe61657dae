// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: state shared by every shape
//!
//! Shapes embed these structs as named fields and expose them through
//! [`Mixins`] so generic code can copy or transform any shape.

use crate::types::Vector;
use serde::{Deserialize, Serialize};

/// Position and rotation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Moveable {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees
    pub rotation: f64,
    /// Rotation pivot
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl Moveable {
    /// Unrotated position at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Current position as a vector.
    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Move to `(x, y)`, or by `(x, y)` when `relative` is set.
    pub fn translate(&mut self, x: f64, y: f64, relative: bool) {
        if relative {
            self.x += x;
            self.y += y;
        } else {
            self.x = x;
            self.y = y;
        }
    }

    /// Set the rotation and optionally its pivot.
    ///
    /// A relative pivot is offset by the current position.
    pub fn rotate(&mut self, deg: f64, pivot: Option<Vector>, relative: bool) {
        self.rotation = deg;
        if let Some(p) = pivot {
            self.rotation_x = p.x;
            self.rotation_y = p.y;
        }
        if relative {
            self.rotation_x += self.x;
            self.rotation_y += self.y;
        }
    }
}

/// Paint state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    /// Fill color, `None` for no fill
    pub fill: Option<String>,
    /// Stroke color, `None` for no stroke
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl Styles {
    /// Scale the stroke width.
    pub fn scale_styles(&mut self, scalar: f64) {
        self.stroke_width *= scalar;
    }
}

/// Width and height of box-like shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sizeable {
    pub width: f64,
    pub height: f64,
}

impl Sizeable {
    /// Box of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale both dimensions.
    pub fn scale_box(&mut self, scalar: f64) {
        self.width *= scalar;
        self.height *= scalar;
    }
}

/// Access to the shared state embedded in a shape.
pub trait Mixins {
    fn moveable(&self) -> &Moveable;
    fn moveable_mut(&mut self) -> &mut Moveable;
    fn styles(&self) -> &Styles;
    fn styles_mut(&mut self) -> &mut Styles;
}

/// Copy position, rotation and paint state from `src` onto `dst`.
pub fn copy_mixin_state<S, D>(src: &S, dst: &mut D)
where
    S: Mixins + ?Sized,
    D: Mixins + ?Sized,
{
    *dst.moveable_mut() = *src.moveable();
    *dst.styles_mut() = src.styles().clone();
}

/// Implement [`Mixins`] for a struct with `moveable` and `styles` fields.
macro_rules! impl_mixins {
    ($ty:ty) => {
        impl $crate::mixins::Mixins for $ty {
            fn moveable(&self) -> &$crate::mixins::Moveable {
                &self.moveable
            }
            fn moveable_mut(&mut self) -> &mut $crate::mixins::Moveable {
                &mut self.moveable
            }
            fn styles(&self) -> &$crate::mixins::Styles {
                &self.styles
            }
            fn styles_mut(&mut self) -> &mut $crate::mixins::Styles {
                &mut self.styles
            }
        }
    };
}
pub(crate) use impl_mixins;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_absolute_and_relative() {
        let mut m = Moveable::at(10.0, 15.0);
        m.translate(5.0, 5.0, true);
        assert_eq!(m.position(), Vector::new(15.0, 20.0));
        m.translate(1.0, 2.0, false);
        assert_eq!(m.position(), Vector::new(1.0, 2.0));
    }

    #[test]
    fn rotate_with_relative_pivot() {
        let mut m = Moveable::at(10.0, 15.0);
        m.rotate(45.0, Some(Vector::new(100.0, 105.0)), true);
        assert_eq!(m.rotation, 45.0);
        assert_eq!((m.rotation_x, m.rotation_y), (110.0, 120.0));

        m.rotate(90.0, None, false);
        assert_eq!(m.rotation, 90.0);
        assert_eq!((m.rotation_x, m.rotation_y), (110.0, 120.0));
    }

    #[test]
    fn scale_styles_and_box() {
        let mut s = Styles {
            stroke_width: 2.0,
            ..Styles::default()
        };
        s.scale_styles(3.0);
        assert_eq!(s.stroke_width, 6.0);

        let mut b = Sizeable::new(10.0, 20.0);
        b.scale_box(0.5);
        assert_eq!(b, Sizeable::new(5.0, 10.0));
    }
}
