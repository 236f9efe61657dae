// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: type definitions

use crate::error::{GeometryError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// 2D vector used throughout the crate as both point and direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Vector {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Vector {
    /// The origin.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Create a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub fn add(self, v: Vector) -> Vector {
        Vector::new(self.x + v.x, self.y + v.y)
    }

    /// Component-wise difference.
    pub fn sub(self, v: Vector) -> Vector {
        Vector::new(self.x - v.x, self.y - v.y)
    }

    /// Scale both components.
    pub fn multiply(self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar)
    }

    /// Divide both components.
    pub fn divide(self, scalar: f64) -> Vector {
        Vector::new(self.x / scalar, self.y / scalar)
    }

    /// Dot product.
    pub fn dot(self, v: Vector) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Euclidean norm.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, v: Vector) -> f64 {
        v.sub(self).length()
    }

    /// Unit vector pointing in the same direction.
    ///
    /// Fails with [`GeometryError::DegenerateGeometry`] for the zero vector.
    pub fn normalize(self) -> Result<Vector> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Err(GeometryError::DegenerateGeometry(
                "cannot normalize a zero-length vector",
            ));
        }
        Ok(self.divide(len))
    }

    /// Linear interpolation towards `v` by factor `t`.
    pub fn lerp(self, v: Vector, t: f64) -> Vector {
        Vector::new(self.x + (v.x - self.x) * t, self.y + (v.y - self.y) * t)
    }

    /// Component-wise comparison within an absolute tolerance.
    pub fn approx_eq(self, v: Vector, eps: f64) -> bool {
        (self.x - v.x).abs() <= eps && (self.y - v.y).abs() <= eps
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::sub(self, rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.multiply(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
