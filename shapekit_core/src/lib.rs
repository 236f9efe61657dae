// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: 2D vector shape geometry core
//!
//! Shapes are built from raw numbers, transformed in place and converted to
//! [`geometry::Polygon`]s when they need to be measured or sampled.

pub mod attributes;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod mixins;
pub mod options;
pub mod shapes;
pub mod traits;
pub mod types;

pub use error::{GeometryError, Result};
pub use geometry::{Anchor, Path, PathCursor, Polygon};
pub use options::{TessellationOptions, DEFAULT_NUM_VECTORS};
pub use shapes::{AnyShape, Ellipse, Line, Triangle};
pub use traits::{Tessellate, Transformable};
pub use types::{Bounds, Vector};
