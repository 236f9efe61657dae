// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: geometry primitives

mod anchor;
mod flatten;
mod path;
mod polygon;

pub use anchor::{Anchor, PathCursor};
pub use flatten::{flatten_cubic, flatten_quad, LineSegment, Segments, MAX_SUBDIVISION_DEPTH};
pub use path::Path;
pub use polygon::Polygon;
