// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: geometry error kinds

use thiserror::Error;

/// Failures raised synchronously by the geometry core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Operation is not legal for the current value state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// Operation is not defined for this variant.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    /// Input geometry is too degenerate to produce a result.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = GeometryError::UnsupportedOperation("cannot evaluate position for this anchor kind");
        assert_eq!(
            err.to_string(),
            "unsupported operation: cannot evaluate position for this anchor kind"
        );
        assert_ne!(err, GeometryError::InvalidState("x"));
    }
}
