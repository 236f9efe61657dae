// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: tessellation configuration

use serde::{Deserialize, Serialize};

/// Vertex count used for curved shapes when no spacing is requested.
pub const DEFAULT_NUM_VECTORS: usize = 16;

/// Default flatness tolerance for curve flattening.
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.25;

/// Upper bound on vertices produced by spacing-based resampling.
pub const MAX_SAMPLE_COUNT: usize = 1 << 20;

/// Options controlling shape to polygon conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationOptions {
    /// Target distance between consecutive vertices
    pub spacing: Option<f64>,
    /// Vertex count for curved shapes without spacing
    pub num_vectors: usize,
    /// Maximum control point deviation accepted when flattening curves
    pub flatten_tolerance: f64,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            spacing: None,
            num_vectors: DEFAULT_NUM_VECTORS,
            flatten_tolerance: DEFAULT_FLATTEN_TOLERANCE,
        }
    }
}

impl TessellationOptions {
    /// Options resampling at the given spacing.
    pub fn with_spacing(spacing: f64) -> Self {
        Self {
            spacing: Some(spacing),
            ..Self::default()
        }
    }

    /// Spacing if it is usable for resampling.
    ///
    /// Zero, negative and non-finite values are ignored.
    pub fn effective_spacing(&self) -> Option<f64> {
        match self.spacing {
            Some(s) if s.is_finite() && s > 0.0 => Some(s),
            Some(s) => {
                log::warn!("ignoring invalid tessellation spacing {s}");
                None
            }
            None => None,
        }
    }

    /// Number of samples for a boundary of `length` units, truncated.
    pub fn sample_count(&self, length: f64) -> Option<usize> {
        self.effective_spacing().map(|s| {
            let count = (length / s) as usize;
            if count > MAX_SAMPLE_COUNT {
                log::warn!("clamping {count} samples to {MAX_SAMPLE_COUNT}");
                MAX_SAMPLE_COUNT
            } else {
                count
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_json() {
        let opts: TessellationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, TessellationOptions::default());
        assert_eq!(opts.num_vectors, 16);
    }

    #[test]
    fn spacing_from_json() {
        let opts: TessellationOptions = serde_json::from_str(r#"{"spacing": 2.5}"#).unwrap();
        assert_eq!(opts.effective_spacing(), Some(2.5));
        assert_eq!(opts.sample_count(11.0), Some(4));
        assert_eq!(opts.sample_count(1e300), Some(MAX_SAMPLE_COUNT));
    }

    #[test]
    fn invalid_spacing_is_ignored() {
        assert_eq!(TessellationOptions::with_spacing(0.0).effective_spacing(), None);
        assert_eq!(TessellationOptions::with_spacing(-1.0).effective_spacing(), None);
        assert_eq!(
            TessellationOptions::with_spacing(f64::NAN).sample_count(10.0),
            None
        );
    }
}
