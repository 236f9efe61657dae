// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
#![no_main]
use libfuzzer_sys::fuzz_target;
use shapekit_core::loader::json;
use shapekit_core::{Tessellate, TessellationOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(shapes) = json::from_slice(data) {
        let opts = TessellationOptions::with_spacing(4.0);
        for shape in &shapes {
            let poly = shape.to_polygon(&opts);
            if poly.length() < 1e6 {
                let _ = poly.vector_at(0.5);
                let _ = poly.centroid();
                let _ = poly.bounds();
            }
        }
    }
});
