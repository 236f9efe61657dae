// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
use proptest::prelude::*;
use shapekit_core::geometry::{Anchor, Path};
use shapekit_core::{TessellationOptions, Tessellate, Vector};
mod testutil;

proptest! {
    #[test]
    fn add_then_sub_is_identity(v in testutil::vector_strategy(), a in testutil::vector_strategy()) {
        let back = v.add(a).sub(a);
        prop_assert!(back.approx_eq(v, 1e-9));
    }

    #[test]
    fn anchor_copy_is_equal_and_independent(a in testutil::anchor_strategy(), v in testutil::vector_strategy()) {
        let mut copy = a;
        prop_assert_eq!(copy, a);
        copy = copy.add(v);
        if a != Anchor::Close && v.x.abs() > 1e-3 {
            prop_assert_ne!(copy, a);
        }
        prop_assert_eq!(a.add(v).sub(v).points().len(), a.points().len());
    }

    #[test]
    fn anchor_json_roundtrip(a in testutil::anchor_strategy()) {
        let json = serde_json::to_string(&a).unwrap();
        let parsed: Anchor = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, a);
    }

    #[test]
    fn anchor_length_bounded_by_control_polygon(a in testutil::anchor_strategy()) {
        let pts = a.points();
        let mut hull = 0.0;
        let mut prev = Vector::ZERO;
        for p in &pts {
            hull += prev.distance(*p);
            prev = *p;
        }
        let len = a.length();
        prop_assert!(len >= 0.0);
        if !matches!(a, Anchor::Move { .. } | Anchor::Close) {
            prop_assert!(len <= hull * (1.0 + 1e-9) + 1e-9);
            let chord = pts.last().unwrap().length();
            prop_assert!(len + 1e-6 >= chord);
        }
    }
}

proptest! {
    #[test]
    fn polygon_length_survives_copy(p in testutil::polygon_strategy()) {
        let copy = p.clone();
        prop_assert_eq!(copy.length(), p.length());
    }

    #[test]
    fn vertex_lengths_return_vertices(p in testutil::polygon_strategy()) {
        let mut walked = 0.0;
        for (i, (start, stop)) in p.loop_vectors().enumerate() {
            let at = p.vector_at_length(walked).unwrap();
            prop_assert!(at.approx_eq(p.vertices()[i], 1e-6));
            walked += stop.sub(start).length();
        }
    }

    #[test]
    fn full_length_wraps(p in testutil::polygon_strategy()) {
        prop_assert_eq!(p.vector_at_length(p.length()).unwrap(), p.vertices()[0]);
    }

    #[test]
    fn resampled_length_is_close(p in testutil::polygon_strategy(), spacing in 0.5f64..5.0) {
        let res = p.to_polygon(&TessellationOptions::with_spacing(spacing));
        let original = p.length();
        // Each cut corner loses at most two spacings of perimeter.
        let bound = 2.0 * spacing * (p.len() as f64 + 1.0);
        prop_assert!(res.length() <= original + 1e-6);
        prop_assert!(original - res.length() <= bound);
        prop_assert_eq!(res.len(), (original / spacing) as usize);
    }

    #[test]
    fn path_flatten_bound(cmds in proptest::collection::vec(testutil::anchor_strategy(), 1..8)) {
        let mut path = Path::new(0.0, 0.0);
        for a in cmds {
            path.push(a);
        }
        let segs = path.flatten(1.0);
        let bound = 8 * (1usize << shapekit_core::geometry::MAX_SUBDIVISION_DEPTH);
        prop_assert!(segs.len() <= bound);
    }
}
