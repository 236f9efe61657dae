// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
use proptest::prelude::*;
use shapekit_core::geometry::{Anchor, Polygon};
use shapekit_core::types::Vector;

pub fn vector_strategy() -> impl Strategy<Value = Vector> {
    (-1000.0f64..1000.0f64, -1000.0f64..1000.0f64).prop_map(|(x, y)| Vector::new(x, y))
}

pub fn vector_positive_strategy() -> impl Strategy<Value = Vector> {
    (0.0f64..100.0f64, 0.0f64..100.0f64).prop_map(|(x, y)| Vector::new(x, y))
}

pub fn anchor_strategy() -> impl Strategy<Value = Anchor> {
    prop_oneof![
        vector_strategy().prop_map(|target| Anchor::Move { target }),
        vector_strategy().prop_map(|target| Anchor::Line { target }),
        (vector_strategy(), vector_strategy())
            .prop_map(|(control, target)| Anchor::QuadCurve { control, target }),
        (vector_strategy(), vector_strategy(), vector_strategy()).prop_map(
            |(control1, control2, target)| Anchor::CubicCurve {
                control1,
                control2,
                target
            }
        ),
        Just(Anchor::Close),
    ]
}

/// Polygons with at least three vertices and a non-trivial perimeter.
pub fn polygon_strategy() -> impl Strategy<Value = Polygon> {
    (
        vector_strategy(),
        proptest::collection::vec(vector_positive_strategy(), 3..12),
    )
        .prop_filter("needs a perimeter", |(_, vs)| {
            vs.windows(2).any(|w| w[0].distance(w[1]) > 1.0)
        })
        .prop_map(|(origin, vs)| Polygon::from_vertices(origin.x, origin.y, vs))
}
