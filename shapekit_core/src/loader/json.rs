// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: JSON scene loader
//!
//! Scenes look like
//! `{"shapes": [{"type": "ellipse", "x": 0, "y": 0, "width": 10, "height": 10}]}`.
//! Paths carry their outline as a `d` string using `M`, `L`, `Q`, `C` and
//! `Z` verbs with space separated coordinates.

use crate::geometry::{Path, Polygon};
use crate::mixins::{Mixins, Styles};
use crate::shapes::{AnyShape, Ellipse, Line, Triangle};
use crate::traits::Transformable;
use crate::types::Vector;
use serde::Deserialize;
use std::error::Error;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct Scene {
    #[serde(default)]
    shapes: Vec<ShapeDef>,
}

#[derive(Debug, Deserialize)]
struct Common {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    styles: Styles,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ShapeDef {
    Ellipse {
        #[serde(flatten)]
        common: Common,
        width: f64,
        height: f64,
    },
    Line {
        #[serde(flatten)]
        common: Common,
        x2: f64,
        y2: f64,
    },
    Triangle {
        #[serde(flatten)]
        common: Common,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
    Polygon {
        #[serde(flatten)]
        common: Common,
        #[serde(default)]
        vertices: Vec<Vector>,
    },
    Path {
        #[serde(flatten)]
        common: Common,
        d: String,
    },
}

/// Load shapes from a reader containing scene JSON.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Vec<AnyShape>, Box<dyn Error>> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    let scene: Scene = serde_json::from_str(&s)?;
    let shapes = scene
        .shapes
        .into_iter()
        .map(build_shape)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("loaded scene with {} shapes", shapes.len());
    Ok(shapes)
}

/// Load shapes directly from a byte slice containing scene JSON.
pub fn from_slice(data: &[u8]) -> Result<Vec<AnyShape>, Box<dyn Error>> {
    let cursor = std::io::Cursor::new(data);
    from_reader(cursor)
}

fn build_shape(def: ShapeDef) -> Result<AnyShape, Box<dyn Error>> {
    let (mut shape, common): (AnyShape, Common) = match def {
        ShapeDef::Ellipse {
            common,
            width,
            height,
        } => (Ellipse::new(common.x, common.y, width, height).into(), common),
        ShapeDef::Line { common, x2, y2 } => {
            (Line::new(common.x, common.y, x2, y2).into(), common)
        }
        ShapeDef::Triangle {
            common,
            x2,
            y2,
            x3,
            y3,
        } => (
            Triangle::new(common.x, common.y, x2, y2, x3, y3).into(),
            common,
        ),
        ShapeDef::Polygon { common, vertices } => (
            Polygon::from_vertices(common.x, common.y, vertices).into(),
            common,
        ),
        ShapeDef::Path { common, d } => {
            let mut path = Path::new(common.x, common.y);
            parse_path(&d, &mut path)?;
            (path.into(), common)
        }
    };
    if common.rotation != 0.0 {
        shape.rotate(common.rotation, None, false);
    }
    *shape.styles_mut() = common.styles;
    Ok(shape)
}

/// Parse path data using M/L/Q/C/Z verbs.
fn parse_path(data: &str, path: &mut Path) -> Result<(), Box<dyn Error>> {
    let mut it = data.split_whitespace();
    while let Some(tok) = it.next() {
        let mut coords = |n: usize| -> Result<Vec<f64>, Box<dyn Error>> {
            (0..n)
                .map(|_| -> Result<f64, Box<dyn Error>> {
                    let raw = it
                        .next()
                        .ok_or_else(|| format!("path verb {tok} is missing coordinates"))?;
                    Ok(raw
                        .parse::<f64>()
                        .map_err(|e| format!("bad path coordinate {raw:?}: {e}"))?)
                })
                .collect()
        };
        match tok {
            "M" => {
                let c = coords(2)?;
                path.move_to(c[0], c[1]);
            }
            "L" => {
                let c = coords(2)?;
                path.line_to(c[0], c[1]);
            }
            "Q" => {
                let c = coords(4)?;
                path.curve_to(c[0], c[1], c[2], c[3]);
            }
            "C" => {
                let c = coords(6)?;
                path.cubic_to(c[0], c[1], c[2], c[3], c[4], c[5]);
            }
            "Z" => {
                path.close();
            }
            other => return Err(format!("unknown path verb {other:?}").into()),
        }
    }
    Ok(())
}
