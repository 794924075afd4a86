// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Structured geometry export for outlines.
//!
//! `OutlineData` is what listeners and persistence see: the outline name and
//! its dots as `[x, y]` pairs. `PathJson` is the fuller
//! `["Path", { name, segments, closed }]` form a vector path serializes to.
//! Coordinates are rounded to a fixed number of decimals on export.

use crate::settings;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Name and dot coordinates of one outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineData {
    pub name: String,
    pub edges: Vec<[f64; 2]>,
}

impl OutlineData {
    pub fn new<'a>(name: &str, points: impl IntoIterator<Item = &'a Point>) -> Self {
        Self {
            name: name.to_string(),
            edges: points.into_iter().map(|pt| export_coordinates(*pt)).collect(),
        }
    }

    /// Dot coordinates as points
    pub fn points(&self) -> Vec<Point> {
        self.edges.iter().map(|[x, y]| Point::new(*x, *y)).collect()
    }
}

/// Body of a serialized vector path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathJsonData {
    pub name: String,
    pub segments: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub closed: bool,
}

/// A vector path serialized as `["Path", { ... }]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathJson(pub String, pub PathJsonData);

impl PathJson {
    pub const KIND: &'static str = "Path";

    pub fn new<'a>(name: &str, points: impl IntoIterator<Item = &'a Point>, closed: bool) -> Self {
        Self(
            Self::KIND.to_string(),
            PathJsonData {
                name: name.to_string(),
                segments: points.into_iter().map(|pt| export_coordinates(*pt)).collect(),
                closed,
            },
        )
    }

    pub fn data(&self) -> &PathJsonData {
        &self.1
    }
}

impl From<PathJson> for OutlineData {
    fn from(json: PathJson) -> Self {
        let PathJson(_, data) = json;
        Self {
            name: data.name,
            edges: data.segments,
        }
    }
}

/// Coordinates accepted when seeding an outline: `[x, y]` or `{ "x": .., "y": .. }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointCoordinates {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

impl From<PointCoordinates> for Point {
    fn from(coords: PointCoordinates) -> Self {
        match coords {
            PointCoordinates::Pair([x, y]) => Point::new(x, y),
            PointCoordinates::Named { x, y } => Point::new(x, y),
        }
    }
}

impl From<Point> for PointCoordinates {
    fn from(pt: Point) -> Self {
        PointCoordinates::Pair([pt.x, pt.y])
    }
}

fn export_coordinates(pt: Point) -> [f64; 2] {
    [round_coordinate(pt.x), round_coordinate(pt.y)]
}

fn round_coordinate(value: f64) -> f64 {
    let factor = 10f64.powi(settings::outline::EXPORT_PRECISION);
    (value * factor).round() / factor
}
