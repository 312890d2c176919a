//! Coordinate identity and distance conventions

use std::fmt;

use geo::{Coord, Distance, Euclidean, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::Cost;

/// Exact-match identity of a coordinate.
///
/// Two coordinates share a key only when both components are bit-for-bit
/// equal, with `-0.0` folded into `0.0`. No tolerance is applied: points that
/// differ in the last decimal place become distinct, unconnected nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    x: u64,
    y: u64,
}

impl NodeKey {
    /// Returns `None` for coordinates with a non-finite component.
    pub fn from_coord(coord: Coord<f64>) -> Option<Self> {
        if !coord.x.is_finite() || !coord.y.is_finite() {
            return None;
        }
        Some(Self {
            x: canonical_bits(coord.x),
            y: canonical_bits(coord.y),
        })
    }

    pub fn coord(self) -> Coord<f64> {
        Coord {
            x: f64::from_bits(self.x),
            y: f64::from_bits(self.y),
        }
    }
}

fn canonical_bits(value: f64) -> u64 {
    // -0.0 == 0.0 but the bit patterns differ
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coord = self.coord();
        write!(f, "{},{}", coord.x, coord.y)
    }
}

/// Distance convention shared by edge weights, snapping and the A* heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Great-circle distance in metres, coordinates are `(longitude, latitude)` degrees
    #[default]
    Haversine,
    /// Planar distance in coordinate units, coordinates are `(x, y)` on the image plane
    Euclidean,
}

impl DistanceMetric {
    pub fn distance(self, from: Point<f64>, to: Point<f64>) -> Cost {
        match self {
            Self::Haversine => Haversine.distance(from, to),
            Self::Euclidean => Euclidean.distance(from, to),
        }
    }
}
