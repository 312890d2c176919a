//! This module is responsible for turning drawn geometry (`GeoJSON`, `geo`
//! types) into a navigable graph.

mod builder;
mod config;
mod drawing;

pub use builder::create_nav_graph;
pub use config::GraphConfig;
pub use drawing::{geometries_from_geojson, geometries_from_geojson_str};
