//! Application-facing layer over [`anynav_core`].
//!
//! A [`Navigator`] holds the graph of the current drawing and answers route
//! queries against it, taking GeoJSON in and handing GeoJSON back out so a
//! map UI can feed it drawings and render the returned line directly.

pub mod navigator;
pub mod routing;

pub use anynav_core::{BuildReport, DistanceMetric, Error, GraphConfig, Route};
pub use navigator::Navigator;
