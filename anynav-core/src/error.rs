use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Graph has no nodes to snap to")]
    EmptyGraph,
    #[error("Invalid coordinate: ({0}, {1})")]
    InvalidCoordinate(f64, f64),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
