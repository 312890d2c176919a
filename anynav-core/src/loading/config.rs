use serde::{Deserialize, Serialize};

use crate::{DistanceMetric, Error};

/// Graph construction settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Distance used for edge weights, snapping and the search heuristic
    pub metric: DistanceMetric,
}

impl GraphConfig {
    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid configuration document
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidData(format!("Invalid config: {e}")))
    }
}
