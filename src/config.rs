use serde::{Deserialize, Serialize};

use crate::features::tracker::dnd::SensorConfig;
use crate::features::tracker::services::LogoConfig;

/// Tunables for the tracker board. Partial documents are fine; anything
/// left out keeps its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub sensors: SensorConfig,
    pub logos: LogoConfig,
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
