use serde::{Deserialize, Serialize};
use crate::constants::{
    DATASET_PATH, EXPORT_FILE_NAME, FESTIVAL_NAME, MIN_BLOCK_HEIGHT, PIXELS_PER_HOUR, SELECTION_STORAGE_KEY,
};

/// Vertical scale of the timetable grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub pixels_per_hour: f64,
    pub min_block_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_hour: PIXELS_PER_HOUR,
            min_block_height: MIN_BLOCK_HEIGHT,
        }
    }
}

/// Runtime settings shared with the component tree through context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub festival_name: String,
    pub dataset_url: String,
    pub storage_key: String,
    pub export_file_name: String,
    pub layout: LayoutConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            festival_name: FESTIVAL_NAME.to_string(),
            dataset_url: DATASET_PATH.to_string(),
            storage_key: SELECTION_STORAGE_KEY.to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            layout: LayoutConfig::default(),
        }
    }
}
