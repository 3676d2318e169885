use serde::{Deserialize, Serialize};

/// Static reference data for a festival stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub location: String,
}

/// Stage selector state; the selector's "all" value maps to `All`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StageFilter {
    #[default]
    All,
    Named(String),
}

impl StageFilter {
    #[must_use]
    pub fn from_selector(value: &str) -> Self {
        if value == crate::constants::STAGE_FILTER_ALL {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    #[must_use]
    pub fn as_selector(&self) -> &str {
        match self {
            Self::All => crate::constants::STAGE_FILTER_ALL,
            Self::Named(name) => name,
        }
    }

    /// Exact stage-name match unless the filter is `All`
    #[must_use]
    pub fn matches(&self, stage_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == stage_name,
        }
    }
}
