//! Codec configuration

use crate::errors::PduError;
use crate::timestamp::CenturyWindow;
use serde::{Deserialize, Serialize};

/// Complete codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Timestamp configuration
    #[serde(default)]
    pub timestamp: TimestampConfig,
}

/// Timestamp codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampConfig {
    /// First year of the 100 year window two-digit years resolve into
    pub century_start_year: i32,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            century_start_year: CenturyWindow::default().start_year(),
        }
    }
}

impl TimestampConfig {
    /// Century window for timestamp decoding
    ///
    /// The whole window must fall within the years chrono can represent.
    pub fn century_window(&self) -> Result<CenturyWindow, PduError> {
        CenturyWindow::checked(self.century_start_year).ok_or_else(|| {
            PduError::Config(format!(
                "century_start_year {} out of range",
                self.century_start_year
            ))
        })
    }
}

impl CodecConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self, PduError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PduError::Config(e.to_string()))?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON
    pub fn from_json(content: &str) -> Result<Self, PduError> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| PduError::Config(e.to_string()))?;

        config.timestamp.century_window()?;
        Ok(config)
    }
}
