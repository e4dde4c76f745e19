//! Persistence of the last successful weather report.
//!
//! One JSON file in the config directory, read at startup so the app can
//! render immediately while a fresh lookup runs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{WeatherError, WeatherReport};

const REPORT_FILE: &str = "last_report.json";

#[derive(Debug)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(REPORT_FILE),
        }
    }

    /// Load the stored report, if any. Corrupt content is removed and
    /// treated as absent rather than surfaced as an error.
    pub fn load(&self) -> Option<WeatherReport> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!("Discarding corrupt stored report: {}", e);
                if let Err(e) = fs::remove_file(&self.path) {
                    tracing::debug!("Failed to remove corrupt report file: {}", e);
                }
                None
            }
        }
    }

    /// Persist `report`, creating the config directory if needed.
    pub fn save(&self, report: &WeatherReport) -> Result<(), WeatherError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| WeatherError::Storage(format!("create {}: {e}", parent.display())))?;
        }
        let contents = serde_json::to_string_pretty(report)
            .map_err(|e| WeatherError::Storage(format!("encode report: {e}")))?;
        fs::write(&self.path, contents)
            .map_err(|e| WeatherError::Storage(format!("write {}: {e}", self.path.display())))?;
        tracing::debug!(path = %self.path.display(), "Saved weather report");
        Ok(())
    }
}
