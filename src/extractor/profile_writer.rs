use crate::error::{ReviewSiftError, Result};
use crate::extractor::Extraction;
use crate::model::TasteProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub total_features: usize,
    pub retained: usize,
    pub dropped: usize,
    pub extraction_time: DateTime<Utc>,
    pub config_used: ConfigSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub user: String,
    pub style_keywords: Vec<String>,
    pub max_reviews: Option<usize>,
}

/// Writes the taste profile to its destination.
///
/// The document is serialized in full before the destination is touched, and
/// lands via a temporary file in the same directory plus a rename. A failed
/// run never leaves a truncated or half-written destination file.
pub struct ProfileWriter {
    destination: PathBuf,
}

impl ProfileWriter {
    pub fn new<P: Into<PathBuf>>(destination: P) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn write(&self, profile: &TasteProfile) -> Result<()> {
        // serde_json writes UTF-8 with non-ASCII characters literal, which is
        // what downstream consumers of the profile expect for place names.
        let json = serde_json::to_string_pretty(profile).map_err(|e| ReviewSiftError::Config {
            message: format!("Failed to serialize taste profile: {}", e),
        })?;

        let dir = match self.destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| ReviewSiftError::DestinationWrite {
                path: self.destination.clone(),
                source: e,
            })?;

        temp_file
            .write_all(json.as_bytes())
            .map_err(|e| ReviewSiftError::DestinationWrite {
                path: self.destination.clone(),
                source: e,
            })?;

        temp_file
            .persist(&self.destination)
            .map_err(|e| ReviewSiftError::DestinationWrite {
                path: self.destination.clone(),
                source: e.error,
            })?;

        Ok(())
    }

    pub fn create_report(
        &self,
        source: &Path,
        extraction: &Extraction,
        config: ConfigSnapshot,
    ) -> ExtractionReport {
        ExtractionReport {
            source: source.to_path_buf(),
            destination: self.destination.clone(),
            total_features: extraction.total_features,
            retained: extraction.retained(),
            dropped: extraction.dropped,
            extraction_time: Utc::now(),
            config_used: config,
        }
    }
}
