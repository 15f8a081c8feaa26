use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewSiftError {
    #[error("Failed to read source file: {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file is not well-formed JSON: {path}")]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write destination file: {path}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ReviewSiftError {
    fn user_message(&self) -> String {
        match self {
            ReviewSiftError::SourceRead { path, source } => {
                format!("Cannot read source file {}: {}", path.display(), source)
            }
            ReviewSiftError::MalformedSource { path, source } => {
                format!("Source file {} is not valid JSON: {}", path.display(), source)
            }
            ReviewSiftError::DestinationWrite { path, source } => {
                format!("Cannot write output file {}: {}", path.display(), source)
            }
            ReviewSiftError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ReviewSiftError::SourceRead { .. } => Some(
                "Check that the path points to the Takeout reviews export (e.g. \
                 Takeout/Maps (your places)/Reviews.json) and that you have read permission."
                    .to_string(),
            ),
            ReviewSiftError::MalformedSource { .. } => Some(
                "The file must be the unmodified JSON export from Google Takeout. \
                 Re-download the export if the file was truncated or edited."
                    .to_string(),
            ),
            ReviewSiftError::DestinationWrite { .. } => Some(
                "Ensure the output directory exists and is writable, or choose a \
                 different path with --output."
                    .to_string(),
            ),
            ReviewSiftError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all values have the \
                 expected types."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ReviewSiftError {
    fn from(error: toml::de::Error) -> Self {
        ReviewSiftError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReviewSiftError>;
