use crate::error::{ReviewSiftError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_USER: &str = "yukpo2001";
pub const DEFAULT_STYLE_KEYWORDS: [&str; 5] = ["modern", "minimal", "local", "traditional", "cozy"];
pub const DEFAULT_DESTINATION: &str = "user_tastes.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub profile: ProfileConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// Identifier written into the output envelope as-is.
    pub user: String,
    /// Seed taxonomy for downstream taste analysis, not derived from input.
    pub style_keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub destination: PathBuf,
    /// Cap on retained reviews, applied after filtering. None means no cap.
    pub max_reviews: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            style_keywords: DEFAULT_STYLE_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
            max_reviews: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ReviewSiftError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ReviewSiftError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ReviewSiftError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["reviewsift.toml", ".reviewsift.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref user) = cli_args.user {
            self.profile.user = user.clone();
        }

        if let Some(ref keywords) = cli_args.style_keywords {
            self.profile.style_keywords = keywords.clone();
        }

        if let Some(ref destination) = cli_args.destination {
            self.output.destination = destination.clone();
        }

        if let Some(max_reviews) = cli_args.max_reviews {
            self.output.max_reviews = Some(max_reviews);
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| ReviewSiftError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| ReviewSiftError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.profile.user.trim().is_empty() {
            return Err(ReviewSiftError::Config {
                message: "User identifier must not be empty".to_string(),
            });
        }

        if self
            .profile
            .style_keywords
            .iter()
            .any(|k| k.trim().is_empty())
        {
            return Err(ReviewSiftError::Config {
                message: "Style keywords must not contain empty entries".to_string(),
            });
        }

        // An unwritable destination is reported by the writer, not here, so
        // it surfaces as a DestinationWrite error rather than a config one.
        if self.output.max_reviews == Some(0) {
            return Err(ReviewSiftError::Config {
                message: "Maximum review count must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub user: Option<String>,
    pub style_keywords: Option<Vec<String>>,
    pub destination: Option<PathBuf>,
    pub max_reviews: Option<usize>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: Option<String>) -> Self {
        self.user = user;
        self
    }

    pub fn with_style_keywords(mut self, keywords: Option<Vec<String>>) -> Self {
        self.style_keywords = keywords;
        self
    }

    pub fn with_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_max_reviews(mut self, max_reviews: Option<usize>) -> Self {
        self.max_reviews = max_reviews;
        self
    }
}
