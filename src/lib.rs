pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig, ProfileConfig};
pub use error::{Result, ReviewSiftError, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{ConfigSnapshot, Extraction, ExtractionReport, ProfileWriter, ReviewExtractor};
pub use model::{ExtractedReview, ReviewExport, TasteProfile};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface for ReviewSift functionality
pub struct ReviewSift {
    config: Config,
    output_formatter: OutputFormatter,
}

impl ReviewSift {
    /// Create a new ReviewSift instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create ReviewSift instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Run the full pipeline: parse the export, filter and flatten the
    /// reviews, write the taste profile, report what happened.
    pub fn extract(&self, source: &Path) -> Result<ExtractionReport> {
        self.output_formatter.start_operation("Reading review export");

        let export = extractor::load_export(source)?;
        self.output_formatter
            .info(&format!("Parsed {} features", export.features.len()));

        let extraction = ReviewExtractor::new()
            .with_max_reviews(self.config.output.max_reviews)
            .extract(&export);

        self.output_formatter.debug(&format!(
            "Retention predicate kept {} of {} features",
            extraction.retained(),
            extraction.total_features
        ));

        let profile = TasteProfile {
            user: self.config.profile.user.clone(),
            style_keywords: self.config.profile.style_keywords.clone(),
            reviews: extraction.reviews.clone(),
        };

        let writer = ProfileWriter::new(&self.config.output.destination);
        writer.write(&profile)?;

        Ok(writer.create_report(source, &extraction, self.create_config_snapshot()))
    }

    /// Create configuration snapshot for reporting
    fn create_config_snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            user: self.config.profile.user.clone(),
            style_keywords: self.config.profile.style_keywords.clone(),
            max_reviews: self.config.output.max_reviews,
        }
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(ReviewSiftError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &ReviewSiftError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to extract a taste profile with default settings
pub fn extract_simple(source: &Path, destination: Option<&Path>) -> Result<ExtractionReport> {
    let mut config = Config::default();

    if let Some(dest) = destination {
        config.output.destination = dest.to_path_buf();
    }

    let sift = ReviewSift::new(config, OutputMode::Plain, 0, true);
    sift.extract(source)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_EXPORT: &str = r#"{"features":[
        {"properties":{"location":{"name":"Cafe A"},"five_star_rating_published":5,"review_text_published":""}},
        {"properties":{"location":{"name":"Cafe B"},"five_star_rating_published":2,"review_text_published":"Great coffee"}},
        {"properties":{"location":{"name":"Cafe C"},"five_star_rating_published":1,"review_text_published":""}}
    ]}"#;

    fn write_sample_export(dir: &TempDir) -> std::path::PathBuf {
        let source = dir.path().join("Reviews.json");
        fs::write(&source, SAMPLE_EXPORT).unwrap();
        source
    }

    #[test]
    fn test_end_to_end_extraction() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_sample_export(&temp_dir);
        let dest = temp_dir.path().join("user_tastes.json");

        let report = extract_simple(&source, Some(&dest)).unwrap();
        assert_eq!(report.total_features, 3);
        assert_eq!(report.retained, 2);
        assert_eq!(report.dropped, 1);

        let profile: TasteProfile =
            serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(profile.user, "yukpo2001");
        assert_eq!(profile.style_keywords.len(), 5);
        assert_eq!(profile.reviews.len(), 2);
        assert_eq!(profile.reviews[0].place, "Cafe A");
        assert_eq!(profile.reviews[1].text, "Great coffee");
    }

    #[test]
    fn test_extraction_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_sample_export(&temp_dir);
        let dest = temp_dir.path().join("user_tastes.json");

        extract_simple(&source, Some(&dest)).unwrap();
        let first = fs::read(&dest).unwrap();

        extract_simple(&source, Some(&dest)).unwrap();
        let second = fs::read(&dest).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_source_leaves_destination_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("user_tastes.json");

        let err = extract_simple(Path::new("/nonexistent/Reviews.json"), Some(&dest)).unwrap_err();
        assert!(matches!(err, ReviewSiftError::SourceRead { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_malformed_source_leaves_destination_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("Reviews.json");
        fs::write(&source, "{\"features\": [oops").unwrap();
        let dest = temp_dir.path().join("user_tastes.json");

        let err = extract_simple(&source, Some(&dest)).unwrap_err();
        assert!(matches!(err, ReviewSiftError::MalformedSource { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_config_cap_applied() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_sample_export(&temp_dir);
        let dest = temp_dir.path().join("user_tastes.json");

        let mut config = Config::default();
        config.output.destination = dest.clone();
        config.output.max_reviews = Some(1);

        let sift = ReviewSift::new(config, OutputMode::Plain, 0, true);
        let report = sift.extract(&source).unwrap();
        assert_eq!(report.retained, 1);

        let profile: TasteProfile =
            serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(profile.reviews.len(), 1);
        assert_eq!(profile.reviews[0].place, "Cafe A");
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        ReviewSift::generate_sample_config(&config_path).unwrap();
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[profile]"));
        assert!(content.contains("[output]"));
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
