use clap::Parser;
use reviewsift::{
    Cli, OutputFormatter, OutputMode, ReviewSift, ReviewSiftError, UserFriendlyError,
};
use std::path::Path;
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let sift = match ReviewSift::from_cli(&cli) {
        Ok(sift) => sift,
        Err(e) => {
            print_startup_error(&e);
            return 2;
        }
    };

    // Source is guaranteed by clap unless --generate-config was given
    let source = match cli.source {
        Some(ref source) => source.as_path(),
        None => {
            print_startup_error(&ReviewSiftError::Config {
                message: "No source file given".to_string(),
            });
            return 2;
        }
    };

    if cli.dry_run {
        return handle_dry_run(source, &sift);
    }

    match sift.extract(source) {
        Ok(report) => {
            sift.output_formatter().print_extraction_report(&report);
            0
        }
        Err(e) => {
            sift.handle_error(&e);

            match e {
                ReviewSiftError::Config { .. } => 2,
                ReviewSiftError::SourceRead { .. } => 3,
                ReviewSiftError::MalformedSource { .. } => 4,
                ReviewSiftError::DestinationWrite { .. } => 5,
                _ => 1,
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "reviewsift.toml".to_string());

    match ReviewSift::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  reviewsift <source> --config {}", config_path);
            println!("\nEdit the file to customize the user and style keywords.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(source: &Path, sift: &ReviewSift) -> i32 {
    let formatter = sift.output_formatter();

    formatter.info("DRY RUN MODE - No output will be written");
    formatter.print_separator();

    let export = match reviewsift::extractor::load_export(source) {
        Ok(export) => export,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return match e {
                ReviewSiftError::SourceRead { .. } => 3,
                ReviewSiftError::MalformedSource { .. } => 4,
                _ => 1,
            };
        }
    };

    let config = sift.config();
    let extraction = reviewsift::ReviewExtractor::new()
        .with_max_reviews(config.output.max_reviews)
        .extract(&export);

    formatter.info("Extraction plan:");
    println!("  Source: {}", source.display());
    println!("  Destination: {}", config.output.destination.display());
    println!("  User: {}", config.profile.user);
    println!("  Style keywords: {}", config.profile.style_keywords.join(", "));
    if let Some(cap) = config.output.max_reviews {
        println!("  Max reviews: {}", cap);
    }
    println!("  Features in export: {}", extraction.total_features);
    println!("  Reviews that would be written: {}", extraction.retained());

    formatter.print_separator();
    formatter.success("Dry run completed successfully");
    formatter.info("Run without --dry-run to write the taste profile");

    0
}

fn print_startup_error(error: &ReviewSiftError) {
    // Basic formatter for errors raised before configuration is settled
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewsift::{Config, OutputFormat};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli {
            source: None,
            output: None,
            user: None,
            keywords: None,
            max_reviews: None,
            config: Some(config_path.clone()),
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
            dry_run: false,
            generate_config: true,
        };

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[profile]"));
    }

    #[test]
    fn test_dry_run_mode() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("Reviews.json");
        fs::write(&source, r#"{"features":[]}"#).unwrap();

        let config = Config::default();
        let sift = ReviewSift::new(config, OutputMode::Plain, 0, true);

        let exit_code = handle_dry_run(&source, &sift);
        assert_eq!(exit_code, 0);
    }

    #[test]
    fn test_dry_run_missing_source() {
        let config = Config::default();
        let sift = ReviewSift::new(config, OutputMode::Plain, 0, true);

        let exit_code = handle_dry_run(&PathBuf::from("/nonexistent/Reviews.json"), &sift);
        assert_eq!(exit_code, 3);
    }

    #[test]
    fn test_dry_run_malformed_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("Reviews.json");
        fs::write(&source, "not json at all").unwrap();

        let config = Config::default();
        let sift = ReviewSift::new(config, OutputMode::Plain, 0, true);

        let exit_code = handle_dry_run(&source, &sift);
        assert_eq!(exit_code, 4);
    }
}
