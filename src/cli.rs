use crate::config::{CliOverrides, Config};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "reviewsift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract place reviews from Google Maps Takeout exports")]
#[command(
    long_about = "ReviewSift reads the Reviews.json file from a Google Maps Takeout \
                       export, keeps every place rated 4 stars or higher or carrying review \
                       text, and writes the flattened reviews as a taste profile document."
)]
#[command(after_help = "EXAMPLES:\n  \
    reviewsift Reviews.json\n  \
    reviewsift Reviews.json --output profile.json --user someone\n  \
    reviewsift Reviews.json --keywords modern,cozy,quiet --max-reviews 100\n  \
    reviewsift Reviews.json --config my-config.toml")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the Takeout reviews export (Reviews.json)
    #[arg(required_unless_present = "generate_config")]
    pub source: Option<PathBuf>,

    /// Output file path (defaults to user_tastes.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// User identifier written into the output envelope
    #[arg(short, long)]
    pub user: Option<String>,

    /// Style keywords for the output envelope (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Option<Vec<String>>,

    /// Maximum number of reviews to keep (after filtering)
    #[arg(long)]
    pub max_reviews: Option<usize>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without writing)
    #[arg(long, help = "Validate the source and show the plan without writing output")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        let keywords = self.keywords.as_ref().map(|ks| {
            ks.iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        });

        CliOverrides::new()
            .with_user(self.user.clone())
            .with_style_keywords(keywords)
            .with_destination(self.output.clone())
            .with_max_reviews(self.max_reviews)
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
