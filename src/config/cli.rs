use crate::config::toml_config::ShowcaseConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Stream demonstration lines to stdout
    #[default]
    Text,
    /// Print the run report as JSON
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-showcase")]
#[command(about = "Runs small object-oriented design pattern demonstrations")]
pub struct CliConfig {
    /// Patterns to run, in order (comma-separated or repeated). Defaults to all
    #[arg(short, long, value_delimiter = ',')]
    pub pattern: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// List the available patterns and exit
    #[arg(long)]
    pub list: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the TOML file if one was given and applies the command-line pattern selection on top.
    /// Pattern names are checked once, by [`ShowcaseConfig::validate`].
    pub fn load_showcase_config(&self) -> Result<ShowcaseConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ShowcaseConfig::from_file(path)?
            }
            None => ShowcaseConfig::default(),
        };

        if !self.pattern.is_empty() {
            tracing::debug!("🔧 Pattern selection overridden to: {:?}", self.pattern);
            config.select_patterns(self.pattern.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
