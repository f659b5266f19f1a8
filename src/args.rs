use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal feedback survey.
#[derive(Debug, Parser)]
#[command(name = "feedback-survey", version, about)]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON file with the seed dataset (overrides config)
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Seconds before the thank-you screen returns to welcome (overrides config)
    #[arg(long, value_name = "SECONDS")]
    pub countdown: Option<u8>,

    /// Print feedback averages and the NPS summary as JSON, then exit
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = &self.seed {
            config.seed.path = Some(seed.clone());
        }
        if let Some(countdown) = self.countdown {
            config.survey.countdown_seconds = countdown;
        }
    }
}
