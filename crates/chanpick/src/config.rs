//! Application configuration from CLI flags and environment.

use clap::Parser;

use chanpick_core::DEFAULT_WARN_THRESHOLD;

/// chanpick — interactive channel selection for chat export pipelines.
#[derive(Parser, Debug)]
#[command(name = "chanpick", version, about)]
pub struct AppConfig {
    /// Channel catalog file produced by the fetch step.
    #[arg(short = 'f', long, default_value = "channels.json", env = "CHANPICK_CHANNELS")]
    pub channels: String,

    /// Use the line-oriented selector instead of the full-screen picker.
    #[arg(short, long)]
    pub line: bool,

    /// Write the confirmed selection to this JSON file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Preference file holding persisted settings.
    #[arg(long, default_value = "config.json", env = "CHANPICK_CONFIG")]
    pub config: String,

    /// Estimated-message total above which the large-selection warning fires.
    #[arg(long, default_value_t = DEFAULT_WARN_THRESHOLD)]
    pub warn_threshold: u64,

    /// Quiet mode (print only the selected channel names).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
