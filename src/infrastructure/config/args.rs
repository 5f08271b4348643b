use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(
    name = "six-cities",
    version,
    about = "Browse Six Cities rental offers from the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the rental API.
    #[arg(long, env = "SIX_CITIES_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// HTTP request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Session token to use when none is stored.
    #[arg(long, env = "SIX_CITIES_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to open on startup, e.g. `/favorites`.
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub route: String,
}
