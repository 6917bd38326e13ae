use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_LOG_PATH: &str = "/tmp/data_transformer.log";

#[derive(Parser, Debug)]
#[command(name = "linkgap")]
#[command(
    about = "Find gaps between successful requests in a log and classify them as delays or disconnects",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Log file to analyze
    #[arg(default_value = DEFAULT_LOG_PATH)]
    pub log_file: PathBuf,

    /// TOML config file with an [analysis] table (falls back to $LINKGAP_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Gaps strictly longer than this many milliseconds are reported
    #[arg(long)]
    pub gap_threshold_ms: Option<u64>,

    /// Window after a gap, in milliseconds, in which recoveries are counted
    #[arg(long)]
    pub lookahead_ms: Option<u64>,

    /// More recoveries than this inside the window classifies a gap as a delay
    #[arg(long)]
    pub delay_count: Option<usize>,

    /// Substring that marks a successful request
    #[arg(long)]
    pub success_marker: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["linkgap"]);
        assert_eq!(cli.log_file, PathBuf::from(DEFAULT_LOG_PATH));
        assert_eq!(cli.format, OutputFormat::Plain);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(cli.config.is_none());
        assert!(cli.gap_threshold_ms.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "linkgap",
            "app.log",
            "--format",
            "json",
            "--gap-threshold-ms",
            "500",
            "--delay-count",
            "5",
            "--success-marker",
            "HTTP 200",
        ]);
        assert_eq!(cli.log_file, PathBuf::from("app.log"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.gap_threshold_ms, Some(500));
        assert_eq!(cli.delay_count, Some(5));
        assert_eq!(cli.success_marker.as_deref(), Some("HTTP 200"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
