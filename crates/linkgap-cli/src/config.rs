use crate::Cli;
use anyhow::{Result, anyhow};
use linkgap_engine::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "LINKGAP_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (`--config`)
/// 2. LINKGAP_CONFIG environment variable
///
/// Without either, the built-in defaults are used and no file is read. A
/// path named by either source must exist.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Command-line flags win over values from the file.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        let analysis = &mut self.analysis;

        if let Some(ms) = cli.gap_threshold_ms {
            analysis.gap_threshold_ms = ms;
        }
        if let Some(ms) = cli.lookahead_ms {
            analysis.lookahead_ms = ms;
        }
        if let Some(count) = cli.delay_count {
            analysis.delay_count_threshold = count;
        }
        if let Some(marker) = &cli.success_marker {
            analysis.success_marker = marker.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.analysis, AnalysisConfig::default());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[analysis]\ngap_threshold_ms = 1000\nsuccess_marker = \"HTTP 200\"\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.analysis.gap_threshold_ms, 1000);
        assert_eq!(config.analysis.success_marker, "HTTP 200");
        assert_eq!(config.analysis.lookahead_ms, 2_000);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("Config file not found"));

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[analysis]\ngap_threshold_ms = \"soon\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));

        Ok(())
    }

    #[test]
    fn test_flags_override_file_values() {
        let mut config = Config::default();
        config.analysis.gap_threshold_ms = 1_000;
        config.analysis.lookahead_ms = 700;

        let cli = Cli::parse_from(["linkgap", "--gap-threshold-ms", "5000", "--delay-count", "1"]);
        config.apply_overrides(&cli);

        assert_eq!(config.analysis.gap_threshold_ms, 5_000);
        assert_eq!(config.analysis.lookahead_ms, 700);
        assert_eq!(config.analysis.delay_count_threshold, 1);
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/etc/linkgap.toml");
        assert_eq!(resolve_config_path(Some(explicit.as_path())), Some(explicit));
    }
}
