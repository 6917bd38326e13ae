//! TestWorld pattern for declarative CLI test setup.
//!
//! Each world owns a temp directory holding the log under test and,
//! optionally, a config file.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::LogBuilder;

/// Isolated test environment.
///
/// # Example
/// ```ignore
/// use assert_cmd::cargo::cargo_bin_cmd;
/// use linkgap_testing::{LogBuilder, TestWorld};
///
/// let world = TestWorld::new()
///     .with_log(&LogBuilder::new().success_at(0).success_at(5_000));
///
/// let mut cmd = cargo_bin_cmd!("linkgap");
/// world.configure_command(&mut cmd);
/// cmd.assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    log_path: PathBuf,
    config_path: Option<PathBuf>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with no log written yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_path = temp_dir.path().join("data_transformer.log");

        Self {
            temp_dir,
            log_path,
            config_path: None,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Write the builder's lines as the log under test.
    pub fn with_log(self, log: &LogBuilder) -> Self {
        self.with_log_text(&log.to_text())
    }

    pub fn with_log_text(self, text: &str) -> Self {
        std::fs::write(&self.log_path, text).expect("Failed to write log file");
        self
    }

    /// Write `config.toml` and pass it to every configured command.
    pub fn with_config(mut self, toml: &str) -> Self {
        let path = self.temp_dir.path().join("config.toml");
        std::fs::write(&path, toml).expect("Failed to write config file");
        self.config_path = Some(path);
        self
    }

    /// Write an extra file into the world.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Point a command at this world's log and config.
    ///
    /// The caller provides the base command (e.g. from
    /// `cargo_bin_cmd!("linkgap")`). Ambient configuration from the
    /// environment is cleared so runs stay hermetic.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env_remove("LINKGAP_CONFIG")
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path())
            .arg("--log-level")
            .arg("error");

        if let Some(config) = &self.config_path {
            cmd.arg("--config").arg(config);
        }

        cmd.arg(&self.log_path)
    }
}
