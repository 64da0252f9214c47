//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Placing export documents and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{DatasetBuilder, SampleFiles};

/// Declarative test environment builder.
///
/// Every command runs with `--data` and `--config` pointing inside the temp
/// directory, so the user's real configuration is never read.
///
/// # Example
/// ```no_run
/// use annoview_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample("culture_export.json");
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_path: PathBuf,
    config_path: PathBuf,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();

        Self {
            data_path: base_path.join("export.json"),
            config_path: base_path.join("config.toml"),
            temp_dir,
            samples: SampleFiles::new(),
        }
    }

    /// Path handed to `--data`. The file only exists once a dataset was placed.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Path handed to `--config`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an export document as the dataset.
    pub fn with_dataset(self, document: &Value) -> Self {
        std::fs::write(&self.data_path, document.to_string()).expect("Failed to write dataset");
        self
    }

    /// Write a builder's document as the dataset.
    pub fn with_builder(self, builder: &DatasetBuilder) -> Self {
        let document = builder.to_value();
        self.with_dataset(&document)
    }

    /// Copy a bundled sample as the dataset.
    pub fn with_sample(self, sample_name: &str) -> Self {
        self.samples
            .copy_to(sample_name, &self.data_path)
            .expect("Failed to copy sample");
        self
    }

    /// Write raw bytes as the dataset (for malformed-input tests).
    pub fn with_raw_data(self, contents: &str) -> Self {
        std::fs::write(&self.data_path, contents).expect("Failed to write dataset");
        self
    }

    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data")
            .arg(&self.data_path)
            .arg("--config")
            .arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("ANNOVIEW_DATA");
        cmd.env_remove("ANNOVIEW_CONFIG");
        cmd.env_remove("RUST_LOG");

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("annoview")
            .map_err(|e| anyhow::anyhow!("Failed to find annoview binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Shorthand for `run` with `--format json` prepended.
    pub fn run_json(&self, args: &[&str]) -> Result<Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!(
                "Command {:?} failed: {}",
                args,
                result.stderr().trim_end()
            );
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
