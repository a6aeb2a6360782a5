//! Common test utilities for Hotelier CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and config directories for the binary
//! - `TestResult`: captured exit status and output

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Hotelier CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated environment: a working directory and a config home that no
/// real user configuration can leak into.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_hotelier")),
        }
    }

    /// Write `hotelier.toml` into the working directory
    pub fn with_project_config(self, content: &str) -> Self {
        fs::write(self.work_path("hotelier.toml"), content).unwrap();
        self
    }

    /// Write the user config under the isolated config home
    pub fn with_user_config(self, content: &str) -> Self {
        let dir = self.config_home.path().join("hotelier");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
        self
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Run hotelier in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run hotelier with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.work_dir.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd.output().unwrap().into()
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env_remove("HOTELIER_CONFLICT_SCOPE")
            .env_remove("HOTELIER_VERBOSITY")
            .env_remove("HOTELIER_OUTPUT")
            .env_remove("RUST_LOG");
        cmd
    }
}
