//! Shared testing utilities for ui5gen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory plus a command builder for the compiled
/// binary.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory the generator is invoked from.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ui5gen` binary in the
    /// work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ui5gen").expect("Failed to locate ui5gen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// The full flag set for a prompt-free run as `com.acme.MyApp`.
    pub fn full_flags() -> [&'static str; 14] {
        [
            "-n",
            "MyApp",
            "-s",
            "com.acme",
            "-p",
            "staticWebserver",
            "-v",
            "XML",
            "-l",
            "cdnOpenUi5",
            "-d",
            "true",
            "-c",
            "false",
        ]
    }

    /// Destination directory for the default full-flag run.
    pub fn project_dir(&self) -> PathBuf {
        self.work_dir.join("com.acme.MyApp")
    }

    /// Parse the settings store written into `dir`.
    pub fn settings_entry(&self, dir: &Path) -> serde_json::Value {
        let raw = fs::read_to_string(dir.join(".yo-rc.json")).expect("settings store missing");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("settings store invalid");
        value["generator-easy-ui5"].clone()
    }
}
