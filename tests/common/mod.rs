//! Common test utilities and helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated environment for running the binary
///
/// Points the user config directory at an empty temp dir so a settings file
/// on the host machine cannot leak into the tests.
pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file inside the environment and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// A command for the linestamp binary with an isolated home
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("linestamp").unwrap();
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env_remove("RUST_LOG");
        cmd
    }
}
