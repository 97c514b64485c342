//! Temporary home directories and command helpers
//!
//! Provides an isolated home for each test plus shortcuts for running the
//! binary against it.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use outfit_builder::core::error::{OutfitError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Isolated home directory. The TempDir must stay alive for the whole test.
pub struct TestHome {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestHome {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the saved outfit archive inside this home
    pub fn archive_file(&self) -> PathBuf {
        self.path.join("data").join("savedOutfits.json")
    }

    pub fn session_file(&self) -> PathBuf {
        self.path.join("cache").join("session.json")
    }

    /// A command for the binary with `--home` already set and colors off
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("outfit-builder").expect("binary is built");
        cmd.arg("--home").arg(&self.path).env("NO_COLOR", "1");
        cmd
    }

    /// Run a command and require it to succeed
    pub fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }
}

/// Sets up an empty home directory
pub fn setup_test_home() -> Result<TestHome> {
    let temp_dir = TempDir::new().map_err(OutfitError::Io)?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestHome { temp_dir, path })
}

/// Writes a file relative to the home directory, creating parent directories
pub fn write_file(home: &TestHome, relative: &str, content: &str) -> Result<PathBuf> {
    let path = home.path.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}
