//! Location of everything biblia keeps on disk.
//!
//! The data directory holds the Bible database, `config.json` and one JSON
//! file per user-data collection. It is resolved in this order:
//!
//! 1. `BIBLIA_HOME`, used as is
//! 2. `$XDG_DATA_HOME/biblia` on Linux and other Unix systems
//! 3. the platform default: `%LOCALAPPDATA%\biblia` on Windows,
//!    `~/Library/Application Support/biblia` on macOS and
//!    `~/.local/share/biblia` elsewhere

use std::env::{self, consts::OS};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::{fs, io};

pub const APP_NAME: &str = "biblia";
/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "BIBLIA_HOME";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Storage in the data directory resolved from the environment.
    pub fn new() -> Self {
        match non_empty_var(DATA_DIR_ENV) {
            Some(dir) => Self::at(dir),
            None => Self::at(platform_data_dir().join(APP_NAME)),
        }
    }

    /// Storage rooted at an explicit directory.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// on first use.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_var(name: &str) -> Option<OsString> {
    env::var_os(name).filter(|value| !value.is_empty())
}

/// Per-user data root of the current platform, or `.` when it cannot be
/// determined.
fn platform_data_dir() -> PathBuf {
    let home = || non_empty_var("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    match OS {
        "windows" => non_empty_var("LOCALAPPDATA").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
        "macos" => home().join("Library").join("Application Support"),
        _ => non_empty_var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| home().join(".local").join("share")),
    }
}
