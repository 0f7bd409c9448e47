// tests/common/mod.rs
//! Shared helpers for driving the binaries inside a scratch directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Command for `bin` running in this workspace with a clean environment.
    pub fn command(&self, bin: &str) -> Command {
        let mut cmd = Command::new(bin);
        cmd.current_dir(self.dir.path())
            .env_remove("LINE_TOOLS_RESULTS_DIR")
            .env_remove("LINE_TOOLS_LOG");
        cmd
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }
}

pub const STATISTICS: &str = env!("CARGO_BIN_EXE_compute_statistics");
pub const CONVERSION: &str = env!("CARGO_BIN_EXE_convert_numbers");
pub const WORD_COUNT: &str = env!("CARGO_BIN_EXE_word_count");
