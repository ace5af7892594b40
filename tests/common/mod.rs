//! Common test utilities for clasp integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Hook directory created by [`TestWorkspace::new`]
pub const HOOK_DIR: &str = "hooks.d";

/// Target file name used by [`TestWorkspace::target`]
pub const TARGET: &str = "pre-commit";

/// A temporary directory holding a hook directory and a target path
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace with an empty hook directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join(HOOK_DIR)).expect("Failed to create hook directory");
        Self { temp, path }
    }

    /// Path of the hook directory
    pub fn hook_dir(&self) -> PathBuf {
        self.path.join(HOOK_DIR)
    }

    /// Path of the generated target
    pub fn target(&self) -> PathBuf {
        self.path.join(TARGET)
    }

    /// Write a fragment into the hook directory
    pub fn write_fragment(&self, name: &str, content: &str) {
        std::fs::write(self.hook_dir().join(name), content).expect("Failed to write fragment");
    }

    /// Remove a fragment from the hook directory
    #[allow(dead_code)]
    pub fn remove_fragment(&self, name: &str) {
        std::fs::remove_file(self.hook_dir().join(name)).expect("Failed to remove fragment");
    }

    /// Read the generated target
    #[allow(dead_code)]
    pub fn read_target(&self) -> String {
        std::fs::read_to_string(self.target()).expect("Failed to read target")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
