#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the docfinder binary.
#[macro_export]
macro_rules! docfinder {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("docfinder"))
    };
}

/// Name of the document root inside every fixture. Fixed so the random temp
/// directory name never takes part in matching.
pub const SHARE: &str = "share";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty `share` root.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_dir(SHARE);
        fixture
    }

    /// Fixture holding two shipments of June 2025:
    /// EXP-10 with CIPL and BL documents, EXP-11 with a POD document.
    pub fn with_shipments() -> Self {
        let fixture = Self::new();
        fixture.create_doc("2025/June-2025/EXP-10/CIPL/doc1.pdf");
        fixture.create_doc("2025/June-2025/EXP-10/BL/doc2.pdf");
        fixture.create_doc("2025/June-2025/EXP-11/POD/pod-exp-11.pdf");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Creates a document under the share root.
    pub fn create_doc(&self, relative_path: &str) {
        self.create_file(&format!("{SHARE}/{relative_path}"), "%PDF");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the share root.
    pub fn share(&self) -> PathBuf {
        self.dir.path().join(SHARE)
    }

    /// Share root as a command-line argument.
    pub fn share_arg(&self) -> String {
        self.share().to_string_lossy().into_owned()
    }

    /// Creates `.docfinder.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".docfinder.toml", content);
    }

    /// Creates `.docfinder.toml` whose only root is the share.
    pub fn create_share_config(&self) {
        let share = self.share_arg().replace('\\', "\\\\");
        self.create_config(&format!("roots = [\"{share}\"]\n"));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
