#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

/// Temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic style-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-guard.toml", content);
    }
}

/// A small Java source seeded with one over-length line, a misindented
/// two-line block, a twice-repeated literal and a snake_case assignment.
pub fn seeded_sample() -> String {
    format!(
        "public class Sample {{\n  \
         private int count = 0;\n  \
         String first = \"Hello World\";\n  \
         String second = \"Hello World\";\n  \
         String other = \"Different One\";\n  \
         // {}\n  \
         void run() {{\n        \
         int misplaced_total = 9;\n        \
         int another_line = 10;\n  \
         }}\n  \
         int bad_name = 5;\n}}\n// end\n",
        "x".repeat(117)
    )
}
