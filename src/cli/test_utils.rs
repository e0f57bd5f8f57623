//! Shared fixtures for CLI tests.

use tempfile::TempDir;

/// Writes `content` to `name` inside `dir` and returns the file's path.
///
/// # Panics
///
/// Panics if the file cannot be written or the path is not UTF-8.
#[expect(clippy::expect_used, reason = "test fixture setup")]
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("fixture file should be written");
    path.to_str().expect("temp path should be UTF-8").to_owned()
}
