//! Test utilities for rgbridge
//!
//! This crate provides shared testing utilities used across the rgbridge workspace.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps all test temporary files in a single gitignored location.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use rgbridge_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write a tree of text files below `root`
///
/// Each entry is `(relative path, content)`. Parent directories are created
/// as needed.
///
/// ```rust
/// use rgbridge_testkit::{temp_dir_in_workspace, write_tree};
///
/// let temp = temp_dir_in_workspace();
/// write_tree(temp.path(), &[("src/main.rs", "fn main() {}\n"), ("README.md", "hi\n")]);
/// assert!(temp.path().join("src/main.rs").is_file());
/// ```
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create {}: {}", parent.display(), e));
        }
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    }
}

/// Locate a real `rg` executable on `PATH`
///
/// Tests that need the real engine call this and skip themselves on `None`.
pub fn rg_binary() -> Option<PathBuf> {
    which::which("rg").ok()
}

/// Return early from a test when `rg` is not installed
///
/// Evaluates to the path of the `rg` executable.
///
/// ```no_run
/// fn test_needs_engine() {
///     let rg = rgbridge_testkit::require_rg!();
///     assert!(rg.exists());
/// }
/// ```
#[macro_export]
macro_rules! require_rg {
    () => {
        match $crate::rg_binary() {
            Some(path) => path,
            None => {
                eprintln!("skipping: rg not found on PATH");
                return;
            }
        }
    };
}

/// Set while [`fake_engine`] checks that a fresh script can be executed
pub const FAKE_ENGINE_CHECK_ENV: &str = "RGBRIDGE_FAKE_ENGINE_CHECK";

/// Write an executable `/bin/sh` script standing in for `rg`
///
/// `body` runs with the arguments the engine would have received. Returns the
/// script path, ready to be used as `ServerConfig::rg_path`.
///
/// The script is executed once (with [`FAKE_ENGINE_CHECK_ENV`] set, which makes
/// it exit immediately) before returning. A write handle inherited by a child
/// that another test thread is forking makes `exec` fail with `ETXTBSY` for a
/// short moment; the first successful run shows no such handle remains.
///
/// ```no_run
/// let temp = rgbridge_testkit::temp_dir_in_workspace();
/// let rg = rgbridge_testkit::fake_engine(temp.path(), "printf 'f.txt:3\\n'");
/// assert!(rg.is_file());
/// ```
///
/// # Panics
///
/// Panics if the script cannot be written or never becomes executable.
#[cfg(unix)]
pub fn fake_engine(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    // ETXTBSY on Linux and macOS
    const TEXT_FILE_BUSY: i32 = 26;

    let path = dir.join("fake-rg");
    let script = format!(
        "#!/bin/sh\n[ -n \"${}\" ] && exit 0\n{}\n",
        FAKE_ENGINE_CHECK_ENV, body
    );
    std::fs::write(&path, script)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|e| panic!("Failed to chmod {}: {}", path.display(), e));

    for _ in 0..50 {
        match std::process::Command::new(&path)
            .env(FAKE_ENGINE_CHECK_ENV, "1")
            .status()
        {
            Ok(_) => return path,
            Err(e) if e.raw_os_error() == Some(TEXT_FILE_BUSY) => {
                std::thread::sleep(std::time::Duration::from_millis(20));
            }
            Err(e) => panic!("Failed to run {}: {}", path.display(), e),
        }
    }
    panic!("{} stayed busy", path.display());
}
