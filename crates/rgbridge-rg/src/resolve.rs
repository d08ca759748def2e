use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where the engine executable was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgSource {
    /// Explicit path from config or `--rg-path`
    Configured,
    /// Bare program name looked up on `PATH`
    SystemPath,
}

impl fmt::Display for RgSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RgSource::Configured => write!(f, "configured path"),
            RgSource::SystemPath => write!(f, "system PATH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgInfo {
    pub path: PathBuf,
    pub source: RgSource,
    /// `None` when `rg --version` could not be run or parsed
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    Found(RgInfo),
    NotFound { requested: PathBuf },
}

/// Locate the engine executable for `requested`.
///
/// A bare name (`rg`) is searched on `PATH`; anything with a directory
/// component must point at an existing file.
pub fn resolve_rg(requested: &Path) -> ResolveResult {
    // "rg" has an empty parent, "./rg" and "/usr/bin/rg" do not
    let is_bare_name = requested.parent() == Some(Path::new(""));

    let found = if is_bare_name {
        which::which(requested).ok().map(|path| (path, RgSource::SystemPath))
    } else if requested.is_file() {
        Some((requested.to_path_buf(), RgSource::Configured))
    } else {
        None
    };

    match found {
        Some((path, source)) => {
            let version = query_version(&path);
            ResolveResult::Found(RgInfo {
                path,
                source,
                version,
            })
        }
        None => ResolveResult::NotFound {
            requested: requested.to_path_buf(),
        },
    }
}

/// Run `rg --version` and return the version number
fn query_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    parse_rg_version(&String::from_utf8_lossy(&output.stdout))
}

/// Parse the first line of `rg --version`
///
/// Expected formats:
/// - "ripgrep 14.1.0"
/// - "ripgrep 13.0.0 (rev af6b6c543b)"
fn parse_rg_version(output: &str) -> Option<String> {
    let first = output.lines().next()?.trim();
    let mut parts = first.split_whitespace();
    if parts.next()? != "ripgrep" {
        return None;
    }
    let version = parts.next()?;
    version.contains('.').then(|| version.to_string())
}
