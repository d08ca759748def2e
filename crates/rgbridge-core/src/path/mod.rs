//! Path guard for requested search roots
//!
//! Every operation that touches the filesystem passes its requested path
//! through [`validate_path`] before anything is spawned. The check is purely
//! lexical:
//!
//! - relative paths are joined onto the current working directory
//! - `.` segments are dropped and `..` pops the previous segment
//!   (`..` at the root stays at the root)
//! - symlinks are NOT resolved
//!
//! Containment is decided with `Path::starts_with`, which compares whole
//! components. A raw string prefix would let `/tmp/evil` through when only
//! `/tmp/ev` is allowed.
//!
//! ```rust
//! use std::path::PathBuf;
//! use rgbridge_core::path::validate_path;
//!
//! let roots = vec![PathBuf::from("/srv/code")];
//! assert!(validate_path("/srv/code/app", &roots).is_ok());
//! assert!(validate_path("/srv/code/../secrets", &roots).is_err());
//! ```

use crate::error::{Result, RgBridgeError};
use std::path::{Component, Path, PathBuf};

/// Lexically normalize `path`, joining it onto `base` when relative.
///
/// No filesystem access is performed.
pub fn normalize_path(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // Never climb above the root
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}

/// Check `requested` against the allowed roots.
///
/// An empty `allowed_roots` means no restriction: the path is returned
/// unchanged and the working directory is never read. Otherwise the
/// normalized path is returned on success.
///
/// # Errors
///
/// - [`RgBridgeError::OutsideAllowedRoots`] when no root contains the path
/// - [`RgBridgeError::Io`] when the current directory cannot be read
pub fn validate_path(requested: impl AsRef<Path>, allowed_roots: &[PathBuf]) -> Result<PathBuf> {
    let requested = requested.as_ref();
    if allowed_roots.is_empty() {
        return Ok(requested.to_path_buf());
    }

    let cwd = std::env::current_dir()?;
    validate_path_from(requested, allowed_roots, &cwd)
}

/// [`validate_path`] with an explicit base directory for relative paths
pub fn validate_path_from(
    requested: &Path,
    allowed_roots: &[PathBuf],
    base: &Path,
) -> Result<PathBuf> {
    if allowed_roots.is_empty() {
        return Ok(requested.to_path_buf());
    }

    let resolved = normalize_path(requested, base);
    let contained = allowed_roots
        .iter()
        .map(|root| normalize_path(root, base))
        .any(|root| resolved.starts_with(&root));

    if contained {
        Ok(resolved)
    } else {
        Err(RgBridgeError::OutsideAllowedRoots {
            path: resolved,
            allowed_roots: allowed_roots.to_vec(),
        })
    }
}
