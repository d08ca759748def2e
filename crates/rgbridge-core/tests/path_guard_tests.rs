//! Path guard and config loading against real directories

use rgbridge_core::{ConfigFile, RgBridgeError, ServerConfig, validate_path};
use rgbridge_testkit::{temp_dir_in_workspace, write_tree};
use std::path::PathBuf;

#[test]
fn test_file_inside_root_is_allowed() {
    let temp = temp_dir_in_workspace();
    let root = temp.path().join("project");
    write_tree(&root, &[("src/lib.rs", "pub fn f() {}\n")]);

    let requested = root.join("src").join("lib.rs");
    let resolved = validate_path(&requested, std::slice::from_ref(&root)).unwrap();
    assert_eq!(resolved, requested);
}

#[test]
fn test_sibling_sharing_name_prefix_is_rejected() {
    let temp = temp_dir_in_workspace();
    write_tree(
        temp.path(),
        &[("proj/a.txt", "a\n"), ("project-secrets/key.txt", "k\n")],
    );

    let roots = vec![temp.path().join("proj")];
    let err = validate_path(temp.path().join("project-secrets"), &roots).unwrap_err();
    assert_eq!(err.code(), "PATH_OUTSIDE_ALLOWED_ROOTS");
    assert!(err.to_string().contains("is outside allowed directories"));
}

#[test]
fn test_dot_dot_escape_is_rejected() {
    let temp = temp_dir_in_workspace();
    let root = temp.path().join("inner");
    write_tree(&root, &[("x.txt", "x\n")]);

    let escape = root.join("..").join("..");
    let err = validate_path(&escape, std::slice::from_ref(&root)).unwrap_err();
    match err {
        RgBridgeError::OutsideAllowedRoots { path, .. } => {
            assert!(!path.to_string_lossy().contains(".."));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_any_of_several_roots_is_enough() {
    let temp = temp_dir_in_workspace();
    let first = temp.path().join("one");
    let second = temp.path().join("two");
    write_tree(temp.path(), &[("one/a", ""), ("two/b", "")]);

    let roots = vec![first, second.clone()];
    assert!(validate_path(second.join("b"), &roots).is_ok());
}

#[test]
#[cfg(unix)]
fn test_symlinks_are_not_followed() {
    let temp = temp_dir_in_workspace();
    let root = temp.path().join("root");
    let outside = temp.path().join("outside");
    write_tree(temp.path(), &[("root/keep", ""), ("outside/secret", "s\n")]);
    std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

    // Lexically inside the root, so the guard accepts it
    let resolved = validate_path(root.join("link"), std::slice::from_ref(&root)).unwrap();
    assert_eq!(resolved, root.join("link"));
}

#[test]
fn test_config_file_round_trip_from_disk() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("rgbridge.toml");
    std::fs::write(
        &path,
        "allowed_dirs = [\"/srv/code\"]\nmax_result_chars = 500\n",
    )
    .unwrap();

    let config = ServerConfig::try_from(ConfigFile::from_file(&path).unwrap()).unwrap();
    assert_eq!(config.allowed_roots, vec![PathBuf::from("/srv/code")]);
    assert_eq!(config.default_max_characters, Some(500));
    assert_eq!(config.max_output_bytes, 20 * 1024 * 1024);
}

#[test]
fn test_config_file_errors_name_the_file() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "max_result_chars = \"lots\"\n").unwrap();

    let err = ConfigFile::from_file(&path).unwrap_err();
    assert_eq!(err.code(), "CONFIG_INVALID");
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp = temp_dir_in_workspace();
    let err = ConfigFile::from_file(&temp.path().join("nope.toml")).unwrap_err();
    assert_eq!(err.code(), "IO_ERROR");
}
