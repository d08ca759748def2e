use crate::config::consts::exec::{DEFAULT_MAX_OUTPUT_BYTES, DEFAULT_RG_PROGRAM};
use crate::error::{Result, RgBridgeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// rgbridge.toml schema - すべてのキーは省略可能
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub allowed_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub max_result_chars: Option<usize>,
    #[serde(default)]
    pub max_output_bytes: Option<usize>,
    #[serde(default)]
    pub rg_path: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Load and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            RgBridgeError::ConfigInvalid(msg) => {
                RgBridgeError::ConfigInvalid(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RgBridgeError::ConfigInvalid(e.to_string()))
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Scalar fields in `overrides` win when set. `allowed_dirs` is replaced
    /// wholesale when `overrides` lists any directory; the two lists are never
    /// merged.
    pub fn overlay(self, overrides: ConfigFile) -> ConfigFile {
        ConfigFile {
            allowed_dirs: if overrides.allowed_dirs.is_empty() {
                self.allowed_dirs
            } else {
                overrides.allowed_dirs
            },
            max_result_chars: overrides.max_result_chars.or(self.max_result_chars),
            max_output_bytes: overrides.max_output_bytes.or(self.max_output_bytes),
            rg_path: overrides.rg_path.or(self.rg_path),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
        }
    }
}

/// Process-wide settings, fixed at startup and shared read-only by every handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Empty means unrestricted
    pub allowed_roots: Vec<PathBuf>,
    pub default_max_characters: Option<usize>,
    pub max_output_bytes: usize,
    pub rg_path: PathBuf,
    pub timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_roots: Vec::new(),
            default_max_characters: None,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            rg_path: PathBuf::from(DEFAULT_RG_PROGRAM),
            timeout: None,
        }
    }
}

impl TryFrom<ConfigFile> for ServerConfig {
    type Error = RgBridgeError;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let defaults = ServerConfig::default();

        let max_output_bytes = file.max_output_bytes.unwrap_or(defaults.max_output_bytes);
        if max_output_bytes == 0 {
            return Err(RgBridgeError::ConfigInvalid(
                "max_output_bytes must be greater than 0".to_string(),
            ));
        }

        let timeout = match file.timeout_secs {
            Some(0) => {
                return Err(RgBridgeError::ConfigInvalid(
                    "timeout_secs must be greater than 0".to_string(),
                ))
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        if let Some(dir) = file.allowed_dirs.iter().find(|d| d.as_os_str().is_empty()) {
            return Err(RgBridgeError::ConfigInvalid(format!(
                "allowed directory must not be empty: {:?}",
                dir
            )));
        }

        Ok(ServerConfig {
            allowed_roots: file.allowed_dirs,
            default_max_characters: file.max_result_chars,
            max_output_bytes,
            rg_path: file.rg_path.unwrap_or(defaults.rg_path),
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_defaults() {
        let config = ServerConfig::default();
        assert!(config.allowed_roots.is_empty());
        assert_eq!(config.default_max_characters, None);
        assert_eq!(config.max_output_bytes, 20_971_520);
        assert_eq!(config.rg_path, PathBuf::from("rg"));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_parse_full_file() {
        let file = ConfigFile::parse(
            r#"
allowed_dirs = ["/srv/code", "/home/me/src"]
max_result_chars = 40000
max_output_bytes = 1024
rg_path = "/opt/rg/bin/rg"
timeout_secs = 30
"#,
        )
        .unwrap();

        let config = ServerConfig::try_from(file).unwrap();
        assert_eq!(
            config.allowed_roots,
            vec![PathBuf::from("/srv/code"), PathBuf::from("/home/me/src")]
        );
        assert_eq!(config.default_max_characters, Some(40000));
        assert_eq!(config.max_output_bytes, 1024);
        assert_eq!(config.rg_path, PathBuf::from("/opt/rg/bin/rg"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_parse_empty_file_gives_defaults() {
        let file = ConfigFile::parse("").unwrap();
        assert_eq!(file, ConfigFile::default());
        assert_eq!(ServerConfig::try_from(file).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ConfigFile::parse("max_chars = 10").unwrap_err();
        assert_eq!(err.code(), "CONFIG_INVALID");
    }

    #[test]
    fn test_zero_output_ceiling_rejected() {
        let file = ConfigFile {
            max_output_bytes: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            ServerConfig::try_from(file),
            Err(RgBridgeError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let file = ConfigFile {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(ServerConfig::try_from(file).is_err());
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let file = ConfigFile {
            allowed_dirs: vec![PathBuf::from("/from/file")],
            max_result_chars: Some(100),
            max_output_bytes: Some(2048),
            rg_path: Some(PathBuf::from("/file/rg")),
            timeout_secs: None,
        };
        let cli = ConfigFile {
            allowed_dirs: vec![PathBuf::from("/from/cli")],
            max_result_chars: Some(5),
            timeout_secs: Some(9),
            ..Default::default()
        };

        let merged = file.overlay(cli);
        assert_eq!(merged.allowed_dirs, vec![PathBuf::from("/from/cli")]);
        assert_eq!(merged.max_result_chars, Some(5));
        assert_eq!(merged.max_output_bytes, Some(2048));
        assert_eq!(merged.rg_path, Some(PathBuf::from("/file/rg")));
        assert_eq!(merged.timeout_secs, Some(9));
    }

    #[test]
    fn test_overlay_keeps_file_dirs_when_cli_has_none() {
        let file = ConfigFile {
            allowed_dirs: vec![PathBuf::from("/a"), PathBuf::from("/b")],
            ..Default::default()
        };
        let merged = file.overlay(ConfigFile::default());
        assert_eq!(
            merged.allowed_dirs,
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }
}
