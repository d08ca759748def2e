// Core modules
pub mod config;
pub mod error;
pub mod path;

// Re-export commonly used types
pub use config::{ConfigFile, ServerConfig};
pub use error::{Result, RgBridgeError};
pub use path::{normalize_path, validate_path};
