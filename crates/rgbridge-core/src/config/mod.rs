pub mod consts;
pub mod model;

pub use model::{ConfigFile, ServerConfig};
