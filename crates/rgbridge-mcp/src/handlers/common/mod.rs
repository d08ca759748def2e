pub mod format;
pub(crate) mod run;
pub mod truncate;
pub mod types;

pub use format::format_result;
pub use truncate::{Truncated, truncate_text};
pub use types::{CountModeArg, OneOrMany, SortByArg};
