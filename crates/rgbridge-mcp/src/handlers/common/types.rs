//! 複数のツールで共有する引数型

use rgbridge_rg::{CountMode, SortBy};
use rmcp::schemars;
use serde::Deserialize;

/// A single string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Normalize an optional union field into a plain list
pub(crate) fn list(value: Option<OneOrMany>) -> Vec<String> {
    value.map(OneOrMany::into_vec).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortByArg {
    Path,
    Modified,
    Created,
}

impl From<SortByArg> for SortBy {
    fn from(arg: SortByArg) -> Self {
        match arg {
            SortByArg::Path => SortBy::Path,
            SortByArg::Modified => SortBy::Modified,
            SortByArg::Created => SortBy::Created,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CountModeArg {
    /// Count matching lines (default)
    Lines,
    /// Count every match, including several on one line
    Matches,
}

impl From<CountModeArg> for CountMode {
    fn from(arg: CountModeArg) -> Self {
        match arg {
            CountModeArg::Lines => CountMode::Lines,
            CountModeArg::Matches => CountMode::Matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_or_many_accepts_string() {
        let value: OneOrMany = serde_json::from_value(json!("rust")).unwrap();
        assert_eq!(value.into_vec(), vec!["rust".to_string()]);
    }

    #[test]
    fn test_one_or_many_accepts_list() {
        let value: OneOrMany = serde_json::from_value(json!(["*.rs", "*.toml"])).unwrap();
        assert_eq!(
            value.into_vec(),
            vec!["*.rs".to_string(), "*.toml".to_string()]
        );
    }

    #[test]
    fn test_one_or_many_rejects_number() {
        assert!(serde_json::from_value::<OneOrMany>(json!(3)).is_err());
    }

    #[test]
    fn test_missing_union_is_empty_list() {
        assert!(list(None).is_empty());
    }

    #[test]
    fn test_sort_and_count_mode_names() {
        let sort: SortByArg = serde_json::from_value(json!("modified")).unwrap();
        assert_eq!(SortBy::from(sort), SortBy::Modified);

        let mode: CountModeArg = serde_json::from_value(json!("matches")).unwrap();
        assert_eq!(CountMode::from(mode), CountMode::Matches);

        assert!(serde_json::from_value::<SortByArg>(json!("size")).is_err());
    }
}
