//! Chart-level settings consulted when deriving titles.

use serde::{Deserialize, Serialize};

/// Default display label for `count` aggregates.
pub const DEFAULT_COUNT_TITLE: &str = "Number of Records";

/// Read-only configuration owned by the enclosing chart specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Title used for fields that are bare `count` aggregates.
    pub count_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count_title: DEFAULT_COUNT_TITLE.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count_title(mut self, title: impl Into<String>) -> Self {
        self.count_title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_missing_members() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.count_title, DEFAULT_COUNT_TITLE);

        let config: Config = serde_json::from_str(r#"{"countTitle": "Rows"}"#).unwrap();
        assert_eq!(config.count_title, "Rows");
    }
}
