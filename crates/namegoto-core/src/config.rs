//! Search configuration

use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};
use crate::matcher::CaseSensitivity;

/// Options recognised by a single search invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Path or namespace delimiters used to split qualifiers and full names
    pub separators: Vec<String>,
    /// Also search names outside the project (libraries, SDKs)
    pub include_non_project: bool,
    /// Let the pattern match anywhere in a name, not just at word starts
    pub search_anywhere: bool,
    /// Allow listing everything for an empty pattern
    pub allow_empty_pattern: bool,
    /// Case policy for top-level name matching; qualifiers always ignore case
    pub case_sensitivity: CaseSensitivity,
    /// Model-specific markup removed from the start of the raw query (e.g. `@`)
    pub markup_prefix: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            separators: vec!["/".to_string(), ".".to_string()],
            include_non_project: false,
            search_anywhere: false,
            allow_empty_pattern: false,
            case_sensitivity: CaseSensitivity::None,
            markup_prefix: None,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    pub fn include_non_project(mut self, include: bool) -> Self {
        self.include_non_project = include;
        self
    }

    pub fn search_anywhere(mut self, anywhere: bool) -> Self {
        self.search_anywhere = anywhere;
        self
    }

    pub fn allow_empty_pattern(mut self, allow: bool) -> Self {
        self.allow_empty_pattern = allow;
        self
    }

    pub fn case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    pub fn markup_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.markup_prefix = Some(prefix.into());
        self
    }

    /// Reject configurations the resolver cannot work with
    pub fn validate(&self) -> SearchResult<()> {
        if self.separators.iter().any(String::is_empty) {
            return Err(SearchError::InvalidConfig(
                "separators must not be empty strings".to_string(),
            ));
        }
        if self.markup_prefix.as_deref() == Some("") {
            return Err(SearchError::InvalidConfig(
                "markup prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Remove the model-specific markup prefix from a raw query
    pub fn strip_markup<'a>(&self, pattern: &'a str) -> &'a str {
        match self.markup_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => pattern.strip_prefix(prefix).unwrap_or(pattern),
            _ => pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.separators, vec!["/", "."]);
        assert!(!config.allow_empty_pattern);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_separator_rejected() {
        let config = SearchConfig::new().separators(["/", ""]);
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_strip_markup() {
        let config = SearchConfig::new().markup_prefix("@");
        assert_eq!(config.strip_markup("@Override"), "Override");
        assert_eq!(config.strip_markup("Override"), "Override");
        assert_eq!(SearchConfig::new().strip_markup("@Override"), "@Override");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"search_anywhere": true, "case_sensitivity": "first_letter"}"#)
                .unwrap();
        assert!(config.search_anywhere);
        assert_eq!(config.case_sensitivity, CaseSensitivity::FirstLetter);
        assert_eq!(config.separators, vec!["/", "."]);
    }
}
