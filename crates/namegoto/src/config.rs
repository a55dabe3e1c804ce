//! Environment configuration
//!
//! Environment variables:
//! - `NAMEGOTO_SEPARATORS`: whitespace-separated separators (default: `/ .`)
//! - `NAMEGOTO_SEARCH_ANYWHERE`: match anywhere in a name (default: false)
//! - `NAMEGOTO_INCLUDE_NON_PROJECT`: include external symbols (default: false)
//! - `NAMEGOTO_ALLOW_EMPTY`: list everything for an empty pattern (default: false)
//! - `NAMEGOTO_CASE`: `none`, `smart` or `exact` (default: none)
//! - `NAMEGOTO_MARKUP`: prefix stripped from the query, e.g. `@`
//! - `NAMEGOTO_LIMIT`: stop after this many results

use namegoto_core::{CaseSensitivity, SearchConfig};

use crate::error::{Error, Result};

/// Search options plus output limit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub search: SearchConfig,
    pub limit: Option<usize>,
}

impl CliConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut search = SearchConfig::default();

        if let Some(value) = lookup("NAMEGOTO_SEPARATORS") {
            let separators: Vec<&str> = value.split_whitespace().collect();
            if separators.is_empty() {
                return Err(Error::Config("NAMEGOTO_SEPARATORS is empty".to_string()));
            }
            search = search.separators(separators);
        }
        if let Some(value) = lookup("NAMEGOTO_SEARCH_ANYWHERE") {
            search = search.search_anywhere(parse_bool("NAMEGOTO_SEARCH_ANYWHERE", &value)?);
        }
        if let Some(value) = lookup("NAMEGOTO_INCLUDE_NON_PROJECT") {
            search =
                search.include_non_project(parse_bool("NAMEGOTO_INCLUDE_NON_PROJECT", &value)?);
        }
        if let Some(value) = lookup("NAMEGOTO_ALLOW_EMPTY") {
            search = search.allow_empty_pattern(parse_bool("NAMEGOTO_ALLOW_EMPTY", &value)?);
        }
        if let Some(value) = lookup("NAMEGOTO_CASE") {
            search = search.case_sensitivity(parse_case(&value)?);
        }
        if let Some(value) = lookup("NAMEGOTO_MARKUP") {
            search = search.markup_prefix(value);
        }

        let limit = lookup("NAMEGOTO_LIMIT")
            .map(|value| {
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| Error::Config(format!("NAMEGOTO_LIMIT={value:?}: {e}")))
            })
            .transpose()?;

        search.validate()?;
        Ok(Self { search, limit })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("{key}={value:?} is not a boolean"))),
    }
}

fn parse_case(value: &str) -> Result<CaseSensitivity> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" => Ok(CaseSensitivity::None),
        "smart" | "first_letter" => Ok(CaseSensitivity::FirstLetter),
        "exact" | "all" => Ok(CaseSensitivity::All),
        _ => Err(Error::Config(format!(
            "NAMEGOTO_CASE={value:?}: expected none, smart or exact"
        ))),
    }
}
