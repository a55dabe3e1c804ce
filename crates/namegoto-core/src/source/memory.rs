//! In-memory name index
//!
//! A simple map-based [`NameSource`] for tests, the CLI and small catalogs.
//! Not suitable for large workspaces: every symbol is held in memory.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::cancel::Cancellation;
use crate::error::SearchResult;
use crate::proximity::Representation;
use crate::source::traits::NameSource;
use crate::tokenize;

fn default_in_project() -> bool {
    true
}

/// One indexed entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub short_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_in_project")]
    pub in_project: bool,
    #[serde(default)]
    pub representation: Representation,
}

impl Symbol {
    pub fn new(short_name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            full_name: Some(full_name.into()),
            in_project: true,
            representation: Representation::Source,
        }
    }

    /// Symbol whose short name is the last segment of `full_name`
    pub fn from_full_name<S: AsRef<str>>(full_name: &str, separators: &[S]) -> Self {
        let segments = tokenize::split(full_name, separators);
        let short_name = segments.last().copied().unwrap_or(full_name);
        Self::new(short_name, full_name)
    }

    /// Symbol without a qualified name; it cannot pass qualifier matching
    pub fn unqualified(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            full_name: None,
            in_project: true,
            representation: Representation::Source,
        }
    }

    pub fn external(mut self) -> Self {
        self.in_project = false;
        self
    }

    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }
}

/// In-memory index of symbols by short name
#[derive(Debug, Default, Clone)]
pub struct MemoryIndex {
    symbols: Vec<Symbol>,
    by_name: AHashMap<String, Vec<usize>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut index = Self::new();
        for symbol in symbols {
            index.insert(symbol);
        }
        index
    }

    pub fn insert(&mut self, symbol: Symbol) {
        self.by_name
            .entry(symbol.short_name.clone())
            .or_default()
            .push(self.symbols.len());
        self.symbols.push(symbol);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in insertion order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    fn visible(&self, index: usize, include_non_project: bool) -> bool {
        include_non_project || self.symbols[index].in_project
    }
}

impl NameSource for MemoryIndex {
    type Item = Symbol;

    fn all_short_names(&self, include_non_project: bool) -> SearchResult<Vec<String>> {
        let mut names: Vec<String> = self
            .by_name
            .iter()
            .filter(|(_, indices)| indices.iter().any(|&i| self.visible(i, include_non_project)))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    fn candidates_for_short_name(
        &self,
        name: &str,
        include_non_project: bool,
        _name_pattern: &str,
        cancel: &dyn Cancellation,
    ) -> SearchResult<Vec<Symbol>> {
        cancel.check()?;
        Ok(self
            .by_name
            .get(name)
            .map(|indices| {
                indices
                    .iter()
                    .filter(|&&i| self.visible(i, include_non_project))
                    .map(|&i| self.symbols[i].clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn full_name(&self, item: &Symbol) -> Option<String> {
        item.full_name.clone()
    }

    fn representation(&self, item: &Symbol) -> Representation {
        item.representation
    }
}
