//! Collaborator contracts for a search

use crate::cancel::Cancellation;
use crate::error::SearchResult;
use crate::proximity::Representation;

/// Backing index of names and the entities behind them.
///
/// The engine never stores names itself; every search pulls short names and
/// candidates through this trait. Implementations may be backed by:
/// - an on-disk symbol index
/// - a language server's workspace model
/// - [`MemoryIndex`](super::MemoryIndex) for tests and small catalogs
pub trait NameSource {
    /// Handle to one indexed entity
    type Item;

    /// All distinct short names.
    ///
    /// `include_non_project` widens the set to libraries and other external names.
    fn all_short_names(&self, include_non_project: bool) -> SearchResult<Vec<String>>;

    /// All entities whose short name is exactly `name`.
    ///
    /// `name_pattern` is the unqualified pattern the user typed, for sources that can use
    /// it to narrow their lookup. Long lookups should poll `cancel` and return
    /// `SearchError::Cancelled` once it fires.
    fn candidates_for_short_name(
        &self,
        name: &str,
        include_non_project: bool,
        name_pattern: &str,
        cancel: &dyn Cancellation,
    ) -> SearchResult<Vec<Self::Item>>;

    /// Fully qualified name; `None` excludes the item from qualifier matching
    fn full_name(&self, item: &Self::Item) -> Option<String>;

    /// Form of the item, used to break ties between equal full names
    fn representation(&self, _item: &Self::Item) -> Representation {
        Representation::Source
    }
}

/// One element of the result stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted<T> {
    Item(T),
    /// Marks the boundary between prefix matches and middle matches
    Separator,
}

impl<T> Emitted<T> {
    pub fn item(&self) -> Option<&T> {
        match self {
            Emitted::Item(item) => Some(item),
            Emitted::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Emitted::Separator)
    }
}

/// Receiver of streamed results; returning `false` stops the search
pub trait Consumer<T> {
    fn accept(&mut self, emitted: Emitted<T>) -> bool;
}

impl<T, F> Consumer<T> for F
where
    F: FnMut(Emitted<T>) -> bool,
{
    fn accept(&mut self, emitted: Emitted<T>) -> bool {
        self(emitted)
    }
}

/// Consumer that keeps everything it is given
#[derive(Debug, Clone)]
pub struct Collect<T> {
    pub items: Vec<Emitted<T>>,
}

impl<T> Collect<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<Emitted<T>> {
        self.items
    }
}

impl<T> Default for Collect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Consumer<T> for Collect<T> {
    fn accept(&mut self, emitted: Emitted<T>) -> bool {
        self.items.push(emitted);
        true
    }
}
