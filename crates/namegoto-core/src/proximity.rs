//! Ordering of candidates that share one short name

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::score::ScoredCandidate;

/// Closeness of candidates to a usage context.
///
/// Proximity is domain knowledge (module distance, file locality, ...) supplied by the
/// caller. `Less` means `a` is closer than `b`.
pub trait Proximity<T> {
    fn compare(&self, context: Option<&T>, a: &T, b: &T) -> Ordering;
}

impl<T, F> Proximity<T> for F
where
    F: Fn(Option<&T>, &T, &T) -> Ordering,
{
    fn compare(&self, context: Option<&T>, a: &T, b: &T) -> Ordering {
        self(context, a, b)
    }
}

/// Form in which an entity is present in the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Source element
    #[default]
    Source,
    /// Compiled element that navigates to its source counterpart
    CompiledWithSource,
    /// Compiled element that navigates to itself
    CompiledOnly,
}

impl Representation {
    /// Tie-break weight; lower sorts first
    pub fn weight(self) -> u8 {
        match self {
            Representation::CompiledOnly => 1,
            Representation::Source | Representation::CompiledWithSource => 0,
        }
    }
}

/// Total order over same-named candidates: proximity, then full name, then
/// representation weight
pub struct ProximityComparator<'a, T> {
    proximity: Option<&'a dyn Proximity<T>>,
    context: Option<&'a T>,
}

impl<'a, T> ProximityComparator<'a, T> {
    pub fn new(proximity: Option<&'a dyn Proximity<T>>, context: Option<&'a T>) -> Self {
        Self { proximity, context }
    }

    pub fn compare(&self, a: &ScoredCandidate<T>, b: &ScoredCandidate<T>) -> Ordering {
        self.proximity
            .map_or(Ordering::Equal, |p| p.compare(self.context, &a.item, &b.item))
            .then_with(|| a.full_name.cmp(&b.full_name))
            .then_with(|| {
                a.representation
                    .weight()
                    .cmp(&b.representation.weight())
            })
    }

    /// Stable sort of one group
    pub fn sort(&self, group: &mut [ScoredCandidate<T>]) {
        group.sort_by(|a, b| self.compare(a, b));
    }
}
