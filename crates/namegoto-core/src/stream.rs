//! Result streaming
//!
//! Drives one search from raw pattern to ranked stream:
//!
//! 1. Resolve the pattern into name and qualifier parts
//! 2. Match every short name, sort by [`MatchResult`] order
//! 3. Per matching short name, fetch candidates, score their qualifiers and order the
//!    group by proximity then score
//! 4. Emit start matches immediately; defer middle matches and release them after a
//!    separator, or in a final batch
//!
//! The consumer can stop the search at any item; cancellation is polled between groups
//! and around every candidate lookup.

use tracing::{debug, trace};

use crate::cancel::Cancellation;
use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::matcher::{Matcher, NameFilter};
use crate::proximity::{Proximity, ProximityComparator};
use crate::qualifier::{self, ResolvedPattern, SubPattern};
use crate::score::{match_qualifier, MatchResult, ScoredCandidate};
use crate::source::{Consumer, Emitted, NameSource};
use crate::tokenize;

/// How a search that did not fail came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every matching candidate was offered to the consumer
    Completed { emitted: usize },
    /// The consumer declined further results
    Stopped { emitted: usize },
}

impl SearchOutcome {
    /// Number of items (not separators) delivered
    pub fn emitted(&self) -> usize {
        match *self {
            SearchOutcome::Completed { emitted } | SearchOutcome::Stopped { emitted } => emitted,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SearchOutcome::Completed { .. })
    }
}

/// One configured search over a name source.
///
/// Holds only borrowed, read-only collaborators; all working buffers are created per
/// [`Search::run`] call, so one `Search` can serve many independent runs.
pub struct Search<'a, S: NameSource> {
    source: &'a S,
    config: &'a SearchConfig,
    filter: NameFilter<'a>,
    proximity: Option<&'a dyn Proximity<S::Item>>,
    context: Option<&'a S::Item>,
}

impl<'a, S: NameSource> Search<'a, S> {
    pub fn new(source: &'a S, config: &'a SearchConfig) -> Self {
        Self {
            source,
            config,
            filter: NameFilter::Fuzzy,
            proximity: None,
            context: None,
        }
    }

    /// Replace fuzzy short-name matching
    pub fn filter(mut self, filter: NameFilter<'a>) -> Self {
        self.filter = filter;
        self
    }

    /// Order same-named candidates by closeness before full name
    pub fn proximity(mut self, proximity: &'a dyn Proximity<S::Item>) -> Self {
        self.proximity = Some(proximity);
        self
    }

    /// Anchor handed to the proximity comparator
    pub fn context(mut self, context: &'a S::Item) -> Self {
        self.context = Some(context);
        self
    }

    /// Run the search for `pattern`, streaming results into `consumer`.
    ///
    /// Returns `Err(Cancelled)` when `cancel` fires; items already delivered stand.
    pub fn run<C>(
        &self,
        pattern: &str,
        cancel: &dyn Cancellation,
        consumer: &mut C,
    ) -> SearchResult<SearchOutcome>
    where
        C: Consumer<S::Item> + ?Sized,
    {
        let mut stream = Stream::new(consumer);
        match self.run_stream(pattern, cancel, &mut stream) {
            Err(SearchError::Cancelled) => {
                debug!(pattern, emitted = stream.emitted, "search cancelled");
                Err(SearchError::Cancelled)
            }
            other => other,
        }
    }

    fn run_stream<C>(
        &self,
        pattern: &str,
        cancel: &dyn Cancellation,
        stream: &mut Stream<'_, S::Item, C>,
    ) -> SearchResult<SearchOutcome>
    where
        C: Consumer<S::Item> + ?Sized,
    {
        self.config.validate()?;
        if self.config.strip_markup(pattern).is_empty() && !self.config.allow_empty_pattern {
            return Err(SearchError::InvalidConfig(
                "empty pattern while empty-pattern listing is disallowed".to_string(),
            ));
        }

        let resolved = ResolvedPattern::resolve(pattern, self.config);
        if resolved.name.is_empty() && !self.config.allow_empty_pattern {
            debug!(pattern, "no name part to match");
            return Ok(stream.completed());
        }

        let matching = qualifier::matching_pattern(&resolved.name, self.config.search_anywhere);
        let names = self.match_names(&matching)?;
        debug!(
            pattern,
            name = %resolved.name,
            qualifier = %resolved.qualifier,
            names = names.len(),
            "matched short names"
        );
        cancel.check()?;

        let sub_patterns = qualifier::sub_patterns(
            &resolved.qualifier,
            &self.config.separators,
            self.config.search_anywhere,
        );
        let ranked = self.filter.is_ranked();
        let mut after_start_match = false;

        for result in &names {
            cancel.check()?;
            let mut need_separator = ranked && !result.start_match && after_start_match;

            let mut candidates = self.source.candidates_for_short_name(
                &result.name,
                self.config.include_non_project,
                &resolved.name,
                cancel,
            )?;
            cancel.check()?;
            trace!(name = %result.name, candidates = candidates.len(), "group");

            if candidates.len() > 1 {
                for candidate in self.rank_group(candidates, &sub_patterns) {
                    if !candidate.score.start_match {
                        stream.defer(candidate.item);
                        continue;
                    }
                    if need_separator && !stream.start_middle_matches() {
                        return Ok(stream.stopped());
                    }
                    if !stream.emit(candidate.item) {
                        return Ok(stream.stopped());
                    }
                    need_separator = false;
                    after_start_match = result.start_match;
                }
            } else if let Some(item) = candidates.pop() {
                if let Some(candidate) = self.score(item, &sub_patterns) {
                    if need_separator && !stream.start_middle_matches() {
                        return Ok(stream.stopped());
                    }
                    if !stream.emit(candidate.item) {
                        return Ok(stream.stopped());
                    }
                    after_start_match = result.start_match;
                }
            }
        }

        if !stream.flush_middle() {
            return Ok(stream.stopped());
        }
        debug!(pattern, emitted = stream.emitted, "search completed");
        Ok(stream.completed())
    }

    /// Short names matching `pattern`, best first
    fn match_names(&self, pattern: &str) -> SearchResult<Vec<MatchResult>> {
        let names = self
            .source
            .all_short_names(self.config.include_non_project)?;
        let matcher = Matcher::new(pattern, self.config.case_sensitivity);

        let mut results: Vec<MatchResult> = names
            .iter()
            .filter_map(|name| self.filter.evaluate(pattern, &matcher, name))
            .collect();
        results.sort();
        Ok(results)
    }

    /// Score and order the candidates sharing one short name
    fn rank_group(
        &self,
        candidates: Vec<S::Item>,
        sub_patterns: &[SubPattern],
    ) -> Vec<ScoredCandidate<S::Item>> {
        let mut group: Vec<_> = candidates
            .into_iter()
            .filter_map(|item| self.score(item, sub_patterns))
            .collect();

        ProximityComparator::new(self.proximity, self.context).sort(&mut group);
        group.sort_by(|a, b| {
            b.score
                .start_match
                .cmp(&a.score.start_match)
                .then_with(|| b.score.matching_degree.cmp(&a.score.matching_degree))
        });
        group
    }

    fn score(
        &self,
        item: S::Item,
        sub_patterns: &[SubPattern],
    ) -> Option<ScoredCandidate<S::Item>> {
        let full_name = self.source.full_name(&item)?;
        let segments = tokenize::split(&full_name, &self.config.separators);
        let score = match_qualifier(&full_name, &segments, sub_patterns)?;
        let representation = self.source.representation(&item);
        Some(ScoredCandidate {
            item,
            full_name,
            representation,
            score,
        })
    }
}

/// Short names matching `pattern`, in input order.
///
/// Applies markup stripping and the search-anywhere wildcard, but no qualifier
/// resolution: the whole pattern is matched against each name.
pub fn filter_names<N: AsRef<str>>(
    names: &[N],
    pattern: &str,
    config: &SearchConfig,
    filter: NameFilter<'_>,
) -> Vec<String> {
    let pattern =
        qualifier::matching_pattern(config.strip_markup(pattern), config.search_anywhere);
    let matcher = Matcher::new(&pattern, config.case_sensitivity);
    names
        .iter()
        .filter_map(|name| filter.evaluate(&pattern, &matcher, name.as_ref()))
        .map(|result| result.name)
        .collect()
}

/// Delivery state of one run: the consumer, the deferred middle matches and a count
struct Stream<'c, T, C: ?Sized> {
    consumer: &'c mut C,
    middle: Vec<T>,
    emitted: usize,
}

impl<'c, T, C> Stream<'c, T, C>
where
    C: Consumer<T> + ?Sized,
{
    fn new(consumer: &'c mut C) -> Self {
        Self {
            consumer,
            middle: Vec::new(),
            emitted: 0,
        }
    }

    fn emit(&mut self, item: T) -> bool {
        self.emitted += 1;
        self.consumer.accept(Emitted::Item(item))
    }

    fn defer(&mut self, item: T) {
        self.middle.push(item);
    }

    /// Separator, then every middle match deferred so far
    fn start_middle_matches(&mut self) -> bool {
        if !self.consumer.accept(Emitted::Separator) {
            return false;
        }
        self.flush_middle()
    }

    fn flush_middle(&mut self) -> bool {
        let middle = std::mem::take(&mut self.middle);
        for item in middle {
            if !self.emit(item) {
                return false;
            }
        }
        true
    }

    fn completed(&self) -> SearchOutcome {
        SearchOutcome::Completed {
            emitted: self.emitted,
        }
    }

    fn stopped(&self) -> SearchOutcome {
        SearchOutcome::Stopped {
            emitted: self.emitted,
        }
    }
}
