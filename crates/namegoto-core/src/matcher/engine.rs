//! Matcher - camel-hump fragment matching and degree grading

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::words::word_starts;

const WORD_START_BONUS: i32 = 1000;
const FRAGMENT_PENALTY: i32 = 2;
const EXACT_CASE_BONUS: i32 = 10;

/// Pattern characters taken into account; the rest of a longer pattern is ignored
pub const MAX_PATTERN_CHARS: usize = 256;

/// Case comparison policy for a pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Compare every character case-insensitively
    #[default]
    None,
    /// The first pattern letter must match case exactly ("smart" case)
    FirstLetter,
    /// Every character must match case exactly
    All,
}

/// Outcome of matching one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// Matched character ranges in the name, in order
    pub fragments: Vec<Range<usize>>,
    pub degree: i32,
    pub start_match: bool,
}

#[derive(Debug, Clone, Copy)]
struct PatternChar {
    ch: char,
    /// Preceded by `*`: the fragment starting here may begin anywhere
    anywhere: bool,
    /// Preceded by a space: a new fragment must begin here
    breaks: bool,
}

/// Reusable matcher bound to one pattern.
///
/// Pure: the same name always yields the same result, so a single matcher can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    chars: Vec<PatternChar>,
    anchored_end: bool,
    case_sensitivity: CaseSensitivity,
    first_letter: Option<usize>,
}

impl Matcher {
    /// Build a matcher for `pattern`
    pub fn new(pattern: &str, case_sensitivity: CaseSensitivity) -> Self {
        let mut chars = Vec::with_capacity(pattern.len());
        let mut anywhere = false;
        let mut breaks = false;

        let mut truncated = false;

        for ch in pattern.chars() {
            if chars.len() == MAX_PATTERN_CHARS && ch != '*' && ch != ' ' {
                truncated = true;
                break;
            }
            match ch {
                '*' => anywhere = true,
                ' ' => breaks = true,
                _ => {
                    chars.push(PatternChar {
                        ch,
                        anywhere,
                        breaks,
                    });
                    anywhere = false;
                    breaks = false;
                }
            }
        }

        let first_letter = chars.iter().position(|c| c.ch.is_alphabetic());

        Self {
            pattern: pattern.to_string(),
            anchored_end: breaks && !truncated && !chars.is_empty(),
            chars,
            case_sensitivity,
            first_letter,
        }
    }

    /// The pattern this matcher was built from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    pub fn matches(&self, name: &str) -> bool {
        self.match_name(name).is_some()
    }

    /// Quality of the match; only meaningful when [`Matcher::matches`] is true
    pub fn matching_degree(&self, name: &str) -> i32 {
        self.match_name(name).map_or(0, |m| m.degree)
    }

    /// Whether the match begins at the first character of `name`
    pub fn is_start_match(&self, name: &str) -> bool {
        self.match_name(name).is_some_and(|m| m.start_match)
    }

    /// Match `name`, returning fragments, degree and start flag in one pass
    pub fn match_name(&self, name: &str) -> Option<NameMatch> {
        if self.chars.is_empty() {
            return Some(NameMatch {
                fragments: Vec::new(),
                degree: 0,
                start_match: true,
            });
        }

        let name: Vec<char> = name.chars().collect();
        if name.len() < self.chars.len() {
            return None;
        }

        let starts = word_starts(&name);
        let mut alignment = Alignment {
            matcher: self,
            name: &name,
            starts: &starts,
            dead: vec![false; (self.chars.len() + 1) * (name.len() + 1)],
            fragments: Vec::new(),
        };

        if !alignment.run(0, 0) {
            return None;
        }
        let fragments = alignment.fragments;
        Some(self.grade(&name, &starts, fragments))
    }

    fn char_matches(&self, index: usize, c: char) -> bool {
        let p = self.chars[index].ch;
        if p == c {
            return true;
        }
        match self.case_sensitivity {
            CaseSensitivity::All => false,
            CaseSensitivity::FirstLetter if self.first_letter == Some(index) => false,
            _ => p.to_lowercase().eq(c.to_lowercase()),
        }
    }

    fn grade(&self, name: &[char], starts: &[bool], fragments: Vec<Range<usize>>) -> NameMatch {
        let first = fragments.first().map_or(0, |f| f.start);
        let end = fragments.last().map_or(0, |f| f.end);

        let mut degree = if starts[first] {
            i64::from(WORD_START_BONUS)
        } else {
            0
        };
        let mut exact_case = 0;
        let mut index = 0;
        for fragment in &fragments {
            let len = fragment.len() as i64;
            degree += len * len - i64::from(FRAGMENT_PENALTY);
            for ni in fragment.clone() {
                if self.chars[index].ch == name[ni] {
                    exact_case += 1;
                }
                index += 1;
            }
        }
        degree += exact_case * i64::from(EXACT_CASE_BONUS);

        if end == name.len() {
            degree += 1;
        }

        let skipped = (first..end)
            .filter(|&i| starts[i] && !fragments.iter().any(|f| f.contains(&i)))
            .count();
        degree -= skipped as i64;

        NameMatch {
            start_match: first == 0,
            fragments,
            degree: degree.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        }
    }
}

/// Backtracking fragment alignment over one name
struct Alignment<'a> {
    matcher: &'a Matcher,
    name: &'a [char],
    starts: &'a [bool],
    // (pattern index, name index) pairs already known not to complete
    dead: Vec<bool>,
    fragments: Vec<Range<usize>>,
}

impl Alignment<'_> {
    fn run(&mut self, pi: usize, ni: usize) -> bool {
        let matcher = self.matcher;
        let pattern = &matcher.chars;
        if pi == pattern.len() {
            return !matcher.anchored_end || ni == self.name.len();
        }

        let slot = pi * (self.name.len() + 1) + ni;
        if self.dead[slot] {
            return false;
        }

        let anywhere = pattern[pi].anywhere;
        if let Some(last) = self.name.len().checked_sub(pattern.len() - pi) {
            for start in ni..=last {
                if !(anywhere || self.starts[start])
                    || !matcher.char_matches(pi, self.name[start])
                {
                    continue;
                }

                let longest = self.run_length(pi, start);
                for len in (1..=longest).rev() {
                    self.fragments.push(start..start + len);
                    if self.run(pi + len, start + len) {
                        return true;
                    }
                    self.fragments.pop();
                }
            }
        }

        self.dead[slot] = true;
        false
    }

    /// Longest run of pattern chars from `pi` matching consecutively at `start`
    fn run_length(&self, pi: usize, start: usize) -> usize {
        let pattern = &self.matcher.chars;
        let mut len = 1;
        while pi + len < pattern.len() && start + len < self.name.len() {
            let next = pattern[pi + len];
            if next.anywhere
                || next.breaks
                || !self.matcher.char_matches(pi + len, self.name[start + len])
            {
                break;
            }
            len += 1;
        }
        len
    }
}
