//! sentence-level filtering
use std::fmt;
use std::ops::RangeInclusive;

use runiq::filters::{Filter as RuniqFilter, NaiveFilter};
use serde::{Deserialize, Serialize};
use unicode_script::UnicodeScript;

use super::filter::FilterMut;
use super::Filter;

/// Simple length filter.
/// Returns `false` if provided sentence is less than [Length::min_size] unicode codepoints.
///
/// [Length::min_size] is 20 by default.
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for Length {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().count() >= self.min_size
    }
}

impl Default for Length {
    /// Default minimum length for sentences is 20 Unicode Codepoints
    fn default() -> Self {
        Length { min_size: 20 }
    }
}

/// How a character is recognized as belonging to the target script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptMatcher {
    /// Inclusive codepoint range, usually a Unicode block.
    Block(RangeInclusive<char>),
    /// Unicode `Script` property.
    #[serde(skip)]
    Script(unicode_script::Script),
}

impl ScriptMatcher {
    /// Tibetan Unicode block (U+0F00..U+0FFF).
    pub fn tibetan() -> Self {
        ScriptMatcher::Block('\u{0F00}'..='\u{0FFF}')
    }

    pub fn matches(&self, c: char) -> bool {
        match self {
            ScriptMatcher::Block(range) => range.contains(&c),
            ScriptMatcher::Script(script) => c.script() == *script,
        }
    }
}

impl Default for ScriptMatcher {
    fn default() -> Self {
        Self::tibetan()
    }
}

impl fmt::Display for ScriptMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptMatcher::Block(range) => write!(
                f,
                "U+{:04X}..U+{:04X}",
                *range.start() as u32,
                *range.end() as u32
            ),
            ScriptMatcher::Script(script) => write!(f, "{}", script.full_name()),
        }
    }
}

/// Script presence filter.
/// Returns `true` if at least one character of the sentence matches the target script.
#[derive(Default)]
pub struct Script {
    matcher: ScriptMatcher,
}

impl Script {
    pub fn new(matcher: ScriptMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &ScriptMatcher {
        &self.matcher
    }
}

impl Filter<&str> for Script {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().any(|c| self.matcher.matches(c))
    }
}

/// Link filter.
/// Returns `false` if the sentence starts with one of the link prefixes.
pub struct NoLink {
    prefixes: Vec<String>,
}

impl NoLink {
    pub fn with_prefixes(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }
}

impl Filter<&str> for NoLink {
    fn detect(&self, sentence: &str) -> bool {
        !self
            .prefixes
            .iter()
            .any(|prefix| sentence.starts_with(prefix.as_str()))
    }
}

impl Default for NoLink {
    fn default() -> Self {
        Self {
            prefixes: vec!["www.".to_string(), "https".to_string()],
        }
    }
}

/// Exact duplicate filter.
///
/// Returns `true` the first time a sentence is seen, `false` afterwards.
#[derive(Default)]
pub struct Unique {
    seen: NaiveFilter,
}

impl FilterMut<&str> for Unique {
    fn detect_mut(&mut self, sentence: &str) -> bool {
        self.seen.detect(sentence.as_bytes())
    }
}
