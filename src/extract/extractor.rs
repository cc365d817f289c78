//! Sentence extraction.
//!
//! Blocks are split on the delimiter into segments. Segments ending with a connector are held
//! back and prepended to the next segment, even if it belongs to the next block.
//! Each candidate is then checked and cleaned:
//!
//! - it has to contain at least one character of the target script,
//! - whitespace is collapsed, and the result is trimmed,
//! - it must not start with a link prefix,
//! - it has to be at least `min_length` codepoints long,
//! - the delimiter is appended if missing,
//! - it must not have been emitted before in the same extraction.
//!
//! A held back segment that is still pending when blocks run out is dropped.
use std::fmt;

use itertools::Itertools;
use log::{debug, info};

use super::block::TextBlock;
use super::config::ExtractorConfig;
use crate::filtering::{Filter, FilterMut, Length, NoLink, Script, Unique};

/// A cleaned sentence that passed every filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence(String);

impl Sentence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Sentence> for String {
    fn from(s: Sentence) -> String {
        s.0
    }
}

impl PartialEq<&str> for Sentence {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No character of the target script.
    NoTargetScript,
    /// Starts with a link prefix.
    Link,
    TooShort,
    /// Already emitted.
    Duplicate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectReason::NoTargetScript => "no target script",
            RejectReason::Link => "link",
            RejectReason::TooShort => "too short",
            RejectReason::Duplicate => "duplicate",
        };
        f.write_str(s)
    }
}

/// A dropped candidate and the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    reason: RejectReason,
    text: String,
}

impl Rejection {
    fn new(reason: RejectReason, text: String) -> Self {
        Self { reason, text }
    }

    pub fn reason(&self) -> RejectReason {
        self.reason
    }

    /// Candidate text, as it was when rejected.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.text.chars().take(50).collect();
        write!(f, "Rejected ({}): {}...", self.reason, preview)
    }
}

/// Result of processing one candidate.
pub type Outcome = Result<Sentence, Rejection>;

/// Extracts sentences from [TextBlock]s.
///
/// The extractor itself is stateless: pending continuations and already seen sentences
/// live in the iterators returned by [SentenceExtractor::extract] and [SentenceExtractor::outcomes].
pub struct SentenceExtractor {
    config: ExtractorConfig,
    script: Script,
    length: Length,
    no_link: NoLink,
}

impl SentenceExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let script = Script::new(config.script.clone());
        let length = Length::with_min_size(config.min_length);
        let no_link = NoLink::with_prefixes(config.link_prefixes.clone());
        Self {
            config,
            script,
            length,
            no_link,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Lazily extract sentences, logging rejections.
    pub fn extract<I>(&self, blocks: I) -> Sentences<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: TextBlock,
    {
        Sentences {
            outcomes: self.outcomes(blocks),
        }
    }

    /// Lazily process candidates, yielding sentences and rejections alike.
    ///
    /// Segments that are held back because they end with a connector do not yield anything.
    pub fn outcomes<I>(&self, blocks: I) -> Outcomes<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: TextBlock,
    {
        Outcomes {
            extractor: self,
            blocks: blocks.into_iter(),
            segments: Vec::new().into_iter(),
            pending: String::new(),
            seen: Unique::default(),
        }
    }

    /// Split a normalized block into trimmed, non-empty segments.
    fn segments(&self, text: &str) -> Vec<String> {
        text.split(self.config.delimiter)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect()
    }

    /// Check and clean a candidate. Does not check for duplicates.
    fn clean(&self, candidate: String) -> Outcome {
        if !self.script.detect(&candidate) {
            return Err(Rejection::new(RejectReason::NoTargetScript, candidate));
        }

        let mut text = candidate.split_whitespace().join(" ");

        if !self.no_link.detect(&text) {
            return Err(Rejection::new(RejectReason::Link, text));
        }

        if !self.length.detect(&text) {
            return Err(Rejection::new(RejectReason::TooShort, text));
        }

        if !text.ends_with(self.config.delimiter) {
            text.push(self.config.delimiter);
        }

        Ok(Sentence(text))
    }
}

impl Default for SentenceExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

/// Iterator over every processed candidate. See [SentenceExtractor::outcomes].
pub struct Outcomes<'a, I> {
    extractor: &'a SentenceExtractor,
    blocks: I,
    segments: std::vec::IntoIter<String>,
    pending: String,
    seen: Unique,
}

impl<'a, I> Outcomes<'a, I> {
    /// Merge a segment with the pending continuation, or hold it back.
    /// Returns [None] when the segment is held back.
    fn process(&mut self, segment: String) -> Option<Outcome> {
        let extractor = self.extractor;
        let config = &extractor.config;

        if config.ends_with_connector(&segment) {
            self.pending.push_str(&segment);
            self.pending.push(config.delimiter);
            self.pending.push(' ');
            return None;
        }

        let candidate = if self.pending.is_empty() {
            segment
        } else {
            let mut full = std::mem::take(&mut self.pending);
            full.push_str(&segment);
            full
        };

        let outcome = extractor.clean(candidate).and_then(|sentence| {
            if self.seen.detect_mut(sentence.as_str()) {
                Ok(sentence)
            } else {
                Err(Rejection::new(RejectReason::Duplicate, sentence.0))
            }
        });

        Some(outcome)
    }
}

impl<'a, I> Iterator for Outcomes<'a, I>
where
    I: Iterator,
    I::Item: TextBlock,
{
    type Item = Outcome;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.segments.next() {
                match self.process(segment) {
                    Some(outcome) => return Some(outcome),
                    None => continue,
                }
            }

            match self.blocks.next() {
                Some(block) => {
                    let text = block.normalized_text();
                    if text.is_empty() {
                        continue;
                    }
                    self.segments = self.extractor.segments(&text).into_iter();
                }
                None => {
                    if !self.pending.is_empty() {
                        debug!("dropping dangling continuation: {}", self.pending);
                        self.pending.clear();
                    }
                    return None;
                }
            }
        }
    }
}

/// Iterator over extracted sentences. See [SentenceExtractor::extract].
pub struct Sentences<'a, I> {
    outcomes: Outcomes<'a, I>,
}

impl<'a, I> Iterator for Sentences<'a, I>
where
    I: Iterator,
    I::Item: TextBlock,
{
    type Item = Sentence;

    fn next(&mut self) -> Option<Self::Item> {
        for outcome in self.outcomes.by_ref() {
            match outcome {
                Ok(sentence) => return Some(sentence),
                Err(rejection) => match rejection.reason() {
                    RejectReason::NoTargetScript | RejectReason::Link => info!("{}", rejection),
                    RejectReason::TooShort | RejectReason::Duplicate => debug!("{}", rejection),
                },
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 30 codepoints, no shad
    const LONG: &str = "བཀྲ་ཤིས་བདེ་ལེགས་ཞུ་རྒྱུ་ཡིན་པ";

    fn extract(blocks: &[&str]) -> Vec<String> {
        SentenceExtractor::default()
            .extract(blocks.iter())
            .map(String::from)
            .collect()
    }

    #[test]
    fn single_sentence() {
        let text = format!("{}།", LONG);
        assert_eq!(extract(&[&text]), vec![text.clone()]);
    }

    #[test]
    fn delimiter_appended() {
        assert_eq!(extract(&[LONG]), vec![format!("{}།", LONG)]);
    }

    #[test]
    fn latin_only() {
        let block = "This is a long enough english sentence. Another one here.";
        assert!(extract(&[block]).is_empty());
    }

    #[test]
    fn dedup_across_blocks() {
        let text = format!("{}།", LONG);
        assert_eq!(extract(&[&text, &text]), vec![text.clone()]);
    }

    #[test]
    fn dedup_within_block() {
        let text = format!("{0}། {0}།", LONG);
        assert_eq!(extract(&[&text]).len(), 1);
    }

    #[test]
    fn min_length_boundary() {
        let twenty: String = ['ཀ'; 20].iter().collect();
        let nineteen: String = ['ཁ'; 19].iter().collect();

        assert_eq!(extract(&[&twenty]), vec![format!("{}།", twenty)]);
        assert!(extract(&[&nineteen]).is_empty());
    }

    #[test]
    fn links() {
        let https = format!("https://tibet.net/{}", LONG);
        let www = format!("www.tibet.net {}", LONG);
        assert!(extract(&[&https, &www]).is_empty());
    }

    #[test]
    fn connector_merge() {
        let block = format!("{}དང་། ཁ་ཁ་ཁ་།", LONG);
        assert_eq!(extract(&[&block]), vec![format!("{}དང་། ཁ་ཁ་ཁ་།", LONG)]);
    }

    #[test]
    fn connector_merge_across_blocks() {
        let first = format!("{}དང་།", LONG);
        assert_eq!(
            extract(&[&first, "ཁ་ཁ་ཁ་།"]),
            vec![format!("{}དང་། ཁ་ཁ་ཁ་།", LONG)]
        );
    }

    #[test]
    fn chained_connectors() {
        let block = "ཀ་ཀ་ཀ་དང་། ཁ་ཁ་ཁ་ཡིན་ན། ཀ་ཀ་ཀ་ཀ་ཀ་ཀ་།";
        assert_eq!(
            extract(&[block]),
            vec!["ཀ་ཀ་ཀ་དང་། ཁ་ཁ་ཁ་ཡིན་ན། ཀ་ཀ་ཀ་ཀ་ཀ་ཀ་།".to_string()]
        );
    }

    #[test]
    fn dangling_continuation() {
        let block = format!("{0}། {0}དང་།", LONG);
        assert_eq!(extract(&[&block]), vec![format!("{}།", LONG)]);
    }

    #[test]
    fn empty_blocks() {
        assert!(extract(&[]).is_empty());
        assert!(extract(&["", "  \u{a0} ", "།།"]).is_empty());
    }

    #[test]
    fn whitespace_collapsed() {
        let block = "བཀྲ་ཤིས་   བདེ་ལེགས་\u{a0}\u{a0}ཞུ་རྒྱུ་ཡིན་པ་ལགས།";
        assert_eq!(
            extract(&[block]),
            vec!["བཀྲ་ཤིས་ བདེ་ལེགས་ ཞུ་རྒྱུ་ཡིན་པ་ལགས།".to_string()]
        );
    }

    #[test]
    fn idempotent() {
        let block = format!("{0}། foo bar། {0}དང་། ཁ་ཁ་ཁ་།", LONG);
        assert_eq!(extract(&[&block]), extract(&[&block]));
    }

    #[test]
    fn outcomes_report_rejections() {
        let block = format!("{0}། english only sentence here། {0}། ཀ་ཀ་།", LONG);
        let e = SentenceExtractor::default();
        let reasons: Vec<Result<String, RejectReason>> = e
            .outcomes([block.as_str()])
            .map(|o| o.map(String::from).map_err(|r| r.reason()))
            .collect();

        assert_eq!(
            reasons,
            vec![
                Ok(format!("{}།", LONG)),
                Err(RejectReason::NoTargetScript),
                Err(RejectReason::Duplicate),
                Err(RejectReason::TooShort),
            ]
        );
    }

    #[test]
    fn synthetic_script() {
        let config = ExtractorConfig {
            delimiter: '.',
            connectors: vec!["and".to_string()],
            min_length: 5,
            script: crate::filtering::ScriptMatcher::Block('a'..='z'),
            link_prefixes: vec!["http".to_string()],
        };
        let e = SentenceExtractor::new(config);
        let sentences: Vec<String> = e
            .extract(["hello world. this and. that. ABC. http link here. x."])
            .map(String::from)
            .collect();

        assert_eq!(sentences, vec!["hello world.", "this and. that."]);
    }

    #[test]
    fn rejection_display() {
        let r = Rejection::new(RejectReason::Link, "www.example.com".to_string());
        assert_eq!(r.to_string(), "Rejected (link): www.example.com...");
    }
}
