//! Text blocks: paragraphs, headings or pages handed to the extractor.
use std::borrow::Cow;

use itertools::Itertools;

/// A unit of source text.
///
/// Implementors only provide [TextBlock::text]. [TextBlock::normalized_text] collapses
/// whitespace runs (non-breaking spaces included) into single spaces and trims the result.
pub trait TextBlock {
    fn text(&self) -> Cow<'_, str>;

    fn normalized_text(&self) -> String {
        normalize(&self.text())
    }
}

/// Collapse whitespace and convert non-breaking spaces to regular ones.
pub fn normalize(text: &str) -> String {
    text.replace('\u{a0}', " ").split_whitespace().join(" ")
}

impl TextBlock for str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextBlock for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Raw bytes are decoded lossily: invalid sequences become U+FFFD.
impl TextBlock for [u8] {
    fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

impl TextBlock for Vec<u8> {
    fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

impl<T: TextBlock + ?Sized> TextBlock for &T {
    fn text(&self) -> Cow<'_, str> {
        (**self).text()
    }
}
