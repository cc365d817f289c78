/*! Text sources

Sources turn an input (url, file) into [TextBlock](crate::extract::TextBlock)s for the extractor:

- [web]: HTML pages, one block per paragraph/heading/div of the main content.
- [pdf]: PDF documents, one block per page.
!*/
pub mod pdf;
pub mod web;

use std::fmt;
use std::path::PathBuf;

use log::info;
use url::Url;

use crate::error::Error;
use crate::extract::{Sentence, SentenceExtractor, TextBlock};

/// An input to extract sentences from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Web(Url),
    Pdf(PathBuf),
}

impl Source {
    /// Build a web source from a string url.
    pub fn web(url: &str) -> Result<Self, Error> {
        Ok(Source::Web(Url::parse(url)?))
    }

    /// Fail with [Error::Inaccessible] if the source cannot be read.
    pub fn check(&self) -> Result<(), Error> {
        let accessible = match self {
            Source::Web(url) => web::WebSource::new()?.is_accessible(url),
            Source::Pdf(path) => pdf::is_pdf_accessible(path),
        };

        if accessible {
            Ok(())
        } else {
            Err(Error::Inaccessible(self.to_string()))
        }
    }

    /// Get the normalized text of every block of the source.
    pub fn blocks(&self) -> Result<Vec<String>, Error> {
        let blocks = match self {
            Source::Web(url) => web::WebSource::new()?.fetch_blocks(url)?,
            Source::Pdf(path) => pdf::page_blocks(path)?
                .iter()
                .map(TextBlock::normalized_text)
                .collect(),
        };
        Ok(blocks)
    }

    /// Fetch/read the source and extract its sentences.
    pub fn sentences(&self, extractor: &SentenceExtractor) -> Result<Vec<Sentence>, Error> {
        let blocks = self.blocks()?;
        let sentences: Vec<Sentence> = extractor.extract(&blocks).collect();
        info!("{}: extracted {} sentences", self, sentences.len());
        Ok(sentences)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Web(url) => write!(f, "{}", url),
            Source::Pdf(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_web() {
        let s = Source::web("https://tibet.net/?p=140").unwrap();
        assert_eq!(s.to_string(), "https://tibet.net/?p=140");
        assert!(matches!(Source::web("not a url"), Err(Error::Url(_))));
    }

    #[test]
    fn missing_pdf() {
        let s = Source::Pdf(PathBuf::from("does/not/exist.pdf"));
        assert!(matches!(s.check(), Err(Error::Inaccessible(_))));
        assert!(s.blocks().is_err());
    }
}
