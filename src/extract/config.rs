//! Extractor configuration.
//!
//! [ExtractorConfig::default] is the Tibetan configuration.
//! Any field missing from a JSON configuration file falls back to its default value.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filtering::ScriptMatcher;

/// Tibetan sentence delimiter (shad).
pub const SHAD: char = '།';

/// Tibetan particles after which a sentence is considered incomplete.
/// The shad is not part of them since text is split on it.
pub const TIBETAN_CONNECTORS: [&str; 6] = ["དང་", "ཡིན་ན", "ན", "རུང་", "ཡིན", "ག་"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Terminal delimiter, used to split blocks and to end sentences.
    pub delimiter: char,
    /// Segments ending with one of these are merged with the next one.
    pub connectors: Vec<String>,
    /// Minimum sentence length, in codepoints, before the delimiter is appended.
    pub min_length: usize,
    pub script: ScriptMatcher,
    /// Candidates starting with one of these are dropped.
    pub link_prefixes: Vec<String>,
}

impl ExtractorConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading extractor configuration from {:?}", path);
        let f = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(f))?;
        Ok(config)
    }

    /// Replace the minimum length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Check whether a segment ends with a connector.
    pub fn ends_with_connector(&self, segment: &str) -> bool {
        self.connectors
            .iter()
            .any(|connector| segment.ends_with(connector.as_str()))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            delimiter: SHAD,
            connectors: TIBETAN_CONNECTORS.iter().map(|c| c.to_string()).collect(),
            min_length: 20,
            script: ScriptMatcher::tibetan(),
            link_prefixes: vec!["www.".to_string(), "https".to_string()],
        }
    }
}
