//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Http(reqwest::Error),
    Csv(csv::Error),
    Pdf(lopdf::Error),
    Serde(serde_json::Error),
    Url(url::ParseError),
    /// CSS selector that failed to parse.
    Selector(String),
    /// Column name absent from a CSV header.
    MissingColumn(String),
    /// Input (url or file) that did not pass the accessibility checks.
    Inaccessible(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Http(e) => write!(f, "http error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Pdf(e) => write!(f, "pdf error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
            Error::Selector(s) => write!(f, "invalid selector: {}", s),
            Error::MissingColumn(c) => write!(f, "missing column: {}", c),
            Error::Inaccessible(i) => write!(f, "input is not accessible: {}", i),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<lopdf::Error> for Error {
    fn from(e: lopdf::Error) -> Error {
        Error::Pdf(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
