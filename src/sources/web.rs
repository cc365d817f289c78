//! Web pages.
//!
//! Pages are fetched with a blocking client, then the main content of the page is located
//! and split into blocks (paragraphs, headings and divs).
use std::borrow::Cow;
use std::time::Duration;

use itertools::Itertools;
use log::{debug, info};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::Error;
use crate::extract::TextBlock;

pub const USER_AGENT: &str = "Mozilla/5.0";

/// Candidates for the main content, the first match is used.
/// Falls back to `body`.
const MAIN_CONTENT: &str = "article, .article-content, .post-content, .entry-content, .l-content";

const BLOCKS: &str = "p, h1, h2, h3, h4, h5, h6, div";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const HEAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Text nodes are trimmed and joined by a single space.
impl TextBlock for ElementRef<'_> {
    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(
            ElementRef::text(self)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .join(" "),
        )
    }
}

fn selector(s: &str) -> Result<Selector, Error> {
    Selector::parse(s).map_err(|e| Error::Selector(format!("{}: {}", s, e)))
}

/// Get the text of every block of the main content of an HTML document, in document order.
///
/// Nested blocks are all returned, so text in a `p` inside a `div` appears twice.
pub fn html_blocks(html: &str) -> Result<Vec<String>, Error> {
    let document = Html::parse_document(html);
    let main_content = selector(MAIN_CONTENT)?;
    let body = selector("body")?;
    let blocks = selector(BLOCKS)?;

    let main = match document.select(&main_content).next() {
        Some(main) => main,
        None => match document.select(&body).next() {
            Some(body) => body,
            None => return Ok(Vec::new()),
        },
    };

    Ok(main
        .select(&blocks)
        .map(|element| TextBlock::text(&element).into_owned())
        .collect())
}

/// Blocking HTTP client for web sources.
pub struct WebSource {
    client: Client,
}

impl WebSource {
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Get the page body, decoded as UTF-8 whatever the announced charset is.
    pub fn fetch(&self, url: &Url) -> Result<String, Error> {
        debug!("fetching {}", url);
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        let body = response.bytes()?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Fetch a page and get its blocks. See [html_blocks].
    pub fn fetch_blocks(&self, url: &Url) -> Result<Vec<String>, Error> {
        let html = self.fetch(url)?;
        let blocks = html_blocks(&html)?;
        info!("Found {} paragraphs.", blocks.len());
        Ok(blocks)
    }

    /// `true` if a HEAD request (following redirects) ends with a 200.
    pub fn is_accessible(&self, url: &Url) -> bool {
        match self.client.head(url.clone()).timeout(HEAD_TIMEOUT).send() {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                debug!("{} is not accessible: {}", url, e);
                false
            }
        }
    }
}
