//! PDF documents, one block per page.
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};

use crate::error::Error;
use crate::extract::TextBlock;

const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Text of a single page.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfPage {
    number: u32,
    text: String,
}

impl PdfPage {
    /// Get the page number (starts at 1).
    pub fn number(&self) -> u32 {
        self.number
    }
}

impl TextBlock for PdfPage {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
}

/// Extract the text of each page, in page order.
///
/// A page whose text cannot be extracted is logged and kept empty.
pub fn page_blocks(path: &Path) -> Result<Vec<PdfPage>, Error> {
    let document = lopdf::Document::load(path)?;
    let pages = document.get_pages();
    info!("Found {} pages.", pages.len());

    let pages = pages
        .keys()
        .map(|&number| {
            let text = document.extract_text(&[number]).unwrap_or_else(|e| {
                warn!("{:?}: could not extract text of page {}: {}", path, number, e);
                String::new()
            });
            PdfPage { number, text }
        })
        .collect();

    Ok(pages)
}

/// `true` if `path` exists, has a `.pdf` extension and starts with the PDF magic number.
pub fn is_pdf_accessible(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    let is_pdf_ext = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf_ext {
        return false;
    }

    let mut magic = [0u8; 4];
    match File::open(path).and_then(|mut f| f.read_exact(&mut magic)) {
        Ok(()) => &magic == PDF_MAGIC,
        Err(_) => false,
    }
}
