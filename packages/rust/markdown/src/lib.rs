//! Markdown scanning for chapter documents.
//!
//! Pulls second-level headings out of a chapter file and turns heading text
//! into the anchor fragments used by the hosted copy of that file.

mod anchor;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use tocgen_shared::{Result, TocError};

pub use anchor::create_anchor;

// ---------------------------------------------------------------------------
// Heading extraction
// ---------------------------------------------------------------------------

/// Extract all `## ` heading titles from a chapter file, in document order.
///
/// A file that does not exist yields no headings. Any other read failure is
/// an error.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn extract_headings(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        debug!("chapter file not found, no headings");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| TocError::io(path, e))?;
    let titles = heading_titles(&content);

    debug!(headings = titles.len(), "headings extracted");
    Ok(titles)
}

/// Extract all `## ` heading titles from markdown text, in document order.
///
/// Only lines starting with exactly `## ` match; deeper headings and lines
/// without the space are ignored. Duplicates are kept.
pub fn heading_titles(md: &str) -> Vec<String> {
    static H2_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").expect("valid regex"));

    H2_RE
        .captures_iter(md)
        .map(|caps| caps[1].to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
