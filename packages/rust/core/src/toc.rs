//! TOC (Table of Contents) builder.
//!
//! Walks the configured chapters, pulls their `## ` headings and renders the
//! nested markdown list that follows the README preamble.

use tracing::{debug, instrument, warn};

use tocgen_markdown::{create_anchor, extract_headings};
use tocgen_shared::{Chapter, Result, TocConfig};

/// Rendered TOC block plus what went into it.
#[derive(Debug, Clone, Default)]
pub struct TocSection {
    /// Output lines, one list item each.
    pub lines: Vec<String>,
    /// Chapters that produced an entry, in output order.
    pub written: Vec<Chapter>,
    /// Chapters skipped because their file is missing.
    pub skipped: Vec<Chapter>,
    /// Total nested heading entries.
    pub heading_count: usize,
}

/// Build the TOC for every configured chapter.
///
/// A chapter whose file does not exist is reported with a warning and left
/// out entirely. Chapter order follows the configuration.
#[instrument(skip_all, fields(chapters = config.chapters.len()))]
pub fn build_toc(config: &TocConfig) -> Result<TocSection> {
    let mut section = TocSection::default();

    for chapter in config.chapters {
        let path = config.chapter_path(chapter);
        if !path.exists() {
            warn!(
                file = chapter.file_name,
                chapter = chapter.title,
                "{} is missing, skipping section '{}'",
                chapter.file_name,
                chapter.title
            );
            section.skipped.push(*chapter);
            continue;
        }

        let base_url = config.chapter_url(chapter);
        section.lines.push(chapter_entry(chapter.title, &base_url));

        let headings = extract_headings(&path)?;
        for heading in &headings {
            let anchor = create_anchor(heading);
            section.lines.push(heading_entry(heading, &base_url, &anchor));
        }

        debug!(
            file = chapter.file_name,
            headings = headings.len(),
            "chapter added to TOC"
        );
        section.heading_count += headings.len();
        section.written.push(*chapter);
    }

    Ok(section)
}

/// Top-level list item linking a whole chapter.
pub fn chapter_entry(title: &str, base_url: &str) -> String {
    format!("- [{title}]({base_url})")
}

/// Nested list item linking one heading inside a chapter.
pub fn heading_entry(title: &str, base_url: &str, anchor: &str) -> String {
    format!("    - [{title}]({base_url}#{anchor})")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
