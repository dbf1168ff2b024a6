//! README regeneration.
//!
//! Keeps the README's title and introductory prose, drops whatever TOC was
//! generated last time, and appends a freshly built one.

use std::path::PathBuf;

use tracing::{info, instrument};

use tocgen_shared::{Result, TocConfig, TocError};

use crate::toc::{self, TocSection};

/// A regenerated README that has not been written yet.
#[derive(Debug, Clone)]
pub struct Regenerated {
    /// README path the content belongs to.
    pub path: PathBuf,
    /// Content read from disk.
    pub original: String,
    /// New content: preamble followed by the TOC.
    pub content: String,
    /// Number of preamble lines carried over (including the separator).
    pub preamble_lines: usize,
    /// The generated TOC block.
    pub toc: TocSection,
}

impl Regenerated {
    /// Whether the new content differs from what is on disk.
    pub fn changed(&self) -> bool {
        self.original != self.content
    }
}

/// Summary of a completed rewrite.
#[derive(Debug, Clone)]
pub struct RewriteReport {
    /// README path that was written.
    pub path: PathBuf,
    /// File names of chapters that got an entry.
    pub written: Vec<&'static str>,
    /// File names of chapters skipped because they are missing.
    pub skipped: Vec<&'static str>,
    /// Total nested heading entries.
    pub heading_count: usize,
    /// Whether the written content differs from the previous file.
    pub changed: bool,
}

impl From<&Regenerated> for RewriteReport {
    fn from(regen: &Regenerated) -> Self {
        Self {
            path: regen.path.clone(),
            written: regen.toc.written.iter().map(|c| c.file_name).collect(),
            skipped: regen.toc.skipped.iter().map(|c| c.file_name).collect(),
            heading_count: regen.toc.heading_count,
            changed: regen.changed(),
        }
    }
}

// ---------------------------------------------------------------------------
// Preamble detection
// ---------------------------------------------------------------------------

/// Index of the last preamble line, or `None` if the README has no `# ` title.
///
/// The title is the last line whose trimmed form starts with `# `. After it,
/// every non-blank line that is not a list link (`- [` or `    -`) extends the
/// preamble. Scanning stops at the first `- [` line once prose has been seen.
/// Without prose, the preamble is the title plus the line after it.
pub fn preamble_end(lines: &[&str]) -> Option<usize> {
    let mut title_line: Option<usize> = None;
    let mut intro_end: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("# ") {
            title_line = Some(i);
        } else if title_line.is_some()
            && !trimmed.is_empty()
            && !line.starts_with("- [")
            && !line.starts_with("    -")
        {
            intro_end = Some(i);
        } else if title_line.is_some() && intro_end.is_some() && line.starts_with("- [") {
            break;
        }
    }

    match (title_line, intro_end) {
        (_, Some(end)) => Some(end),
        (Some(title), None) => Some(title + 1),
        (None, None) => None,
    }
}

/// Preamble lines to carry over, ending with a blank separator line.
pub fn preamble<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let keep = match preamble_end(lines) {
        Some(end) => (end + 1).min(lines.len()),
        None => lines.len(),
    };

    let mut kept = lines[..keep].to_vec();
    if kept.last().is_some_and(|line| !line.trim().is_empty()) {
        kept.push("");
    }
    kept
}

// ---------------------------------------------------------------------------
// Rewrite
// ---------------------------------------------------------------------------

/// Build the new README content without touching the file.
#[instrument(skip_all, fields(readme = %config.readme))]
pub fn regenerate(config: &TocConfig) -> Result<Regenerated> {
    let path = config.readme_path();
    let original = std::fs::read_to_string(&path).map_err(|e| TocError::io(&path, e))?;

    let lines: Vec<&str> = original.split('\n').collect();
    let kept = preamble(&lines);
    let toc = toc::build_toc(config)?;

    let mut output: Vec<&str> = Vec::with_capacity(kept.len() + toc.lines.len());
    output.extend(&kept);
    output.extend(toc.lines.iter().map(String::as_str));
    let content = output.join("\n");
    let preamble_lines = kept.len();

    Ok(Regenerated {
        path,
        original,
        content,
        preamble_lines,
        toc,
    })
}

/// Regenerate the README and overwrite it in place.
#[instrument(skip_all, fields(readme = %config.readme))]
pub fn rewrite_readme(config: &TocConfig) -> Result<RewriteReport> {
    let regen = regenerate(config)?;

    std::fs::write(&regen.path, &regen.content).map_err(|e| TocError::io(&regen.path, e))?;

    let report = RewriteReport::from(&regen);
    info!(
        path = %report.path.display(),
        chapters = report.written.len(),
        skipped = report.skipped.len(),
        headings = report.heading_count,
        changed = report.changed,
        "README updated"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
