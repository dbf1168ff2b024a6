//! TOC generation and README rewriting for tocgen.
//!
//! This crate ties heading extraction and anchor generation together into the
//! end-to-end README regeneration flow (`rewrite_readme`).

pub mod readme;
pub mod toc;

pub use readme::{Regenerated, RewriteReport, regenerate, rewrite_readme};
pub use toc::{TocSection, build_toc};
