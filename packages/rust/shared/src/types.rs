//! Core domain types for tocgen.

// ---------------------------------------------------------------------------
// Chapter
// ---------------------------------------------------------------------------

/// One companion markdown document linked from the README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    /// Display title of the top-level TOC entry.
    pub title: &'static str,
    /// File name, relative to the working root.
    pub file_name: &'static str,
}

impl Chapter {
    pub const fn new(title: &'static str, file_name: &'static str) -> Self {
        Self { title, file_name }
    }
}

/// The chapters listed in the README, in output order.
pub const CHAPTERS: &[Chapter] = &[
    Chapter::new("走进 CPython", "intro.md"),
    Chapter::new("类", "class.md"),
    Chapter::new("函数", "func.md"),
    Chapter::new("生成器", "gen.md"),
    Chapter::new("异常", "except.md"),
];
