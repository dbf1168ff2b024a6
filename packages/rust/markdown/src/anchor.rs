//! Heading anchor slugs.
//!
//! Reproduces the fragment ids static hosts generate for mixed-script
//! headings: code spans unwrapped, lowercased, whitespace runs hyphenated,
//! punctuation dropped, and CJK ideograph runs percent-encoded.

use std::sync::LazyLock;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};

/// Compute the URL fragment for a heading title.
pub fn create_anchor(title: &str) -> String {
    static CODE_SPAN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));
    static WHITESPACE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
    // Word characters are letters, numbers and `_`. Combining marks are not.
    static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"[^\p{L}\p{N}_\x{4E00}-\x{9FFF}-]").expect("valid regex")
    });

    let unwrapped = CODE_SPAN_RE.replace_all(title, "$1");
    let lowered = unwrapped.to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(&lowered, "-");
    let cleaned = DISALLOWED_RE.replace_all(&hyphenated, "");

    encode_cjk_runs(&cleaned)
}

/// Percent-encode each run of CJK unified ideographs, leaving everything else.
fn encode_cjk_runs(anchor: &str) -> String {
    static CJK_RUN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[\x{4E00}-\x{9FFF}]+").expect("valid regex"));

    CJK_RUN_RE
        .replace_all(anchor, |caps: &Captures| {
            utf8_percent_encode(&caps[0], NON_ALPHANUMERIC).to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_words_are_hyphenated() {
        assert_eq!(create_anchor("Setup Guide"), "setup-guide");
        assert_eq!(create_anchor("Intro"), "intro");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_hyphen() {
        assert_eq!(create_anchor("a  \t b"), "a-b");
    }

    #[test]
    fn code_span_markers_are_stripped() {
        assert_eq!(create_anchor("Using `foo_bar`"), "using-foo_bar");
        assert_eq!(create_anchor("The `__init__` method"), "the-__init__-method");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(create_anchor("What's new?"), "whats-new");
        assert_eq!(create_anchor("C++ & Rust"), "c--rust");
    }

    #[test]
    fn cjk_runs_are_percent_encoded() {
        let anchor = create_anchor("走进 CPython");
        assert_eq!(anchor, "%E8%B5%B0%E8%BF%9B-cpython");
        assert!(anchor.is_ascii());
    }

    #[test]
    fn cjk_between_ascii_words() {
        assert_eq!(create_anchor("C++ 与 Python"), "c-%E4%B8%8E-python");
    }

    #[test]
    fn fullwidth_punctuation_is_removed_before_encoding() {
        let anchor = create_anchor("生成器：原理");
        assert!(anchor.is_ascii());
        assert!(!anchor.contains('-'));
        assert_eq!(anchor, create_anchor("生成器原理"));
    }

    #[test]
    fn non_cjk_letters_stay_raw() {
        assert_eq!(create_anchor("Café Crème"), "café-crème");
    }

    #[test]
    fn numeric_symbols_are_kept() {
        assert_eq!(create_anchor("x² y"), "x²-y");
        assert_eq!(create_anchor("Step ½"), "step-½");
    }

    #[test]
    fn combining_marks_are_dropped() {
        assert_eq!(create_anchor("Cafe\u{301}"), "cafe");
    }

    #[test]
    fn empty_title() {
        assert_eq!(create_anchor(""), "");
        assert_eq!(create_anchor("?!"), "");
    }
}
