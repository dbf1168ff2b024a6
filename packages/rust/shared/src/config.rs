//! Run configuration for tocgen.
//!
//! An optional `tocgen.toml` may sit next to the README in the working root.
//! CLI flags override config file values, which override defaults. The chapter
//! list itself is compiled in and never read from the config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::error::{Result, TocError};
use crate::types::{CHAPTERS, Chapter};

/// Default configuration file name, looked up in the working root.
pub const CONFIG_FILE_NAME: &str = "tocgen.toml";

/// Default README file name.
pub const DEFAULT_README: &str = "README.md";

/// Default hosting URL; `{}` is replaced by the chapter file name.
pub const DEFAULT_BASE_URL_TEMPLATE: &str = "https://github.com/gndlwch2w/python-hows/blob/main/{}";

/// Substitution slot in [`TocConfig::base_url_template`].
const URL_SLOT: &str = "{}";

// ---------------------------------------------------------------------------
// Config file schema (matching tocgen.toml)
// ---------------------------------------------------------------------------

/// Contents of `tocgen.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// README file name, relative to the working root.
    #[serde(default)]
    pub readme: Option<String>,

    /// Hosting URL template with a single `{}` slot.
    #[serde(default)]
    pub base_url_template: Option<String>,
}

// ---------------------------------------------------------------------------
// Runtime config (merged from defaults + config file + CLI flags)
// ---------------------------------------------------------------------------

/// Resolved configuration for one regeneration run.
#[derive(Debug, Clone)]
pub struct TocConfig {
    /// Directory holding the README and the chapter files.
    pub root: PathBuf,
    /// README file name, relative to `root`.
    pub readme: String,
    /// Hosting URL template with a single `{}` slot for the chapter file name.
    pub base_url_template: String,
    /// Chapters to link, in output order.
    pub chapters: &'static [Chapter],
}

impl TocConfig {
    /// Built-in defaults rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            readme: DEFAULT_README.to_string(),
            base_url_template: DEFAULT_BASE_URL_TEMPLATE.to_string(),
            chapters: CHAPTERS,
        }
    }

    /// Overlay values present in a parsed config file.
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(readme) = file.readme {
            self.readme = readme;
        }
        if let Some(template) = file.base_url_template {
            self.base_url_template = template;
        }
    }

    /// Full path to the README.
    pub fn readme_path(&self) -> PathBuf {
        self.root.join(&self.readme)
    }

    /// Full path to a chapter file.
    pub fn chapter_path(&self, chapter: &Chapter) -> PathBuf {
        self.root.join(chapter.file_name)
    }

    /// Hosting URL of a chapter document.
    pub fn chapter_url(&self, chapter: &Chapter) -> String {
        self.base_url_template.replacen(URL_SLOT, chapter.file_name, 1)
    }

    /// Check that the README name is usable and the URL template is well formed.
    pub fn validate(&self) -> Result<()> {
        if self.readme.trim().is_empty() {
            return Err(TocError::config("readme file name is empty"));
        }

        let slots = self.base_url_template.matches(URL_SLOT).count();
        if slots != 1 {
            return Err(TocError::config(format!(
                "base_url_template must contain exactly one `{{}}` slot, found {slots}: {}",
                self.base_url_template
            )));
        }

        for chapter in self.chapters {
            let url = self.chapter_url(chapter);
            Url::parse(&url).map_err(|e| {
                TocError::config(format!("invalid chapter URL '{url}': {e}"))
            })?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the config for `root`. Uses defaults if `tocgen.toml` does not exist.
///
/// The result is not validated; callers apply their overrides first and then
/// call [`TocConfig::validate`].
pub fn load_config(root: &Path) -> Result<TocConfig> {
    let path = root.join(CONFIG_FILE_NAME);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(TocConfig::with_root(root));
    }

    load_config_from(root, &path)
}

/// Load the config for `root` from a specific config file path.
pub fn load_config_from(root: &Path, path: &Path) -> Result<TocConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| TocError::io(path, e))?;

    let file: FileConfig = toml::from_str(&content).map_err(|e| {
        TocError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    let mut config = TocConfig::with_root(root);
    config.apply_file(file);

    tracing::debug!(?path, readme = %config.readme, "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tocgen-config-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn default_chapter_url() {
        let config = TocConfig::with_root(".");
        assert_eq!(
            config.chapter_url(&CHAPTERS[0]),
            "https://github.com/gndlwch2w/python-hows/blob/main/intro.md"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn template_without_slot_is_rejected() {
        let mut config = TocConfig::with_root(".");
        config.base_url_template = "https://example.com/docs".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exactly one"));
    }

    #[test]
    fn template_must_yield_valid_url() {
        let mut config = TocConfig::with_root(".");
        config.base_url_template = "not a url/{}".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invalid chapter URL"));
    }

    #[test]
    fn file_config_overrides_defaults() {
        let toml_str = r#"
readme = "INDEX.md"
base_url_template = "https://example.com/book/{}"
"#;
        let file: FileConfig = toml::from_str(toml_str).expect("parse");
        let mut config = TocConfig::with_root("/tmp/book");
        config.apply_file(file);

        assert_eq!(config.readme, "INDEX.md");
        assert_eq!(config.readme_path(), PathBuf::from("/tmp/book/INDEX.md"));
        assert_eq!(
            config.chapter_url(&CHAPTERS[1]),
            "https://example.com/book/class.md"
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<FileConfig, _> = toml::from_str("chapters = []");
        assert!(result.is_err());
    }

    #[test]
    fn load_config_without_file_uses_defaults() {
        let dir = scratch_dir();
        let config = load_config(&dir).expect("load");
        assert_eq!(config.readme, DEFAULT_README);
        assert_eq!(config.base_url_template, DEFAULT_BASE_URL_TEMPLATE);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_config_reads_file_in_root() {
        let dir = scratch_dir();
        std::fs::write(dir.join(CONFIG_FILE_NAME), "readme = \"DOCS.md\"\n").expect("write");
        let config = load_config(&dir).expect("load");
        assert_eq!(config.readme, "DOCS.md");
        assert_eq!(config.base_url_template, DEFAULT_BASE_URL_TEMPLATE);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_config_leaves_validation_to_caller() {
        let dir = scratch_dir();
        std::fs::write(
            dir.join(CONFIG_FILE_NAME),
            "base_url_template = \"https://example.com/docs\"\n",
        )
        .expect("write");

        let mut config = load_config(&dir).expect("load without validating");
        assert!(config.validate().is_err());

        config.base_url_template = "https://example.com/src/{}".into();
        assert!(config.validate().is_ok());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_config_reports_parse_errors() {
        let dir = scratch_dir();
        std::fs::write(dir.join(CONFIG_FILE_NAME), "readme = [").expect("write");
        let err = load_config(&dir).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
