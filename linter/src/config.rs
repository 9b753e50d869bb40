use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Linting behavior, loaded from a `lintrules.toml` next to the rule tree.
/// Everything defaults so an absent config means "fixed checks only".
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// File extensions treated as rule documents.
    pub extensions: Vec<String>,
    /// Section titles every document must contain (case-insensitive).
    pub required_sections: Vec<String>,
    /// Frontmatter keys every document must declare.
    pub required_frontmatter: Vec<String>,
    /// Worker threads for per-document processing (0 = one per core).
    pub jobs: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            extensions: vec!["md".to_string(), "markdown".to_string()],
            required_sections: Vec::new(),
            required_frontmatter: Vec::new(),
            jobs: 0,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => {
                write!(f, "cannot read config '{}': {}", path.display(), e)
            }
            ConfigError::Parse(path, e) => {
                write!(f, "invalid config '{}': {}", path.display(), e.message())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl LintConfig {
    pub const FILE_NAME: &'static str = "lintrules.toml";

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Load `<root>/lintrules.toml` when it exists, defaults otherwise.
    pub fn load_if_present(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(Self::FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_fixed_pair_of_extensions() {
        let config = LintConfig::default();
        assert_eq!(config.extensions, vec!["md", "markdown"]);
        assert!(config.required_sections.is_empty());
        assert!(config.required_frontmatter.is_empty());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: LintConfig =
            toml::from_str("required_sections = [\"Purpose\", \"Examples\"]\n").unwrap();
        assert_eq!(config.required_sections, vec!["Purpose", "Examples"]);
        assert_eq!(config.extensions, vec!["md", "markdown"]);
        assert_eq!(config.jobs, 0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<LintConfig>("no_such_option = true\n").is_err());
    }

    #[test]
    fn load_if_present_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = LintConfig::load_if_present(dir.path()).unwrap();
        assert_eq!(config.extensions, vec!["md", "markdown"]);
    }

    #[test]
    fn load_if_present_reads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(LintConfig::FILE_NAME),
            "extensions = [\"mdx\"]\n",
        )
        .unwrap();
        let config = LintConfig::load_if_present(dir.path()).unwrap();
        assert_eq!(config.extensions, vec!["mdx"]);
    }
}
