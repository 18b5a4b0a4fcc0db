use markdown_sitegen_engine::{PageOptions, ParseOptions, QuoteStyle, SiteSettings};
use relative_path::RelativePath;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "markdown-sitegen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    InvalidExcludePattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template: PathBuf,
    /// Glob patterns, relative to `static_dir`, that are not mirrored.
    pub exclude: Vec<String>,
    pub keep_going: bool,
    pub markdown: MarkdownConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub quote_style: QuoteStyle,
    pub escape_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
            exclude: Vec::new(),
            keep_going: false,
            markdown: MarkdownConfig::default(),
        }
    }
}

/// Compiled `exclude` patterns.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<glob::Pattern>,
}

impl ExcludeSet {
    pub fn is_excluded(&self, path: &RelativePath) -> bool {
        self.patterns.iter().any(|p| p.matches(path.as_str()))
    }
}

impl Config {
    /// Loads a config file, returning `None` when it does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.expand_paths();
        Ok(Some(config))
    }

    /// Loads `markdown-sitegen.toml` from the working directory.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    pub fn exclude_set(&self) -> Result<ExcludeSet, ConfigError> {
        let patterns = self
            .exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(ExcludeSet { patterns })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            quote_style: self.markdown.quote_style,
        }
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            parse: self.parse_options(),
            escape_html: self.markdown.escape_html,
        }
    }

    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            content_dir: self.content_dir.clone(),
            static_dir: self.static_dir.clone(),
            output_dir: self.output_dir.clone(),
            template: self.template.clone(),
            page: self.page_options(),
            keep_going: self.keep_going,
        }
    }

    fn expand_paths(&mut self) {
        for path in [
            &mut self.content_dir,
            &mut self.static_dir,
            &mut self.output_dir,
            &mut self.template,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
