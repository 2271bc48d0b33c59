// src/config/mod.rs
//! Runtime configuration: built-in defaults → optional TOML file → env vars.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/news.toml";
pub const DEFAULT_RAW_CSV: &str = "news_articles.csv";
pub const DEFAULT_CATEGORIZED_CSV: &str = "categorized_news_articles.csv";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub const ENV_CONFIG_PATH: &str = "NEWS_CONFIG_PATH";
pub const ENV_RAW_CSV: &str = "NEWS_RAW_CSV";
pub const ENV_CATEGORIZED_CSV: &str = "NEWS_CATEGORIZED_CSV";
pub const ENV_BIND_ADDR: &str = "NEWS_BIND_ADDR";
pub const ENV_DIAGNOSTICS_DIR: &str = "NEWS_DIAGNOSTICS_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scraper output / categorizer input.
    pub raw_articles_path: PathBuf,
    /// Categorizer output / query service input.
    pub categorized_articles_path: PathBuf,
    pub bind_addr: String,
    /// Where empty listing pages are dumped.
    pub diagnostics_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            raw_articles_path: PathBuf::from(DEFAULT_RAW_CSV),
            categorized_articles_path: PathBuf::from(DEFAULT_CATEGORIZED_CSV),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            diagnostics_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing config toml")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load using env var + fallbacks:
    /// 1) `$NEWS_CONFIG_PATH` (must exist)
    /// 2) `config/news.toml` if present
    /// 3) built-in defaults
    ///
    /// Individual `NEWS_*` variables then override single fields.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var(ENV_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
                }
                Self::load_from_file(&pb)?
            }
            Err(_) => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::load_from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Some(v) = env_nonempty(ENV_RAW_CSV) {
            self.raw_articles_path = PathBuf::from(v);
        }
        if let Some(v) = env_nonempty(ENV_CATEGORIZED_CSV) {
            self.categorized_articles_path = PathBuf::from(v);
        }
        if let Some(v) = env_nonempty(ENV_BIND_ADDR) {
            self.bind_addr = v;
        }
        if let Some(v) = env_nonempty(ENV_DIAGNOSTICS_DIR) {
            self.diagnostics_dir = PathBuf::from(v);
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
