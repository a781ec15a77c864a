use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scholar::client::DEFAULT_API_URL;

/// Default cap on citing publications fetched per query.
pub const DEFAULT_MAX_CITATIONS: usize = 1000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. File locations live here
/// rather than in module-level defaults so persistence and export always
/// receive them explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Semantic Scholar Graph API base URL
    pub api_url: String,
    /// Optional API key; raises the index's rate limits when set
    pub api_key: Option<String>,
    /// Where `--save` writes and `--load` reads the query snapshot
    pub snapshot_path: PathBuf,
    /// Where `--output` writes the CSV export
    pub export_path: PathBuf,
    /// Maximum number of citing publications to fetch
    pub max_citations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            snapshot_path: PathBuf::from("./search_query.json"),
            export_path: PathBuf::from("./result.csv"),
            max_citations: DEFAULT_MAX_CITATIONS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let max_citations = match env::var("CITERANK_MAX_CITATIONS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("CITERANK_MAX_CITATIONS is not a number: {raw}"))?,
            Err(_) => defaults.max_citations,
        };

        Ok(Self {
            api_url: env::var("CITERANK_API_URL").unwrap_or(defaults.api_url),
            api_key: env::var("SEMANTIC_SCHOLAR_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            snapshot_path: env::var("CITERANK_SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_path),
            export_path: env::var("CITERANK_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_path),
            max_citations,
        })
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        snapshot_path: Option<PathBuf>,
        export_path: Option<PathBuf>,
        max_citations: Option<usize>,
    ) -> Self {
        if let Some(path) = snapshot_path {
            self.snapshot_path = path;
        }
        if let Some(path) = export_path {
            self.export_path = path;
        }
        if let Some(limit) = max_citations {
            self.max_citations = limit;
        }
        self
    }
}
