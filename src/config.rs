//! Configuration loading and path resolution.
//!
//! Supports BLOCKHOSTS_HOME env var override for testing.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::category::Category;

/// Default location of the category lists.
pub const DEFAULT_SOURCE_BASE: &str = "https://raw.githubusercontent.com/StevenBlack/hosts/master";

/// Paths for the blockhosts data store.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub config_file: PathBuf,
    pub lists_dir: PathBuf,
}

impl DataPaths {
    /// Build paths from base directory (e.g. ProjectDirs data dir or BLOCKHOSTS_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        let config_file = base.join("config.toml");
        let lists_dir = base.join("lists");
        Self {
            data_dir: base,
            config_file,
            lists_dir,
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default paths (respects BLOCKHOSTS_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var("BLOCKHOSTS_HOME") {
            PathBuf::from(home)
        } else if let Some(dirs) =
            directories::ProjectDirs::from("org", "blockhosts", "blockhosts")
        {
            dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from(".blockhosts")
        };
        Self::from_base(base)
    }

    /// Snapshot file for a category.
    pub fn snapshot(&self, category: Category) -> PathBuf {
        self.lists_dir.join(category.file_name())
    }
}

fn default_source_base() -> String {
    DEFAULT_SOURCE_BASE.to_string()
}

fn default_user_agent() -> String {
    concat!("blockhosts/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Main config.toml structure.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    #[serde(default = "default_source_base")]
    pub source_base: String,
    /// Hosts file override; the platform default is used when unset.
    #[serde(default)]
    pub hosts_file: Option<PathBuf>,
    #[serde(default)]
    pub parallel_update: bool,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Per-category URL overrides, keyed by category name.
    #[serde(default)]
    pub sources: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_base: default_source_base(),
            hosts_file: None,
            parallel_update: false,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            sources: BTreeMap::new(),
        }
    }
}

/// Resolved category -> URL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    urls: BTreeMap<Category, String>,
}

impl Sources {
    pub fn url(&self, category: Category) -> &str {
        // Every category is populated by Config::sources.
        self.urls.get(&category).map(String::as_str).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.urls.iter().map(|(c, u)| (*c, u.as_str()))
    }
}

impl Config {
    /// Load config from paths (with shared lock when file exists).
    pub fn load(paths: &DataPaths) -> Result<Config> {
        if paths.config_file.is_file() {
            let mut file = fs::OpenOptions::new()
                .read(true)
                .open(&paths.config_file)
                .with_context(|| format!("open {}", paths.config_file.display()))?;
            fs2::FileExt::lock_shared(&file)?;
            use std::io::Read;
            let mut s = String::new();
            file.read_to_string(&mut s)?;
            let cfg: Config = toml::from_str(&s)
                .with_context(|| format!("parse {}", paths.config_file.display()))?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Category -> URL table. Unknown override keys are ignored with a warning.
    pub fn sources(&self) -> Sources {
        for name in self.sources.keys() {
            if Category::from_name(name).is_none() {
                tracing::warn!(category = %name, "ignoring source override for unknown category");
            }
        }
        let base = self.source_base.trim_end_matches('/');
        let urls = Category::ALL
            .into_iter()
            .map(|c| {
                let url = self
                    .sources
                    .get(c.name())
                    .cloned()
                    .unwrap_or_else(|| format!("{base}/{}", c.source_path()));
                (c, url)
            })
            .collect();
        Sources { urls }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
