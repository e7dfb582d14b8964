use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Fetch backend: sequential (one blocking Easy handle per request) or
/// concurrent (curl multi driving a bounded batch on one thread).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchBackend {
    #[default]
    Sequential,
    Concurrent,
}

/// Global configuration loaded from `~/.config/tfd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfdConfig {
    /// Rows requested per index page.
    pub results_per_page: usize,
    /// Maximum transfers in flight on the concurrent backend.
    pub max_in_flight: usize,
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// Optional index URL override (None = the built-in picklist URL).
    #[serde(default)]
    pub index_url: Option<String>,
    /// Fetch backend: "sequential" (default) or "concurrent". The CLI
    /// `--concurrent` flag overrides this.
    #[serde(default)]
    pub fetch_backend: Option<FetchBackend>,
}

impl Default for TfdConfig {
    fn default() -> Self {
        Self {
            results_per_page: 200,
            max_in_flight: 8,
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
            index_url: None,
            fetch_backend: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tfd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TfdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TfdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TfdConfig = toml::from_str(&data)?;
    Ok(cfg)
}
