//! Configuration resolution for yomi-server
//!
//! Each setting resolves with priority: command line → environment variable
//! → TOML config file → compiled default. The TOML file path itself comes
//! from `--config` / `YOMI_CONFIG`, falling back to `yomi.toml` in the
//! working directory when one exists.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 5730;
const DEFAULT_CACHE_CAPACITY: usize = 4096;
const DEFAULT_VERIFIER_TIMEOUT_MS: u64 = 5000;

/// Command-line arguments (each also readable from the environment)
#[derive(Debug, Parser)]
#[command(name = "yomi-server", about = "Furigana annotation service")]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "YOMI_PORT")]
    pub port: Option<u16>,

    /// Path to a TOML config file
    #[arg(long, env = "YOMI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verification service endpoint (enables the fallback tier)
    #[arg(long, env = "YOMI_VERIFIER_URL")]
    pub verifier_url: Option<String>,

    /// Disable the in-process result cache
    #[arg(long)]
    pub no_cache: bool,
}

/// TOML config file shape; every field optional
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub cache_enabled: Option<bool>,
    pub cache_capacity: Option<usize>,
    pub verifier_url: Option<String>,
    pub verifier_timeout_ms: Option<u64>,
}

/// Fully-resolved service configuration
#[derive(Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub cache_enabled: bool,
    pub cache_capacity: usize,
    pub verifier_url: Option<String>,
    pub verifier_timeout_ms: u64,
}

impl ServerConfig {
    /// Resolve configuration from CLI/ENV arguments and the TOML tier
    pub fn resolve(cli: &Cli) -> Self {
        let toml_config = load_toml_tier(cli.config.as_deref());

        let port = cli.port.or(toml_config.port).unwrap_or(DEFAULT_PORT);

        // --no-cache always wins; otherwise the TOML tier decides
        let cache_enabled = if cli.no_cache {
            false
        } else {
            toml_config.cache_enabled.unwrap_or(true)
        };

        let verifier_url = cli
            .verifier_url
            .clone()
            .or_else(|| toml_config.verifier_url.clone());

        Self {
            port,
            cache_enabled,
            cache_capacity: toml_config
                .cache_capacity
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
            verifier_url,
            verifier_timeout_ms: toml_config
                .verifier_timeout_ms
                .unwrap_or(DEFAULT_VERIFIER_TIMEOUT_MS),
        }
    }
}

/// Load the TOML tier: explicit path if given, else ./yomi.toml if present.
///
/// A missing default file is normal; a file that exists but fails to parse
/// is a warning, never fatal (the remaining tiers still apply).
fn load_toml_tier(explicit: Option<&Path>) -> TomlConfig {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from("yomi.toml");
            if !default.exists() {
                return TomlConfig::default();
            }
            default
        }
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<TomlConfig>(&content) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse {}: {} (using defaults)", path.display(), e);
                TomlConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {} (using defaults)", path.display(), e);
            TomlConfig::default()
        }
    }
}
