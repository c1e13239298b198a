//! Startup configuration.
//!
//! Values come from, in increasing priority: a TOML config file, the
//! environment, and the command line (applied by the caller).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level flashdeck configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashdeckConfig {
    /// Cards file to import when the session starts.
    #[serde(default)]
    pub import: Option<PathBuf>,
    /// Cards file to export when the session ends.
    #[serde(default)]
    pub export: Option<PathBuf>,
    /// Seed for the quiz shuffle. Unset means a fresh random seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied as-is and never expanded again. An
/// unterminated `${` is left untouched.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + len];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `flashdeck.toml` in the current directory
/// 2. `~/.config/flashdeck/config.toml`
///
/// Environment variable override: `FLASHDECK_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<FlashdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("flashdeck.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let parsed = toml::from_str::<FlashdeckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            parsed
        }
        None => FlashdeckConfig::default(),
    };

    if let Ok(seed) = std::env::var("FLASHDECK_SEED") {
        config.seed = Some(
            seed.trim()
                .parse()
                .with_context(|| format!("FLASHDECK_SEED is not a number: {seed:?}"))?,
        );
    }

    config.import = config.import.as_deref().map(resolve_path);
    config.export = config.export.as_deref().map(resolve_path);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("flashdeck"))
}
