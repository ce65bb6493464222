use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ShellConfig {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl ShellConfig {
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();
        if config_path.exists() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config file {}", config_path.display()))?;
            let parsed: ShellConfig = toml::from_str(&raw)
                .with_context(|| format!("failed to parse TOML from {}", config_path.display()))?;
            return Ok(parsed);
        }

        Ok(ShellConfig::default())
    }
}

fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("WORDTRIE_CONFIG") {
        return Path::new(&path).to_path_buf();
    }

    if let Some(base) = dirs::config_dir() {
        return base.join("wordtrie").join("config.toml");
    }

    Path::new("/tmp/wordtrie.toml").to_path_buf()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DictionaryConfig {
    /// Optional word-per-line seed file loaded at startup.
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
    /// Abort seeding on the first out-of-alphabet line instead of
    /// skipping it.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SessionConfig {
    /// Pretty-print JSON responses (one object may span several lines).
    #[serde(default)]
    pub pretty: bool,
}
