//! Optional TOML configuration at `~/.classpoints/config.toml`.
//!
//! Everything here has a working default; a missing or unparseable file is
//! logged and ignored.

use serde::Deserialize;
use std::{env, path::PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub data: Option<DataConfig>,
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DataConfig {
    /// Override for the roster file location. `${VAR}` references are
    /// expanded from the environment.
    pub roster_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Disables the celebration flash animation.
    pub reduced_motion: Option<bool>,
}

impl Config {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }

    /// Roster file override, with environment variables expanded.
    #[must_use]
    pub fn roster_path(&self) -> Option<PathBuf> {
        let raw = self.data.as_ref()?.roster_path.as_ref()?;
        Some(PathBuf::from(expand_env_vars(raw)))
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.ui
            .as_ref()
            .and_then(|ui| ui.reduced_motion)
            .unwrap_or(false)
    }
}

/// Replace `${VAR}` references with their environment values; unset
/// variables expand to nothing.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut i = 0;

    while i < value.len() {
        if value[i..].starts_with("${") {
            let start = i + 2;
            if let Some(end_rel) = value[start..].find('}') {
                let end = start + end_rel;
                let var = &value[start..end];
                if !var.is_empty() {
                    let replacement = env::var(var).unwrap_or_default();
                    out.push_str(&replacement);
                }
                i = end + 1;
                continue;
            }
        }

        let ch = value[i..].chars().next().unwrap();
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".classpoints").join("config.toml"))
}
