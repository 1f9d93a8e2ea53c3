//! Persistence adapter: the roster as a flat JSON array on disk.
//!
//! Absent or malformed data falls back to the seed roster rather than
//! surfacing an error; writes are synchronous and fire-and-forget.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::roster::{Student, seed_roster};

/// File name of the persisted roster inside the data directory.
pub const ROSTER_FILE: &str = "roster.json";

#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the user's home directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".classpoints").join(ROSTER_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted roster, or the seed roster when the file is absent or
    /// malformed. Malformed data is logged and treated as absence.
    #[must_use]
    pub fn load(&self) -> Vec<Student> {
        if !self.path.exists() {
            return seed_roster();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read roster at {:?}: {}", self.path, err);
                return seed_roster();
            }
        };

        match serde_json::from_str(&content) {
            Ok(roster) => roster,
            Err(err) => {
                tracing::warn!("malformed roster at {:?}: {}", self.path, err);
                seed_roster()
            }
        }
    }

    /// Write the roster through to disk.
    ///
    /// An empty roster is deliberately never persisted: deleting every
    /// student is forgotten on reload and the seed roster comes back.
    pub fn save(&self, roster: &[Student]) -> Result<()> {
        if roster.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let json = serde_json::to_string(roster)?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))
    }
}
