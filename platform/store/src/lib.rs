//! Session preferences persisted across launches: a small JSON key-value
//! file with defaults. The pipeline never consults these; they belong to
//! the presentation surface.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use entity::OfficeFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no data directory available for preferences")]
    NoDataDir,
    #[error("failed to persist preferences to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode preferences")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl fmt::Display for ItemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSize::Small => f.write_str("small"),
            ItemSize::Medium => f.write_str("medium"),
            ItemSize::Large => f.write_str("large"),
        }
    }
}

/// Grid preferences remembered between sessions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Preferences {
    pub office: OfficeFilter,
    pub columns: u8,
    pub item_size: ItemSize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            office: OfficeFilter::All,
            columns: 5,
            item_size: ItemSize::Medium,
        }
    }
}

/// File-backed preference store with get/set semantics and defaults.
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Open the store at `path`, or at the platform data directory when no
    /// override is given.
    pub fn open(path: Option<PathBuf>) -> StoreResult<Self> {
        let path = match path {
            Some(path) => path,
            None => dirs::data_dir()
                .ok_or(StoreError::NoDataDir)?
                .join("staffdir")
                .join("preferences.json"),
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read preferences; a missing or unreadable file yields the defaults.
    pub fn load(&self) -> Preferences {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Preferences::default();
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "preferences unreadable, using defaults");
                return Preferences::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "preferences corrupt, using defaults");
                Preferences::default()
            }
        }
    }

    /// Persist preferences via a temp file and rename so a crash never
    /// leaves a half-written file behind.
    pub fn save(&self, prefs: &Preferences) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let encoded = serde_json::to_vec_pretty(prefs)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &encoded).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
