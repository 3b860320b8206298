//! File-backed JSON store for the tracker document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::data::TrackerData;
use crate::error::{Result, StoreError};

/// Persistence handle for one tracker file.
///
/// Loads lazily and writes whole documents. Writes go through a sibling
/// temp file and a rename so a crash mid-save never leaves a half-written
/// tracker behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Store backed by the default tracker file in [`super::data_dir`].
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: super::data_dir()?.join("tracker.json"),
        })
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the tracker document.
    ///
    /// A missing file is an empty tracker. A file that exists but does not
    /// parse is reported as [`StoreError::Corrupt`], never silently reset.
    pub fn load(&self) -> Result<TrackerData> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| {
                StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                }
                .into()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(TrackerData::default()),
            Err(source) => Err(StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }

    /// Write the whole tracker document.
    pub fn save(&self, data: &TrackerData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "saved tracker with {} account(s) to {}",
            data.users.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Load, apply a change, save. The save is skipped when `apply` fails.
    pub fn update<T>(&self, apply: impl FnOnce(&mut TrackerData) -> Result<T>) -> Result<T> {
        let mut data = self.load()?;
        let out = apply(&mut data)?;
        self.save(&data)?;
        Ok(out)
    }
}
