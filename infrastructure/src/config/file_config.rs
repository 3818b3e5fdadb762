//! Configuration file schema

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub store: StoreSection,
}

/// `[store]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Path of the JSON store document. When unset, the platform data
    /// directory is used.
    pub path: Option<PathBuf>,
}

impl FileConfig {
    /// The effective store document path.
    pub fn store_path(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(default_store_path)
    }
}

/// Default store location: `<data dir>/stockroom/store.json`.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stockroom")
        .join("store.json")
}
