//! Infrastructure layer for stockroom
//!
//! This crate contains adapters that implement the store port defined in
//! the application layer, plus configuration file loading.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, StoreSection, default_store_path};
pub use store::{JsonFileStore, MemoryStore};
