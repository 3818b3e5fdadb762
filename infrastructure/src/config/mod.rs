//! Configuration file loading

mod file_config;
mod loader;

pub use file_config::{FileConfig, StoreSection, default_store_path};
pub use loader::ConfigLoader;
