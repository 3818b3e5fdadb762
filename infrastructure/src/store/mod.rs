//! Store adapters implementing the application's `InventoryStore` port.

mod json_file;
mod memory;
mod state;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
