//! Application layer for stockroom
//!
//! This crate contains the use cases of the inventory consumption engine
//! and the port they all share. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::store::{DeductOutcome, InventoryStore, StoreError};
pub use use_cases::add_stock::{AddStockError, AddStockUseCase};
pub use use_cases::build_something::{
    BUILD_SUCCESS_MESSAGE, BuildError, BuildInput, BuildOutcome, BuildSomethingUseCase,
};
pub use use_cases::catalog_admin::{
    CatalogAdminError, CatalogAdminUseCase, NewMaterial, NewTool,
};
pub use use_cases::fix_tool::{FixToolError, FixToolOutcome, FixToolUseCase};
pub use use_cases::inventory::{Deduction, DeductionStatus, InventoryMutator};
pub use use_cases::use_tool::{UseToolError, UseToolOutcome, UseToolUseCase};
pub use use_cases::used_tools::{UsedToolsError, UsedToolsUseCase};
