//! Domain layer for stockroom
//!
//! This crate contains the core entities and business rules of the
//! inventory consumption engine. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Resources
//!
//! The catalog tracks two kinds of resource behind one closed sum type:
//!
//! - **Tool**: reusable, wears down with use (`condition` in 0..=100)
//! - **Material**: consumable, spent by builds
//!
//! ## Builds
//!
//! A build is a composite operation: a bill of tools and materials is
//! validated against a point-in-time catalog snapshot, and only an accepted
//! build leads to stock deductions.

pub mod build;
pub mod catalog;
pub mod core;
pub mod user;

mod util;

// Re-export commonly used types
pub use build::{
    request::{BuildRequest, StockRequest},
    validator::{AcceptedBuild, CatalogSnapshot, Deficiency, ResolvedItem, validate},
};
pub use catalog::{
    entities::{Material, Resource, ResourceBase, Tool},
    patch::ResourcePatch,
    value_objects::{ResourceId, ResourceKind},
};
pub use core::error::DomainError;
pub use user::entities::{User, UserId};
