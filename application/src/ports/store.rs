//! Inventory store port
//!
//! Defines the interface to the backing store holding the Resources and
//! Users collections. Implementations (adapters) live in the
//! infrastructure layer; the engine receives an explicit handle at
//! construction and never reaches for ambient globals.

use async_trait::async_trait;
use stockroom_domain::{Resource, ResourceId, ResourceKind, Tool, User, UserId};
use thiserror::Error;

/// Errors surfaced by store adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Store failure: {0}")]
    Backend(String),
}

/// Result of an atomic conditional stock deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeductOutcome {
    /// The full quantity was deducted.
    Applied { new_amount: u32 },
    /// Deducting would have gone negative; nothing changed.
    Insufficient { available: u32 },
}

/// Port over the single backing store (resources + users).
///
/// The store is a thin, strongly consistent read/write surface. It does
/// not enforce cross-entity rules, with two deliberate exceptions that
/// close the snapshot-to-commit gap: [`deduct_amount`] is a conditional
/// decrement that re-checks under the store's own write atomicity, and
/// [`record_tool_use`] persists the paired borrow/history entries in one
/// logical transaction.
///
/// [`deduct_amount`]: InventoryStore::deduct_amount
/// [`record_tool_use`]: InventoryStore::record_tool_use
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// All resources of one kind, in insertion order.
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Resource>, StoreError>;

    /// First resource of `kind` whose name matches case-insensitively.
    ///
    /// Duplicate names are permitted; first-created wins.
    async fn find_by_name(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> Result<Option<Resource>, StoreError>;

    async fn find_by_id(&self, id: &ResourceId) -> Result<Option<Resource>, StoreError>;

    async fn insert(&self, resource: Resource) -> Result<(), StoreError>;

    /// Replace the stored resource carrying the same id.
    async fn update(&self, resource: &Resource) -> Result<(), StoreError>;

    /// Delete by id.
    ///
    /// References to the deleted resource in user histories and borrow
    /// lists are left dangling; readers skip them.
    async fn delete(&self, id: &ResourceId) -> Result<(), StoreError>;

    /// Deduct `quantity` from the resource's amount if and only if the
    /// result stays non-negative, atomically with respect to other writes.
    async fn deduct_amount(
        &self,
        id: &ResourceId,
        quantity: u32,
    ) -> Result<DeductOutcome, StoreError>;

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError>;

    async fn insert_user(&self, user: User) -> Result<(), StoreError>;

    async fn update_user(&self, user: &User) -> Result<(), StoreError>;

    /// Persist a used tool and its user in one logical transaction, so the
    /// borrow entry and the use-history entry cannot diverge.
    async fn record_tool_use(&self, tool: &Tool, user: &User) -> Result<(), StoreError>;
}
