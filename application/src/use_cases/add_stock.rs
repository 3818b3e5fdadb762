//! Add Stock use case.
//!
//! Records a new arrival for a tool or material addressed by kind and
//! case-insensitive name. Non-positive amounts are rejected before the
//! store is touched.

use crate::ports::store::{InventoryStore, StoreError};
use std::sync::Arc;
use stockroom_domain::{DomainError, ResourceKind};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddStockError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: ResourceKind, name: String },

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct AddStockUseCase {
    store: Arc<dyn InventoryStore>,
}

impl AddStockUseCase {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Add `additional` units and return the new amount.
    pub async fn execute(
        &self,
        kind: ResourceKind,
        name: &str,
        additional: i64,
    ) -> Result<u32, AddStockError> {
        // fail fast so an invalid amount never reaches the store
        if additional <= 0 {
            return Err(DomainError::InvalidAmount(additional).into());
        }

        let mut resource = self
            .store
            .find_by_name(kind, name)
            .await?
            .ok_or_else(|| AddStockError::NotFound {
                kind,
                name: name.to_string(),
            })?;

        let new_amount = resource.new_arrival(additional)?;
        self.store.update(&resource).await?;

        info!(
            "New arrival for {} {}: +{}, amount now {}",
            kind, resource.name(), additional, new_amount
        );

        Ok(new_amount)
    }
}
