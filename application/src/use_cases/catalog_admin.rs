//! Catalog administration use case.
//!
//! Plain record management around the engine: creating resources and
//! users, listing, allow-listed field patches, and deletion. No
//! cross-record invariants live here.

use crate::ports::store::{InventoryStore, StoreError};
use std::sync::Arc;
use stockroom_domain::{
    DomainError, Material, Resource, ResourceId, ResourceKind, ResourcePatch, Tool, User,
};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogAdminError {
    #[error("Item not found: {0}")]
    NotFound(ResourceId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Draft fields for a new tool.
#[derive(Debug, Clone)]
pub struct NewTool {
    pub name: String,
    pub amount: u32,
    pub cost: f64,
    pub usage: String,
    pub condition: u8,
}

/// Draft fields for a new material.
#[derive(Debug, Clone)]
pub struct NewMaterial {
    pub name: String,
    pub amount: u32,
    pub cost: f64,
    pub supplier: String,
    pub quality: String,
}

pub struct CatalogAdminUseCase {
    store: Arc<dyn InventoryStore>,
}

impl CatalogAdminUseCase {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    pub async fn create_tool(&self, draft: NewTool) -> Result<Resource, CatalogAdminError> {
        let tool = Tool::new(
            draft.name,
            draft.amount,
            draft.cost,
            draft.usage,
            draft.condition,
        )?;
        let resource: Resource = tool.into();
        self.store.insert(resource.clone()).await?;
        info!("Tool {} created", resource.name());
        Ok(resource)
    }

    pub async fn create_material(
        &self,
        draft: NewMaterial,
    ) -> Result<Resource, CatalogAdminError> {
        let material = Material::new(
            draft.name,
            draft.amount,
            draft.cost,
            draft.supplier,
            draft.quality,
        )?;
        let resource: Resource = material.into();
        self.store.insert(resource.clone()).await?;
        info!("Material {} created", resource.name());
        Ok(resource)
    }

    pub async fn create_user(
        &self,
        name: impl Into<String>,
        age: u32,
    ) -> Result<User, CatalogAdminError> {
        let user = User::new(name, age)?;
        self.store.insert_user(user.clone()).await?;
        info!("User {} created", user.name);
        Ok(user)
    }

    pub async fn list(&self, kind: ResourceKind) -> Result<Vec<Resource>, CatalogAdminError> {
        Ok(self.store.list(kind).await?)
    }

    pub async fn get(&self, id: &ResourceId) -> Result<Resource, CatalogAdminError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogAdminError::NotFound(id.clone()))
    }

    /// Apply an allow-listed field patch and persist the result.
    pub async fn update(
        &self,
        id: &ResourceId,
        patch: &ResourcePatch,
    ) -> Result<Resource, CatalogAdminError> {
        let mut resource = self.get(id).await?;
        patch.apply_to(&mut resource)?;
        self.store.update(&resource).await?;
        info!("Item {} updated", resource.name());
        Ok(resource)
    }

    /// Delete by id. Dangling history references are tolerated, not
    /// cascade-cleaned.
    pub async fn delete(&self, id: &ResourceId) -> Result<(), CatalogAdminError> {
        match self.store.delete(id).await {
            Ok(()) => {
                info!("Item {} deleted", id);
                Ok(())
            }
            Err(StoreError::NotFound(_)) => Err(CatalogAdminError::NotFound(id.clone())),
            Err(other) => Err(other.into()),
        }
    }
}
