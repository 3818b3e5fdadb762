//! Shared in-memory state backing the store adapters.
//!
//! Both stores keep the two collections as insertion-ordered vectors, so
//! name lookups over duplicates resolve to the first-created record. All
//! cross-record operations here run under the caller's single write lock,
//! which is what makes the conditional decrement and the paired tool-use
//! write atomic.

use serde::{Deserialize, Serialize};
use stockroom_application::ports::store::{DeductOutcome, StoreError};
use stockroom_domain::{Resource, ResourceId, ResourceKind, Tool, User, UserId};

/// The persisted document: a Resources collection and a Users collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct StoreState {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl StoreState {
    pub fn list(&self, kind: ResourceKind) -> Vec<Resource> {
        self.resources
            .iter()
            .filter(|r| r.kind() == kind)
            .cloned()
            .collect()
    }

    pub fn find_by_name(&self, kind: ResourceKind, name: &str) -> Option<Resource> {
        self.resources
            .iter()
            .find(|r| r.kind() == kind && r.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    pub fn find_by_id(&self, id: &ResourceId) -> Option<Resource> {
        self.resources.iter().find(|r| r.id() == id).cloned()
    }

    pub fn insert(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn update(&mut self, resource: &Resource) -> Result<(), StoreError> {
        let slot = self
            .resources
            .iter_mut()
            .find(|r| r.id() == resource.id())
            .ok_or_else(|| StoreError::NotFound(resource.id().to_string()))?;
        *slot = resource.clone();
        Ok(())
    }

    pub fn delete(&mut self, id: &ResourceId) -> Result<(), StoreError> {
        let before = self.resources.len();
        self.resources.retain(|r| r.id() != id);
        if self.resources.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Conditional decrement: applies only when the result stays >= 0.
    pub fn deduct_amount(
        &mut self,
        id: &ResourceId,
        quantity: u32,
    ) -> Result<DeductOutcome, StoreError> {
        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let available = resource.amount();
        if available < quantity {
            return Ok(DeductOutcome::Insufficient { available });
        }
        resource.base_mut().amount = available - quantity;
        Ok(DeductOutcome::Applied {
            new_amount: available - quantity,
        })
    }

    pub fn find_user(&self, id: &UserId) -> Option<User> {
        self.users.iter().find(|u| &u.id == id).cloned()
    }

    pub fn find_user_by_name(&self, name: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn update_user(&mut self, user: &User) -> Result<(), StoreError> {
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| StoreError::NotFound(user.id.to_string()))?;
        *slot = user.clone();
        Ok(())
    }

    /// Write the tool and the user together; fails before mutating if
    /// either record is missing.
    pub fn record_tool_use(&mut self, tool: &Tool, user: &User) -> Result<(), StoreError> {
        if !self.resources.iter().any(|r| r.id() == &tool.base.id) {
            return Err(StoreError::NotFound(tool.base.id.to_string()));
        }
        if !self.users.iter().any(|u| u.id == user.id) {
            return Err(StoreError::NotFound(user.id.to_string()));
        }
        // both present; now apply both writes
        self.update(&Resource::Tool(tool.clone()))?;
        self.update_user(user)?;
        Ok(())
    }
}
