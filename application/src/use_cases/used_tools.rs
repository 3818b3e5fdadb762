//! Used Tools query.
//!
//! Lists the names of every tool a user has used, one entry per use
//! event. History entries pointing at deleted tools are skipped on read;
//! the history itself is never pruned.

use crate::ports::store::{InventoryStore, StoreError};
use std::sync::Arc;
use stockroom_domain::{User, UserId};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsedToolsError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("User not found: {0}")]
    UnknownUserName(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct UsedToolsUseCase {
    store: Arc<dyn InventoryStore>,
}

impl UsedToolsUseCase {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<Vec<String>, UsedToolsError> {
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or_else(|| UsedToolsError::UserNotFound(user_id.clone()))?;
        self.collect_names(&user).await
    }

    /// Resolve the user by case-insensitive name, then list as [`execute`]
    /// does.
    ///
    /// [`execute`]: UsedToolsUseCase::execute
    pub async fn execute_by_name(&self, name: &str) -> Result<Vec<String>, UsedToolsError> {
        let user = self
            .store
            .find_user_by_name(name)
            .await?
            .ok_or_else(|| UsedToolsError::UnknownUserName(name.to_string()))?;
        self.collect_names(&user).await
    }

    async fn collect_names(&self, user: &User) -> Result<Vec<String>, UsedToolsError> {
        let mut names = Vec::with_capacity(user.used_tools.len());
        for id in &user.used_tools {
            match self.store.find_by_id(id).await? {
                Some(resource) => names.push(resource.name().to_string()),
                None => debug!("Skipping dangling tool reference {}", id),
            }
        }
        Ok(names)
    }
}
