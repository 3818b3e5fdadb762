//! JSON-file store adapter.
//!
//! Persists the whole store as one JSON document. The document is read
//! once at open and rewritten after every mutation while the write lock
//! is still held, so on-disk state always matches the last committed
//! operation. A missing file opens as an empty store.

use super::state::StoreState;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use stockroom_application::ports::store::{DeductOutcome, InventoryStore, StoreError};
use stockroom_domain::{Resource, ResourceId, ResourceKind, Tool, User, UserId};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonFileStore {
    /// Open the store document at `path`, creating an empty store when the
    /// file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = if path.exists() {
            let bytes = fs::read(&path).map_err(backend)?;
            serde_json::from_slice(&bytes).map_err(backend)?
        } else {
            StoreState::default()
        };
        debug!("Opened store at {}", path.display());
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, state: &StoreState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(backend)?;
        }
        let json = serde_json::to_string_pretty(state).map_err(backend)?;
        fs::write(&self.path, json).map_err(backend)
    }
}

fn backend(error: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(error.to_string())
}

#[async_trait]
impl InventoryStore for JsonFileStore {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Resource>, StoreError> {
        Ok(self.state.read().await.list(kind))
    }

    async fn find_by_name(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> Result<Option<Resource>, StoreError> {
        Ok(self.state.read().await.find_by_name(kind, name))
    }

    async fn find_by_id(&self, id: &ResourceId) -> Result<Option<Resource>, StoreError> {
        Ok(self.state.read().await.find_by_id(id))
    }

    async fn insert(&self, resource: Resource) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.insert(resource);
        self.flush(&state)
    }

    async fn update(&self, resource: &Resource) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.update(resource)?;
        self.flush(&state)
    }

    async fn delete(&self, id: &ResourceId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.delete(id)?;
        self.flush(&state)
    }

    async fn deduct_amount(
        &self,
        id: &ResourceId,
        quantity: u32,
    ) -> Result<DeductOutcome, StoreError> {
        let mut state = self.state.write().await;
        let outcome = state.deduct_amount(id, quantity)?;
        if matches!(outcome, DeductOutcome::Applied { .. }) {
            self.flush(&state)?;
        }
        Ok(outcome)
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.find_user(id))
    }

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.find_user_by_name(name))
    }

    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.insert_user(user);
        self.flush(&state)
    }

    async fn update_user(&self, user: &User) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.update_user(user)?;
        self.flush(&state)
    }

    async fn record_tool_use(&self, tool: &Tool, user: &User) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.record_tool_use(tool, user)?;
        self.flush(&state)
    }
}
