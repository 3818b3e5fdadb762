//! Fix Tool use case.
//!
//! Repairs a single tool: +20 condition, capped at 100, persisted
//! immediately as part of the same operation.

use crate::ports::store::{InventoryStore, StoreError};
use serde::Serialize;
use std::sync::Arc;
use stockroom_domain::ResourceId;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FixToolError {
    #[error("Tool not found: {0}")]
    ToolNotFound(ResourceId),

    #[error("Resource {0} is not a tool")]
    NotATool(ResourceId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a repair. Repairs always succeed once the tool is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixToolOutcome {
    pub tool_name: String,
    pub condition: u8,
}

pub struct FixToolUseCase {
    store: Arc<dyn InventoryStore>,
}

impl FixToolUseCase {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, tool_id: &ResourceId) -> Result<FixToolOutcome, FixToolError> {
        let mut resource = self
            .store
            .find_by_id(tool_id)
            .await?
            .ok_or_else(|| FixToolError::ToolNotFound(tool_id.clone()))?;

        let Some(tool) = resource.as_tool_mut() else {
            return Err(FixToolError::NotATool(tool_id.clone()));
        };
        let condition = tool.repair();
        let tool_name = tool.base.name.clone();

        self.store.update(&resource).await?;

        info!("Tool {} fixed; condition now {}", tool_name, condition);

        Ok(FixToolOutcome {
            tool_name,
            condition,
        })
    }
}
