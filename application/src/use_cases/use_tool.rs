//! Single-Tool Use use case.
//!
//! A user uses one tool by id: the tool wears down and records the
//! borrower, the user's history records the tool. The two appends are
//! persisted together through the store's paired write so the
//! denormalized histories cannot diverge.

use crate::ports::store::{InventoryStore, StoreError};
use serde::Serialize;
use std::sync::Arc;
use stockroom_domain::{DomainError, Resource, ResourceId, UserId};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when using a tool.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UseToolError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Tool not found: {0}")]
    ToolNotFound(ResourceId),

    #[error("Resource {0} is not a tool")]
    NotATool(ResourceId),

    /// Condition gate failure, message passed through verbatim.
    #[error(transparent)]
    Unusable(DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a successful tool use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseToolOutcome {
    pub tool_name: String,
    /// Condition after the wear was applied.
    pub condition: u8,
}

pub struct UseToolUseCase {
    store: Arc<dyn InventoryStore>,
}

impl UseToolUseCase {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Use one tool on behalf of one user.
    ///
    /// On success exactly one borrow entry and one matching history entry
    /// are persisted, referencing the same tool and user. On any failure
    /// nothing changes.
    pub async fn execute(
        &self,
        user_id: &UserId,
        tool_id: &ResourceId,
    ) -> Result<UseToolOutcome, UseToolError> {
        let mut user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or_else(|| UseToolError::UserNotFound(user_id.clone()))?;

        let resource = self
            .store
            .find_by_id(tool_id)
            .await?
            .ok_or_else(|| UseToolError::ToolNotFound(tool_id.clone()))?;
        let mut tool = match resource {
            Resource::Tool(tool) => tool,
            Resource::Material(_) => return Err(UseToolError::NotATool(tool_id.clone())),
        };

        let condition = tool
            .record_use(&user.id)
            .map_err(UseToolError::Unusable)?;
        user.record_used_tool(tool.base.id.clone());

        self.store.record_tool_use(&tool, &user).await?;

        info!(
            "Tool {} used by {}; condition now {}",
            tool.base.name, user.name, condition
        );

        Ok(UseToolOutcome {
            tool_name: tool.base.name.clone(),
            condition,
        })
    }
}
