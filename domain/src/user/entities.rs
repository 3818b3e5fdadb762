//! User ledger entities.

use crate::catalog::value_objects::ResourceId;
use crate::core::error::DomainError;
use crate::util::uuid_v4;
use serde::{Deserialize, Serialize};

/// Unique identifier for a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a UserId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique UserId.
    pub fn generate() -> Self {
        Self(uuid_v4())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for UserId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user known to the stockroom, with the history of tools they used.
///
/// `used_tools` is append-only: one entry per successful use event. It is
/// the user-side view of the same history a tool records in `borrowed_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub used_tools: Vec<ResourceId>,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self {
            id: UserId::generate(),
            name,
            age,
            used_tools: Vec::new(),
        })
    }

    /// Append one use event. Duplicates are expected - one entry per event.
    pub fn record_used_tool(&mut self, tool: ResourceId) {
        self.used_tools.push(tool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_keeps_one_entry_per_event() {
        let mut user = User::new("Alice", 34).unwrap();
        let hammer = ResourceId::new("t1");
        user.record_used_tool(hammer.clone());
        user.record_used_tool(hammer.clone());
        assert_eq!(user.used_tools, vec![hammer.clone(), hammer]);
    }

    #[test]
    fn empty_user_name_is_rejected() {
        assert_eq!(User::new("", 20).unwrap_err(), DomainError::EmptyName);
    }
}
