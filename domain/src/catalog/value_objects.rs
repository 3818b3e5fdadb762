//! Catalog value objects - identifiers and the resource kind tag.

use crate::core::error::DomainError;
use crate::util::uuid_v4;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for a catalog resource.
///
/// Assigned at creation and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates a ResourceId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique ResourceId.
    pub fn generate() -> Self {
        Self(uuid_v4())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for ResourceId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of resource variants tracked by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Reusable, wears down with use
    Tool,
    /// Consumable, spent by builds
    Material,
}

impl ResourceKind {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceKind::Tool => "tool",
            ResourceKind::Material => "material",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ResourceKind::Tool => "Tool",
            ResourceKind::Material => "Material",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tool" => Ok(ResourceKind::Tool),
            "material" => Ok(ResourceKind::Material),
            _ => Err(DomainError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_not_empty() {
        let id = ResourceId::generate();
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("tool".parse::<ResourceKind>().unwrap(), ResourceKind::Tool);
        assert_eq!("Tool".parse::<ResourceKind>().unwrap(), ResourceKind::Tool);
        assert_eq!(
            "MATERIAL".parse::<ResourceKind>().unwrap(),
            ResourceKind::Material
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "gadget".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err, DomainError::UnknownKind("gadget".to_string()));
        assert!(err.is_invalid_argument());
    }
}
