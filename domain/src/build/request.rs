//! Build request value objects.

use serde::{Deserialize, Serialize};

/// One requested line item: a resource name and the quantity wanted.
///
/// The name is matched case-insensitively against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRequest {
    pub name: String,
    pub quantity: u32,
}

impl StockRequest {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// The bill of tools and materials for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub tools: Vec<StockRequest>,
    pub materials: Vec<StockRequest>,
}

impl BuildRequest {
    pub fn new(tools: Vec<StockRequest>, materials: Vec<StockRequest>) -> Self {
        Self { tools, materials }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.materials.is_empty()
    }
}
