//! Allow-listed field patches for catalog resources.
//!
//! Free-form record edits go through [`ResourcePatch`]: an explicit set of
//! patchable fields, validated against the target variant before any
//! assignment. Caller-supplied keys are never merged blindly.

use super::entities::{MAX_CONDITION, Resource};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A partial update for a resource.
///
/// All fields are optional; `None` leaves the current value untouched.
/// Tool-only and material-only fields are rejected when applied to the
/// other variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePatch {
    pub name: Option<String>,
    pub amount: Option<u32>,
    pub cost: Option<f64>,

    // Tool-only
    pub usage: Option<String>,
    pub condition: Option<u8>,

    // Material-only
    pub supplier: Option<String>,
    pub quality: Option<String>,
}

impl ResourcePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.cost.is_none()
            && self.usage.is_none()
            && self.condition.is_none()
            && self.supplier.is_none()
            && self.quality.is_none()
    }

    /// Apply the patch to `resource`.
    ///
    /// Validation happens before any assignment, so a rejected patch leaves
    /// the record exactly as it was. Condition values are clamped to the
    /// 0..=100 range like every other condition mutation.
    pub fn apply_to(&self, resource: &mut Resource) -> Result<(), DomainError> {
        self.validate_for(resource)?;

        let base = resource.base_mut();
        if let Some(name) = &self.name {
            base.name = name.clone();
        }
        if let Some(amount) = self.amount {
            base.amount = amount;
        }
        if let Some(cost) = self.cost {
            base.cost = cost;
        }

        match resource {
            Resource::Tool(tool) => {
                if let Some(usage) = &self.usage {
                    tool.usage = usage.clone();
                }
                if let Some(condition) = self.condition {
                    tool.condition = condition.min(MAX_CONDITION);
                }
            }
            Resource::Material(material) => {
                if let Some(supplier) = &self.supplier {
                    material.supplier = supplier.clone();
                }
                if let Some(quality) = &self.quality {
                    material.quality = quality.clone();
                }
            }
        }

        Ok(())
    }

    fn validate_for(&self, resource: &Resource) -> Result<(), DomainError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(DomainError::EmptyName);
        }
        if let Some(cost) = self.cost
            && cost < 0.0
        {
            return Err(DomainError::NegativeCost(cost));
        }
        if let Some(supplier) = &self.supplier
            && supplier.trim().is_empty()
        {
            return Err(DomainError::EmptySupplier);
        }

        let kind = resource.kind();
        match resource {
            Resource::Tool(_) => {
                if self.supplier.is_some() {
                    return Err(DomainError::InvalidField {
                        field: "supplier",
                        kind,
                    });
                }
                if self.quality.is_some() {
                    return Err(DomainError::InvalidField {
                        field: "quality",
                        kind,
                    });
                }
            }
            Resource::Material(_) => {
                if self.usage.is_some() {
                    return Err(DomainError::InvalidField {
                        field: "usage",
                        kind,
                    });
                }
                if self.condition.is_some() {
                    return Err(DomainError::InvalidField {
                        field: "condition",
                        kind,
                    });
                }
            }
        }

        Ok(())
    }
}
