//! Catalog entities - the tracked resources.
//!
//! The Tool/Material split is a closed sum type ([`Resource`]) sharing the
//! common stock fields through [`ResourceBase`]. On disk the variant is
//! carried by a `"type"` tag with the base fields flattened alongside.

use super::value_objects::{ResourceId, ResourceKind};
use crate::core::error::DomainError;
use crate::user::entities::UserId;
use serde::{Deserialize, Serialize};

/// A tool at or below this condition refuses use.
pub const MIN_USABLE_CONDITION: u8 = 15;
/// Condition lost by one use.
pub const WEAR_PER_USE: u8 = 10;
/// Condition regained by one repair.
pub const REPAIR_GAIN: u8 = 20;
/// Upper clamp for tool condition.
pub const MAX_CONDITION: u8 = 100;

/// Stock fields shared by every resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceBase {
    /// Opaque unique identifier, immutable after creation
    pub id: ResourceId,
    /// Human-facing lookup key (non-empty; uniqueness is not enforced)
    pub name: String,
    /// Current stock level
    pub amount: u32,
    /// Unit cost
    pub cost: f64,
}

impl ResourceBase {
    pub fn new(name: impl Into<String>, amount: u32, cost: f64) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        if cost < 0.0 {
            return Err(DomainError::NegativeCost(cost));
        }
        Ok(Self {
            id: ResourceId::generate(),
            name,
            amount,
            cost,
        })
    }

    /// Total value of the stock on hand.
    pub fn worth(&self) -> f64 {
        self.amount as f64 * self.cost
    }

    /// Record a new delivery.
    ///
    /// Rejects non-positive amounts and additions that would overflow the
    /// stock counter before any mutation. On success the new level is
    /// exactly `old + additional`.
    pub fn new_arrival(&mut self, additional: i64) -> Result<u32, DomainError> {
        let added = u32::try_from(additional)
            .ok()
            .filter(|a| *a > 0)
            .ok_or(DomainError::InvalidAmount(additional))?;
        self.amount = self
            .amount
            .checked_add(added)
            .ok_or(DomainError::AmountOverflow {
                current: self.amount,
                additional: added,
            })?;
        Ok(self.amount)
    }
}

/// A reusable tool. Wears down with use, recovers through repair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(flatten)]
    pub base: ResourceBase,
    /// Free-text description of intended use
    pub usage: String,
    /// One entry per borrow event; a user may appear multiple times
    #[serde(default)]
    pub borrowed_by: Vec<UserId>,
    /// Health score in 0..=100; gates usability
    #[serde(deserialize_with = "clamped_condition")]
    pub condition: u8,
}

/// Out-of-range values in a hand-edited document are clamped on load, the
/// same way every other condition mutation clamps.
fn clamped_condition<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = u8::deserialize(deserializer)?;
    Ok(raw.min(MAX_CONDITION))
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        amount: u32,
        cost: f64,
        usage: impl Into<String>,
        condition: u8,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            base: ResourceBase::new(name, amount, cost)?,
            usage: usage.into(),
            borrowed_by: Vec::new(),
            condition: condition.min(MAX_CONDITION),
        })
    }

    /// Whether the tool's condition allows another use.
    pub fn usable(&self) -> bool {
        self.condition > MIN_USABLE_CONDITION
    }

    /// Record one use by `user`.
    ///
    /// Fails without mutating when the condition is at or below the usable
    /// floor. Otherwise the wear and the borrower entry are applied
    /// together - both or neither - and the new condition is returned.
    /// The minimum usable condition is 16, so the post-use floor is 6.
    pub fn record_use(&mut self, user: &UserId) -> Result<u8, DomainError> {
        if !self.usable() {
            return Err(DomainError::ConditionTooLow(self.condition));
        }
        self.condition -= WEAR_PER_USE;
        self.borrowed_by.push(user.clone());
        Ok(self.condition)
    }

    /// Repair the tool, capped at full condition. Always succeeds.
    pub fn repair(&mut self) -> u8 {
        self.condition = (self.condition + REPAIR_GAIN).min(MAX_CONDITION);
        self.condition
    }
}

/// A consumable material, spent by builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(flatten)]
    pub base: ResourceBase,
    /// Where the material comes from (non-empty)
    pub supplier: String,
    /// Free-form grade label
    pub quality: String,
}

impl Material {
    pub fn new(
        name: impl Into<String>,
        amount: u32,
        cost: f64,
        supplier: impl Into<String>,
        quality: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let supplier = supplier.into();
        if supplier.trim().is_empty() {
            return Err(DomainError::EmptySupplier);
        }
        Ok(Self {
            base: ResourceBase::new(name, amount, cost)?,
            supplier,
            quality: quality.into(),
        })
    }
}

/// A catalog resource - the closed set of trackable variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Resource {
    Tool(Tool),
    Material(Material),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Tool(_) => ResourceKind::Tool,
            Resource::Material(_) => ResourceKind::Material,
        }
    }

    pub fn base(&self) -> &ResourceBase {
        match self {
            Resource::Tool(tool) => &tool.base,
            Resource::Material(material) => &material.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ResourceBase {
        match self {
            Resource::Tool(tool) => &mut tool.base,
            Resource::Material(material) => &mut material.base,
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn amount(&self) -> u32 {
        self.base().amount
    }

    pub fn cost(&self) -> f64 {
        self.base().cost
    }

    /// Total value of the stock on hand.
    pub fn worth(&self) -> f64 {
        self.base().worth()
    }

    /// Record a new delivery on either variant.
    pub fn new_arrival(&mut self, additional: i64) -> Result<u32, DomainError> {
        self.base_mut().new_arrival(additional)
    }

    pub fn as_tool(&self) -> Option<&Tool> {
        match self {
            Resource::Tool(tool) => Some(tool),
            Resource::Material(_) => None,
        }
    }

    pub fn as_tool_mut(&mut self) -> Option<&mut Tool> {
        match self {
            Resource::Tool(tool) => Some(tool),
            Resource::Material(_) => None,
        }
    }

    pub fn as_material(&self) -> Option<&Material> {
        match self {
            Resource::Material(material) => Some(material),
            Resource::Tool(_) => None,
        }
    }
}

impl From<Tool> for Resource {
    fn from(tool: Tool) -> Self {
        Resource::Tool(tool)
    }
}

impl From<Material> for Resource {
    fn from(material: Material) -> Self {
        Resource::Material(material)
    }
}
