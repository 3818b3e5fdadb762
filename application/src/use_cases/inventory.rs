//! Inventory commit - applying an accepted build's deductions.
//!
//! Runs after validation has accepted a build. Each material commits
//! independently through the store's conditional decrement, so a
//! late-discovered shortfall on one material skips that material and is
//! reported without rolling back deductions already applied to siblings.

use crate::ports::store::{DeductOutcome, InventoryStore};
use serde::Serialize;
use std::sync::Arc;
use stockroom_domain::ResolvedItem;
use tracing::{debug, warn};

/// How one resource fared at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeductionStatus {
    /// Deducted in full.
    Applied { new_amount: u32 },
    /// Would have gone negative at commit time; skipped and reported.
    Skipped { available: u32 },
    /// The store rejected this resource's own write.
    Failed { error: String },
}

/// Per-resource entry in the commit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub name: String,
    pub requested: u32,
    #[serde(flatten)]
    pub outcome: DeductionStatus,
}

impl Deduction {
    pub fn applied(&self) -> bool {
        matches!(self.outcome, DeductionStatus::Applied { .. })
    }
}

/// Applies committed quantity deductions to resolved materials.
pub struct InventoryMutator {
    store: Arc<dyn InventoryStore>,
}

impl InventoryMutator {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Commit the deductions for `items`, in order, each independently.
    ///
    /// Never fails as a whole: store errors are caught per resource and
    /// reported in that resource's entry.
    pub async fn commit(&self, items: &[ResolvedItem]) -> Vec<Deduction> {
        let mut report = Vec::with_capacity(items.len());
        for item in items {
            let outcome = match self.store.deduct_amount(&item.id, item.quantity).await {
                Ok(DeductOutcome::Applied { new_amount }) => {
                    debug!(
                        "Deducted {} x {}; new amount {}",
                        item.quantity, item.name, new_amount
                    );
                    DeductionStatus::Applied { new_amount }
                }
                Ok(DeductOutcome::Insufficient { available }) => {
                    warn!(
                        "Not enough {} in inventory (requested {}, available {})",
                        item.name, item.quantity, available
                    );
                    DeductionStatus::Skipped { available }
                }
                Err(error) => {
                    warn!("Failed to deduct {}: {}", item.name, error);
                    DeductionStatus::Failed {
                        error: error.to_string(),
                    }
                }
            };
            report.push(Deduction {
                name: item.name.clone(),
                requested: item.quantity,
                outcome,
            });
        }
        report
    }
}
