//! Build Something use case.
//!
//! The end-to-end composite operation owned by a user: take a catalog
//! snapshot, validate the requested bill of tools and materials, and
//! commit material deductions when the build is accepted.
//!
//! Tools are validated for quantity but not deducted and no wear is
//! advanced here; tool wear happens only through the separate
//! [`UseToolUseCase`](super::use_tool::UseToolUseCase).

use crate::ports::store::{InventoryStore, StoreError};
use crate::use_cases::inventory::{Deduction, InventoryMutator};
use serde::Serialize;
use std::sync::Arc;
use stockroom_domain::{
    BuildRequest, CatalogSnapshot, Deficiency, ResourceKind, UserId, validate,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Message returned for an accepted and committed build.
pub const BUILD_SUCCESS_MESSAGE: &str =
    "Successfully built something using tools and materials!";

/// Errors that can occur during a build.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// The first deficiency found, passed through verbatim.
    #[error(transparent)]
    Insufficient(#[from] Deficiency),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the [`BuildSomethingUseCase`].
#[derive(Debug, Clone)]
pub struct BuildInput {
    pub user_id: UserId,
    pub request: BuildRequest,
}

impl BuildInput {
    pub fn new(user_id: impl Into<UserId>, request: BuildRequest) -> Self {
        Self {
            user_id: user_id.into(),
            request,
        }
    }
}

/// Outcome of an accepted build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub message: String,
    /// One entry per resolved material, in request order.
    pub deductions: Vec<Deduction>,
    /// Requested names that matched nothing in the snapshot.
    pub missing: Vec<String>,
}

/// Use case composing snapshot, validator and inventory commit.
pub struct BuildSomethingUseCase {
    store: Arc<dyn InventoryStore>,
    mutator: InventoryMutator,
}

impl BuildSomethingUseCase {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self {
            mutator: InventoryMutator::new(store.clone()),
            store,
        }
    }

    /// Execute one build request.
    ///
    /// A rejected build returns the deficiency message verbatim and
    /// changes no state. An accepted build deducts each resolved material
    /// independently and reports how every line fared.
    pub async fn execute(&self, input: BuildInput) -> Result<BuildOutcome, BuildError> {
        let user = self
            .store
            .find_user(&input.user_id)
            .await?
            .ok_or_else(|| BuildError::UserNotFound(input.user_id.clone()))?;

        info!(
            "Build requested by {}: {} tool line(s), {} material line(s)",
            user.name,
            input.request.tools.len(),
            input.request.materials.len()
        );

        let snapshot = CatalogSnapshot::new(
            self.store.list(ResourceKind::Tool).await?,
            self.store.list(ResourceKind::Material).await?,
        );

        let accepted = validate(&input.request, &snapshot)?;
        for name in &accepted.missing {
            warn!("Requested resource not found: {}", name);
        }
        debug!(
            "Build accepted: {} tool(s), {} material(s) resolved",
            accepted.tools.len(),
            accepted.materials.len()
        );

        let deductions = self.mutator.commit(&accepted.materials).await;

        Ok(BuildOutcome {
            message: BUILD_SUCCESS_MESSAGE.to_string(),
            deductions,
            missing: accepted.missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::inventory::DeductionStatus;
    use crate::use_cases::testing::{FakeStore, material, tool, user};
    use stockroom_domain::StockRequest;

    fn store_with_catalog() -> (Arc<FakeStore>, UserId) {
        let store = Arc::new(FakeStore::new());
        let builder = user("Bob");
        let user_id = builder.id.clone();
        store.push_user(builder);
        store.push_resource(tool("Hammer", 5, 80).into());
        store.push_resource(material("Metal", 100).into());
        store.push_resource(material("Wood", 20).into());
        (store, user_id)
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let (store, _) = store_with_catalog();
        let use_case = BuildSomethingUseCase::new(store);
        let input = BuildInput::new(UserId::new("ghost"), BuildRequest::default());
        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, BuildError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn rejected_build_changes_nothing() {
        let (store, user_id) = store_with_catalog();
        let use_case = BuildSomethingUseCase::new(store.clone());
        let request = BuildRequest::new(
            vec![StockRequest::new("Hammer", 1)],
            vec![StockRequest::new("Wood", 25)],
        );

        let err = use_case
            .execute(BuildInput::new(user_id, request))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not enough Wood to build something.");
        assert_eq!(store.amount_of("Hammer"), Some(5));
        assert_eq!(store.amount_of("Metal"), Some(100));
        assert_eq!(store.amount_of("Wood"), Some(20));
    }

    #[tokio::test]
    async fn accepted_build_deducts_materials_only() {
        // Metal 100 / Wood 20, request Metal:50 Wood:20
        let (store, user_id) = store_with_catalog();
        let use_case = BuildSomethingUseCase::new(store.clone());
        let request = BuildRequest::new(
            vec![StockRequest::new("Hammer", 2)],
            vec![
                StockRequest::new("Metal", 50),
                StockRequest::new("Wood", 20),
            ],
        );

        let outcome = use_case
            .execute(BuildInput::new(user_id, request))
            .await
            .unwrap();

        assert_eq!(outcome.message, BUILD_SUCCESS_MESSAGE);
        assert_eq!(outcome.deductions.len(), 2);
        assert!(outcome.deductions.iter().all(Deduction::applied));
        assert_eq!(store.amount_of("Metal"), Some(50));
        assert_eq!(store.amount_of("Wood"), Some(0));
        // tools are not consumed by builds
        assert_eq!(store.amount_of("Hammer"), Some(5));
    }

    #[tokio::test]
    async fn build_resolves_names_case_insensitively() {
        let (store, user_id) = store_with_catalog();
        let use_case = BuildSomethingUseCase::new(store.clone());
        let request = BuildRequest::new(vec![], vec![StockRequest::new("wood", 5)]);

        let outcome = use_case
            .execute(BuildInput::new(user_id, request))
            .await
            .unwrap();

        assert_eq!(
            outcome.deductions[0].outcome,
            DeductionStatus::Applied { new_amount: 15 }
        );
        assert_eq!(store.amount_of("Wood"), Some(15));
    }

    #[tokio::test]
    async fn missing_names_are_reported_not_fatal() {
        let (store, user_id) = store_with_catalog();
        let use_case = BuildSomethingUseCase::new(store.clone());
        let request = BuildRequest::new(
            vec![StockRequest::new("Laser", 1)],
            vec![StockRequest::new("Wood", 5)],
        );

        let outcome = use_case
            .execute(BuildInput::new(user_id, request))
            .await
            .unwrap();

        assert_eq!(outcome.missing, vec!["Laser".to_string()]);
        assert_eq!(store.amount_of("Wood"), Some(15));
    }
}
