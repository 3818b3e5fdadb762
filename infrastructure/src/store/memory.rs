//! In-memory store adapter.
//!
//! Ephemeral backing store for tests and the `--memory` CLI mode. One
//! `RwLock` guards both collections, so every mutating port method - the
//! conditional decrement included - is atomic with respect to the others.

use super::state::StoreState;
use async_trait::async_trait;
use stockroom_application::ports::store::{DeductOutcome, InventoryStore, StoreError};
use stockroom_domain::{Resource, ResourceId, ResourceKind, Tool, User, UserId};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
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
        self.state.write().await.insert(resource);
        Ok(())
    }

    async fn update(&self, resource: &Resource) -> Result<(), StoreError> {
        self.state.write().await.update(resource)
    }

    async fn delete(&self, id: &ResourceId) -> Result<(), StoreError> {
        self.state.write().await.delete(id)
    }

    async fn deduct_amount(
        &self,
        id: &ResourceId,
        quantity: u32,
    ) -> Result<DeductOutcome, StoreError> {
        self.state.write().await.deduct_amount(id, quantity)
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.find_user(id))
    }

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.find_user_by_name(name))
    }

    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        self.state.write().await.insert_user(user);
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<(), StoreError> {
        self.state.write().await.update_user(user)
    }

    async fn record_tool_use(&self, tool: &Tool, user: &User) -> Result<(), StoreError> {
        self.state.write().await.record_tool_use(tool, user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_domain::Material;

    fn material(name: &str, amount: u32) -> Resource {
        Material::new(name, amount, 1.0, "Acme Supply", "A")
            .unwrap()
            .into()
    }

    fn tool(name: &str, condition: u8) -> Tool {
        Tool::new(name, 3, 10.0, "general", condition).unwrap()
    }

    #[tokio::test]
    async fn list_keeps_insertion_order_per_kind() {
        let store = MemoryStore::new();
        store.insert(material("Wood", 20)).await.unwrap();
        store.insert(tool("Hammer", 80).into()).await.unwrap();
        store.insert(material("Metal", 100)).await.unwrap();

        let materials = store.list(ResourceKind::Material).await.unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].name(), "Wood");
        assert_eq!(materials[1].name(), "Metal");
        assert_eq!(store.list(ResourceKind::Tool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_by_name_is_case_insensitive_first_created_wins() {
        let store = MemoryStore::new();
        let first = material("Wood", 20);
        let first_id = first.id().clone();
        store.insert(first).await.unwrap();
        store.insert(material("wood", 50)).await.unwrap();

        let found = store
            .find_by_name(ResourceKind::Material, "WOOD")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), &first_id);
        assert_eq!(found.amount(), 20);

        // the kind filter applies
        assert!(
            store
                .find_by_name(ResourceKind::Tool, "Wood")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn deduct_amount_never_goes_negative() {
        let store = MemoryStore::new();
        let wood = material("Wood", 20);
        let id = wood.id().clone();
        store.insert(wood).await.unwrap();

        assert_eq!(
            store.deduct_amount(&id, 15).await.unwrap(),
            DeductOutcome::Applied { new_amount: 5 }
        );
        assert_eq!(
            store.deduct_amount(&id, 15).await.unwrap(),
            DeductOutcome::Insufficient { available: 5 }
        );
        assert_eq!(
            store.find_by_id(&id).await.unwrap().unwrap().amount(),
            5
        );
    }

    #[tokio::test]
    async fn update_and_delete_missing_records_are_not_found() {
        let store = MemoryStore::new();
        let ghost = material("Ghost", 1);
        assert!(matches!(
            store.update(&ghost).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
        assert!(matches!(
            store.delete(ghost.id()).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn record_tool_use_writes_both_collections() {
        let store = MemoryStore::new();
        let mut hammer = tool("Hammer", 20);
        let tool_id = hammer.base.id.clone();
        let mut alice = User::new("Alice", 34).unwrap();
        let user_id = alice.id.clone();
        store.insert(hammer.clone().into()).await.unwrap();
        store.insert_user(alice.clone()).await.unwrap();

        hammer.record_use(&alice.id).unwrap();
        alice.record_used_tool(tool_id.clone());
        store.record_tool_use(&hammer, &alice).await.unwrap();

        let stored_tool = store.find_by_id(&tool_id).await.unwrap().unwrap();
        assert_eq!(stored_tool.as_tool().unwrap().borrowed_by, vec![user_id.clone()]);
        let stored_user = store.find_user(&user_id).await.unwrap().unwrap();
        assert_eq!(stored_user.used_tools, vec![tool_id]);
    }

    #[tokio::test]
    async fn record_tool_use_fails_whole_when_either_is_missing() {
        let store = MemoryStore::new();
        let hammer = tool("Hammer", 20);
        store.insert(hammer.clone().into()).await.unwrap();
        let ghost = User::new("Ghost", 99).unwrap();

        assert!(matches!(
            store.record_tool_use(&hammer, &ghost).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
    }
}
