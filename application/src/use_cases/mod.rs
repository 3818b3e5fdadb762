//! Use cases - the operations the engine exposes to its callers

pub mod add_stock;
pub mod build_something;
pub mod catalog_admin;
pub mod fix_tool;
pub mod inventory;
pub mod use_tool;
pub mod used_tools;

#[cfg(test)]
pub(crate) mod testing {
    //! Shared in-memory fake of the store port for use-case tests.

    use crate::ports::store::{DeductOutcome, InventoryStore, StoreError};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use stockroom_domain::{
        Material, Resource, ResourceId, ResourceKind, Tool, User, UserId,
    };

    #[derive(Default)]
    pub struct FakeStore {
        pub resources: Mutex<Vec<Resource>>,
        pub users: Mutex<Vec<User>>,
        /// Resource ids whose deduction should fail with a backend error.
        pub fail_deduct_for: Mutex<Vec<ResourceId>>,
    }

    impl FakeStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_resources(resources: Vec<Resource>) -> Self {
            Self {
                resources: Mutex::new(resources),
                ..Default::default()
            }
        }

        pub fn push_user(&self, user: User) {
            self.users.lock().unwrap().push(user);
        }

        pub fn push_resource(&self, resource: Resource) {
            self.resources.lock().unwrap().push(resource);
        }

        pub fn resource(&self, id: &ResourceId) -> Option<Resource> {
            self.resources
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id() == id)
                .cloned()
        }

        pub fn user(&self, id: &UserId) -> Option<User> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| &u.id == id)
                .cloned()
        }

        pub fn amount_of(&self, name: &str) -> Option<u32> {
            self.resources
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.name() == name)
                .map(|r| r.amount())
        }
    }

    pub fn tool(name: &str, amount: u32, condition: u8) -> Tool {
        Tool::new(name, amount, 10.0, "general purpose", condition).unwrap()
    }

    pub fn material(name: &str, amount: u32) -> Material {
        Material::new(name, amount, 2.0, "Acme Supply", "A").unwrap()
    }

    pub fn user(name: &str) -> User {
        User::new(name, 30).unwrap()
    }

    #[async_trait]
    impl InventoryStore for FakeStore {
        async fn list(&self, kind: ResourceKind) -> Result<Vec<Resource>, StoreError> {
            Ok(self
                .resources
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.kind() == kind)
                .cloned()
                .collect())
        }

        async fn find_by_name(
            &self,
            kind: ResourceKind,
            name: &str,
        ) -> Result<Option<Resource>, StoreError> {
            Ok(self
                .resources
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.kind() == kind && r.name().eq_ignore_ascii_case(name))
                .cloned())
        }

        async fn find_by_id(&self, id: &ResourceId) -> Result<Option<Resource>, StoreError> {
            Ok(self.resource(id))
        }

        async fn insert(&self, resource: Resource) -> Result<(), StoreError> {
            self.resources.lock().unwrap().push(resource);
            Ok(())
        }

        async fn update(&self, resource: &Resource) -> Result<(), StoreError> {
            let mut resources = self.resources.lock().unwrap();
            match resources.iter_mut().find(|r| r.id() == resource.id()) {
                Some(slot) => {
                    *slot = resource.clone();
                    Ok(())
                }
                None => Err(StoreError::NotFound(resource.id().to_string())),
            }
        }

        async fn delete(&self, id: &ResourceId) -> Result<(), StoreError> {
            let mut resources = self.resources.lock().unwrap();
            let before = resources.len();
            resources.retain(|r| r.id() != id);
            if resources.len() == before {
                return Err(StoreError::NotFound(id.to_string()));
            }
            Ok(())
        }

        async fn deduct_amount(
            &self,
            id: &ResourceId,
            quantity: u32,
        ) -> Result<DeductOutcome, StoreError> {
            if self.fail_deduct_for.lock().unwrap().contains(id) {
                return Err(StoreError::Backend("injected failure".to_string()));
            }
            let mut resources = self.resources.lock().unwrap();
            let resource = resources
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            let available = resource.amount();
            if available < quantity {
                return Ok(DeductOutcome::Insufficient { available });
            }
            resource.base_mut().amount = available - quantity;
            Ok(DeductOutcome::Applied {
                new_amount: available - quantity,
            })
        }

        async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
            Ok(self.user(id))
        }

        async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.name.eq_ignore_ascii_case(name))
                .cloned())
        }

        async fn insert_user(&self, user: User) -> Result<(), StoreError> {
            self.users.lock().unwrap().push(user);
            Ok(())
        }

        async fn update_user(&self, user: &User) -> Result<(), StoreError> {
            let mut users = self.users.lock().unwrap();
            match users.iter_mut().find(|u| u.id == user.id) {
                Some(slot) => {
                    *slot = user.clone();
                    Ok(())
                }
                None => Err(StoreError::NotFound(user.id.to_string())),
            }
        }

        async fn record_tool_use(&self, tool: &Tool, user: &User) -> Result<(), StoreError> {
            {
                let mut resources = self.resources.lock().unwrap();
                let slot = resources
                    .iter_mut()
                    .find(|r| r.id() == &tool.base.id)
                    .ok_or_else(|| StoreError::NotFound(tool.base.id.to_string()))?;
                *slot = Resource::Tool(tool.clone());
            }
            let mut users = self.users.lock().unwrap();
            let slot = users
                .iter_mut()
                .find(|u| u.id == user.id)
                .ok_or_else(|| StoreError::NotFound(user.id.to_string()))?;
            *slot = user.clone();
            Ok(())
        }
    }
}
