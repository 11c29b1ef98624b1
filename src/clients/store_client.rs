use async_trait::async_trait;
use tokio::sync::mpsc;
use crate::domain::User;
use crate::error::StoreError;
use crate::messages::StoreRequest;
use crate::store::{UserReader, UserWriter};

/// Cloneable handle to the [`UserStoreActor`](crate::store::UserStoreActor).
///
/// Implements both store capabilities; callers that should only read or only
/// write receive it as `Arc<dyn UserReader>` or `Arc<dyn UserWriter>`.
#[derive(Clone)]
pub struct UserStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl UserStoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }
}

client_method!(UserStoreClient => fn add_user(user: User) -> () as StoreRequest::Add, Error = StoreError);
client_method!(UserStoreClient => fn list_users() -> Vec<User> as StoreRequest::GetAll, Error = StoreError);

#[cfg(test)]
client_method!(UserStoreClient => fn count() -> usize as StoreRequest::Count, Error = StoreError);

#[async_trait]
impl UserReader for UserStoreClient {
    async fn get_all(&self) -> Result<Vec<User>, StoreError> {
        self.list_users().await
    }
}

#[async_trait]
impl UserWriter for UserStoreClient {
    async fn add(&self, user: User) -> Result<(), StoreError> {
        self.add_user(user).await
    }
}
