use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use crate::clients::UserStoreClient;
use crate::domain::User;
use crate::error::StoreError;
use crate::messages::{ServiceResponse, StoreRequest};
use super::InMemoryUserStore;

/// Actor that exclusively owns the process-wide [`InMemoryUserStore`].
///
/// Requests from any number of clients are queued on one channel and applied
/// one at a time, so concurrent HTTP requests never touch the store at once.
/// The actor stops once every [`UserStoreClient`] has been dropped.
pub struct UserStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    store: InMemoryUserStore,
}

impl UserStoreActor {
    pub fn new(buffer_size: usize) -> (Self, UserStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: InMemoryUserStore::new(),
        };
        (actor, UserStoreClient::new(sender))
    }

    #[instrument(name = "user_store", skip(self))]
    pub async fn run(mut self) {
        info!("UserStore starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Add { user, respond_to } => self.handle_add(user, respond_to),
                StoreRequest::GetAll { respond_to } => self.handle_get_all(respond_to),
                #[cfg(test)]
                StoreRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }
        info!(users = self.store.len(), "UserStore stopped");
    }

    #[instrument(fields(user_id = user.id), skip(self, user, respond_to))]
    fn handle_add(&mut self, user: User, respond_to: ServiceResponse<(), StoreError>) {
        self.store.add(user);
        debug!(total = self.store.len(), "User stored");
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_all(&self, respond_to: ServiceResponse<Vec<User>, StoreError>) {
        let users = self.store.get_all();
        debug!(count = users.len(), "Listing users");
        let _ = respond_to.send(Ok(users));
    }
}
