//! Registration services.
//!
//! Services depend on store capabilities through trait objects only, never on
//! the concrete store, so any backend implementing the traits can be swapped in.
//!
//! - [`UserQueryService`] only reads and [`UserCommandService`] only writes;
//!   neither can reach the other capability.
//! - [`UserService`] builds both halves over one [`UserRepository`].

mod ids;

pub use ids::*;

use std::sync::Arc;
use tracing::{debug, info, instrument};
use crate::domain::User;
use crate::error::ServiceError;
use crate::store::{UserReader, UserRepository, UserWriter};

/// Read-only half of the registration workflow.
#[derive(Clone)]
pub struct UserQueryService {
    reader: Arc<dyn UserReader>,
}

impl UserQueryService {
    pub fn new(reader: Arc<dyn UserReader>) -> Self {
        Self { reader }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.reader.get_all().await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }
}

/// Write-only half of the registration workflow. Assigns each new user an id.
#[derive(Clone)]
pub struct UserCommandService {
    writer: Arc<dyn UserWriter>,
    ids: IdGenerator,
}

impl UserCommandService {
    pub fn new(writer: Arc<dyn UserWriter>, ids: IdGenerator) -> Self {
        Self { writer, ids }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, name: String, email: String) -> Result<(), ServiceError> {
        let user = User::new(self.ids.next_id(), name, email);
        let user_id = user.id;
        self.writer.add(user).await?;
        info!(user_id, "User registered");
        Ok(())
    }
}

/// Both halves over a single repository.
#[derive(Clone)]
pub struct UserService {
    queries: UserQueryService,
    commands: UserCommandService,
}

impl UserService {
    pub fn new<R: UserRepository + 'static>(repo: Arc<R>, ids: IdGenerator) -> Self {
        Self {
            queries: UserQueryService::new(repo.clone()),
            commands: UserCommandService::new(repo, ids),
        }
    }

    pub fn queries(&self) -> &UserQueryService {
        &self.queries
    }

    pub fn commands(&self) -> &UserCommandService {
        &self.commands
    }
}
