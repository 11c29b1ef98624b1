//! User storage: capability traits and the implementations behind them.
//!
//! Reading and writing are separate traits so a consumer can be handed only
//! the half it needs. [`UserRepository`] is implemented automatically for any
//! type providing both.

mod actor;
mod memory;

pub use actor::*;
pub use memory::*;

use async_trait::async_trait;
use crate::domain::User;
use crate::error::StoreError;

/// Read capability: enumerate every stored user in insertion order.
#[async_trait]
pub trait UserReader: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, StoreError>;
}

/// Write capability: append a user after all existing entries.
#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn add(&self, user: User) -> Result<(), StoreError>;
}

/// Full repository: both capabilities together.
pub trait UserRepository: UserReader + UserWriter {}

impl<T: UserReader + UserWriter> UserRepository for T {}
