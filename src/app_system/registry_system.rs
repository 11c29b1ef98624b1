use std::sync::Arc;
use tracing::{error, info};
use crate::api::AppState;
use crate::clients::UserStoreClient;
use crate::config::Config;
use crate::service::{IdGenerator, UserService};
use crate::store::UserStoreActor;

/// Owns the user store actor and the services built on top of it.
///
/// Created once at startup and handed to the HTTP server; nothing about the
/// store lives in a global.
pub struct RegistrySystem {
    pub store_client: UserStoreClient,
    pub user_service: UserService,
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    pub fn new(config: &Config) -> Self {
        let (store_actor, store_client) = UserStoreActor::new(config.channel_capacity.get());
        let handle = tokio::spawn(store_actor.run());

        let ids = IdGenerator::from_strategy(config.id_strategy);
        let user_service = UserService::new(Arc::new(store_client.clone()), ids);

        info!(id_strategy = ?config.id_strategy, "Registry system started");
        Self {
            store_client,
            user_service,
            handle,
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::from(&self.user_service)
    }

    /// Drops this system's store handles and waits for the actor to finish.
    ///
    /// Any [`AppState`] handed out must be dropped first, or the actor keeps
    /// running and this waits forever.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.user_service);
        drop(self.store_client);

        if let Err(e) = self.handle.await {
            error!("Store actor failed: {:?}", e);
            return Err(format!("Store actor failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
