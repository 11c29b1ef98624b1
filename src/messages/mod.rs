use tokio::sync::oneshot;
use crate::domain::User;
use crate::error::StoreError;

/// Generic type aliases for actor communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages accepted by the user store actor. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum StoreRequest {
    Add {
        user: User,
        respond_to: ServiceResponse<(), StoreError>,
    },
    GetAll {
        respond_to: ServiceResponse<Vec<User>, StoreError>,
    },
    #[cfg(test)]
    Count {
        respond_to: ServiceResponse<usize, StoreError>,
    },
}
