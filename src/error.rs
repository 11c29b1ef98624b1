use thiserror::Error;

/// Errors raised by store capability implementations.
///
/// The in-memory store itself never fails; the only failure is losing the
/// actor that owns it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

/// Errors raised by the registration services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("User store error: {0}")]
    Store(#[from] StoreError),
}
