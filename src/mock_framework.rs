//! # Mock Framework
//!
//! Utilities for testing store consumers without spawning the store actor.
//!
//! Use [`create_mock_store_client`] to get a client and the receiving end of
//! its channel, then [`expect_add`] or [`expect_get_all`] to assert on the
//! request and reply to it.

use tokio::sync::{mpsc, oneshot};
use crate::clients::UserStoreClient;
use crate::domain::User;
use crate::error::StoreError;
use crate::messages::StoreRequest;

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_store_client(buffer_size: usize) -> (UserStoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (UserStoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<(User, oneshot::Sender<Result<(), StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Add { user, respond_to }) => Some((user, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetAll request
pub async fn expect_get_all(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<oneshot::Sender<Result<Vec<User>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::GetAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UserWriter;

    #[tokio::test]
    async fn test_mock_store_client() {
        let (client, mut receiver) = create_mock_store_client(10);

        let add_task = tokio::spawn(async move {
            client.add(User::new(5, "Test", "test@example.com")).await
        });

        let (user, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(user.name, "Test");
        responder.send(Ok(())).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(()));
    }
}
