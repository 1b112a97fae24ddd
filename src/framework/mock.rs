//! # Mock Store
//!
//! Utilities for testing code that dispatches into a store, without spawning the
//! real [`StoreActor`](crate::framework::StoreActor).
//!
//! Use [`create_mock_store`] to get a client and a receiver, then pull requests off the
//! receiver with [`expect_dispatch`] to assert which actions were sent and in what order.
//! Dropping a responder without answering simulates a store that went away mid-flight.

use crate::framework::{FrameworkError, StoreClient, StoreEntity, StoreRequest};
use tokio::sync::{mpsc, oneshot, watch};

/// Creates a mock store client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The client sends its messages to a channel the test controls. The test inspects
/// each message as it arrives and decides how the "store" answers, which makes the
/// order of lifecycle transitions fully deterministic.
pub fn create_mock_store<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, subscriber) = watch::channel(T::default());
    (StoreClient::new(sender, subscriber), receiver)
}

/// Waits for the next request and returns it if it is a Dispatch.
pub async fn expect_dispatch<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Action, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a Snapshot.
pub async fn expect_snapshot<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Answers every dispatch with `Ok(())` and collects the actions, until the
/// senders are dropped.
pub async fn collect_dispatches<T: StoreEntity>(
    mut receiver: mpsc::Receiver<StoreRequest<T>>,
) -> Vec<T::Action> {
    let mut actions = Vec::new();
    while let Some(request) = receiver.recv().await {
        match request {
            StoreRequest::Dispatch { action, respond_to } => {
                actions.push(action);
                let _ = respond_to.send(Ok(()));
            }
            StoreRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(T::default()));
            }
        }
    }
    actions
}
