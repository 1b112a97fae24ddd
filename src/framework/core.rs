//! # Core Store Framework
//!
//! This module defines the generic building blocks for a single-state store actor.
//!
//! ## Key Types
//!
//! - [`StoreEntity`]: The trait the owned state must implement (its reducer).
//! - [`StoreActor`]: The task that owns the state and applies actions sequentially.
//! - [`StoreClient`]: The cloneable handle used to dispatch actions and read state.
//! - [`FrameworkError`]: Channel failures (actor closed, response dropped).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that a state type must implement to be owned by a [`StoreActor`].
///
/// # Architecture Note
/// The state is never shared. Exactly one task owns it and every mutation arrives
/// as an [`StoreEntity::Action`] message, so a transition is applied atomically
/// relative to every other dispatcher.
///
/// # Context
/// `Context` is injected into [`StoreActor::run`] and handed to every `reduce` call.
/// Use it for impure collaborators (clocks, id generators) so the reducer itself
/// stays a plain function of `(state, action, context)`.
pub trait StoreEntity: Clone + Default + Send + Sync + 'static {
    /// The closed set of transitions this state accepts.
    type Action: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Applies one action to the state.
    fn reduce(&mut self, action: Self::Action, ctx: &Self::Context);

    /// One-line summary of the state for logs (sizes, flags).
    fn describe(&self) -> String {
        String::new()
    }
}

// =============================================================================
// 2. MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the store actor.
///
/// - **Dispatch**: apply an action; the actor answers once the transition is applied.
/// - **Snapshot**: read a clone of the current state.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Dispatch {
        action: T::Action,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<T>,
    },
}

// =============================================================================
// 3. THE ACTOR
// =============================================================================

/// The actor that owns one state value.
///
/// **Concurrency Model**:
/// Requests are processed one at a time in a loop, so no `Mutex` guards the state.
/// Every applied action is published on a `watch` channel for subscribers.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    state: T,
    publisher: watch::Sender<T>,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` holding `T::default()` and its `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// dispatchers wait for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        Self::with_state(buffer_size, T::default())
    }

    /// Creates a `StoreActor` seeded with an explicit initial state.
    pub fn with_state(buffer_size: usize, state: T) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, subscriber) = watch::channel(state.clone());
        let actor = Self {
            receiver,
            state,
            publisher,
        };
        (actor, StoreClient::new(sender, subscriber))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "InventoryState")
        let state_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(state_type, ?action, "Dispatch");
                    self.state.reduce(action, &context);
                    info!(state_type, state = %self.state.describe(), "Applied");
                    self.publisher.send_replace(self.state.clone());
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(state_type, state = %self.state.describe(), "Shutdown");
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A cloneable handle for talking to a [`StoreActor`].
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
    subscriber: watch::Receiver<T>,
}

impl<T: StoreEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            subscriber: self.subscriber.clone(),
        }
    }
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>, subscriber: watch::Receiver<T>) -> Self {
        Self { sender, subscriber }
    }

    /// Sends an action and waits until the actor has applied it.
    pub async fn dispatch(&self, action: T::Action) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns a clone of the current state.
    pub async fn snapshot(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns a receiver that observes every state the actor publishes.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.subscriber.clone()
    }
}
