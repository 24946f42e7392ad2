//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running [`ResourceActor`](crate::ResourceActor). Use it
//! to test code *around* the store: how a service reacts when the store is gone, when a
//! version check fails, or when a scan returns something a live store never would.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, replies are scripted | Real records, versions, timestamps |
//! | **Error Injection** | Easy (`return_err`) | Only what the data allows |
//! | **Use Case** | Failure paths of callers | Happy paths and races |
//!
//! ## Example
//!
//! ```rust
//! use actor_store::mock::MockClient;
//! use actor_store::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug)] struct Note { id: u32 }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug)] struct NoteUpdate;
//! #[derive(Debug)] struct AllNotes;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! impl ActorEntity for Note {
//!     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
//!     type Query = AllNotes; type Error = NoteError;
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(_: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id: 1 }) }
//!     fn on_update(&mut self, _: NoteUpdate) -> Result<(), NoteError> { Ok(()) }
//!     fn matches(&self, _: &AllNotes) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate the store going away
//!     mock.expect_query().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.query(AllNotes).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For checking the *content* of requests, use [`create_mock_client`] and the `expect_*`
//! receiver helpers, which hand back the payload and the responder.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get(Result<Option<Record<T>>, FrameworkError>),
    Create(Result<Record<T>, FrameworkError>),
    Update(Result<Record<T>, FrameworkError>),
    Query(Result<Vec<Record<T>>, FrameworkError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// A request that arrives when the next expectation is of a different kind (or when none is
/// left) panics the background task; the caller then sees [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Query { respond_to, .. }, Some(Expectation::Query(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<Record<T>>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Get)
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, Record<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Create)
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, Record<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Update)
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> ExpectationBuilder<T, Vec<Record<T>>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Query)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder that queues one reply of type `R`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Use this when the test needs to look at what was sent (e.g. the expected version of an
/// update) before deciding on the reply.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    oneshot::Sender<Result<Record<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    Option<u64>,
    T::Update,
    oneshot::Sender<Result<Record<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            expected_version,
            update,
            respond_to,
        }) => Some((id, expected_version, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request.
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Query,
    oneshot::Sender<Result<Vec<Record<T>>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        hits: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        id: u32,
    }

    #[derive(Debug)]
    struct Hit;

    #[derive(Debug)]
    struct All;

    #[derive(Debug, thiserror::Error)]
    #[error("counter error")]
    struct CounterError;

    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = Hit;
        type Query = All;
        type Error = CounterError;

        fn id(&self) -> u32 {
            self.id
        }

        fn from_create_params(params: CounterCreate) -> Result<Self, CounterError> {
            Ok(Self {
                id: params.id,
                hits: 0,
            })
        }

        fn on_update(&mut self, _: Hit) -> Result<(), CounterError> {
            self.hits += 1;
            Ok(())
        }

        fn matches(&self, _: &All) -> bool {
            true
        }
    }

    fn record(id: u32) -> Record<Counter> {
        Record::new(Counter { id, hits: 0 }, Utc::now())
    }

    #[tokio::test]
    async fn test_receiver_helpers_expose_the_expected_version() {
        let (client, mut receiver) = create_mock_client::<Counter>(10);

        let task = tokio::spawn(async move { client.update(7, Some(3), Hit).await });

        let (id, expected_version, _update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, 7);
        assert_eq!(expected_version, Some(3));
        responder
            .send(Err(FrameworkError::VersionConflict {
                id: "7".into(),
                expected: 3,
                actual: 4,
            }))
            .unwrap();

        let result = task.await.unwrap();
        assert!(matches!(
            result,
            Err(FrameworkError::VersionConflict { actual: 4, .. })
        ));
    }

    #[tokio::test]
    async fn test_mock_client_replays_expectations_in_order() {
        let mut mock = MockClient::<Counter>::new();
        mock.expect_create().return_ok(record(1));
        mock.expect_query().return_ok(vec![record(1), record(2)]);
        mock.expect_get().return_ok(None);

        let client = mock.client();
        let created = client.create(CounterCreate { id: 1 }).await.unwrap();
        assert_eq!(created.entity.id, 1);
        assert_eq!(created.version, 1);

        let all = client.query(All).await.unwrap();
        assert_eq!(all.len(), 2);

        assert!(client.get(9).await.unwrap().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_mismatch_surfaces_as_dropped_channel() {
        let mut mock = MockClient::<Counter>::new();
        mock.expect_get().return_ok(None);

        let result = mock.client().query(All).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
