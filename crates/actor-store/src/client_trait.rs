//! # ActorClient Trait
//!
//! A common interface for entity-specific store clients: implementors supply the inner
//! [`ResourceClient`] and an error mapping, and get `get` / `query` for free.
use crate::{ActorEntity, FrameworkError, Record, ResourceClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_store::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { id: u32, text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] struct AllNotes;
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Query = AllNotes;
///     type Error = NoteError;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(p: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id: p.id, text: p.text })
///     }
///     fn on_update(&mut self, _: NoteUpdate) -> Result<(), NoteError> { Ok(()) }
///     fn matches(&self, _: &AllNotes) -> bool { true }
/// }
///
/// #[derive(Debug)]
/// struct NoteStoreError(String);
/// impl From<String> for NoteStoreError {
///     fn from(s: String) -> Self { NoteStoreError(s) }
/// }
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteStoreError;
///     fn inner(&self) -> &ResourceClient<Note> { &self.inner }
///     fn map_error(e: FrameworkError) -> NoteStoreError { NoteStoreError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get() and query() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.query(AllNotes).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map store errors to the entity-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<Record<T>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Scan records matching `query`, in key order.
    #[tracing::instrument(skip(self))]
    async fn query(&self, query: T::Query) -> Result<Vec<Record<T>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().query(query).await.map_err(Self::map_error)
    }
}
