//! # ActorEntity Trait
//!
//! The contract a record type must satisfy to be kept by a [`ResourceActor`](crate::ResourceActor).
//!
//! Unlike a general-purpose actor, the store never invents identifiers: every entity carries its
//! own key (`id()`), which is how externally keyed records such as order items (keyed by the
//! order they belong to) are stored. The store wraps each entity in a
//! [`Record`](crate::Record) that owns the version counter and the timestamps, so entity code
//! only describes the business state.
//!
//! # Associated Types
//! - `Id`: primary key. `Ord` so scans come back in a stable order.
//! - `Create`: the payload accepted by `create`.
//! - `Update`: the mutation accepted by `update`.
//! - `Query`: a filter evaluated against every stored entity during a scan.

use std::fmt::{Debug, Display};

/// Trait that any stored entity must implement to be managed by `ResourceActor`.
///
/// Hooks are synchronous: the store owns no remote dependencies, so anything that needs a
/// network round trip happens in the caller before the message is sent.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The primary key of the entity.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The mutation applied by `update`.
    type Update: Send + Sync + Debug;

    /// Filter used by `query` scans.
    type Query: Send + Sync + Debug;

    /// The error type for entity-level rule violations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key this entity is stored under.
    fn id(&self) -> Self::Id;

    /// Construct the entity from its creation payload, enforcing creation invariants.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply a mutation in place. Returning an error leaves the stored record untouched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether this entity is selected by `query`.
    fn matches(&self, query: &Self::Query) -> bool;
}
