//! # Actor Store
//!
//! A keyed record store that lives inside a single Tokio task.
//!
//! The store is an actor: a [`ResourceActor`] owns the records of one entity type and a
//! cloneable [`ResourceClient`] is the only way to reach them. Messages are processed one at a
//! time, so every operation, including "read the version, compare, write", is atomic with
//! respect to every other caller without a lock in sight.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its key, and its rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and bookkeeping
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async access
//!
//! ## What the store owns
//!
//! Every entity is wrapped in a [`Record`] carrying a `version` and `created_at` /
//! `updated_at`. Entities never set these themselves. Records are never physically removed:
//! retiring one is an ordinary update (e.g. flipping an `is_active` flag), which keeps the
//! history around.
//!
//! ## Example
//!
//! ```rust
//! use actor_store::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u32, open: bool }
//!
//! #[derive(Debug)] struct TicketCreate { id: u32 }
//! #[derive(Debug)] struct Close;
//! #[derive(Debug)] struct OpenTickets;
//! #[derive(Debug, thiserror::Error)] #[error("ticket already closed")] struct TicketError;
//!
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Update = Close;
//!     type Query = OpenTickets;
//!     type Error = TicketError;
//!
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(p: TicketCreate) -> Result<Self, TicketError> {
//!         Ok(Self { id: p.id, open: true })
//!     }
//!     fn on_update(&mut self, _: Close) -> Result<(), TicketError> {
//!         if !self.open { return Err(TicketError); }
//!         self.open = false;
//!         Ok(())
//!     }
//!     fn matches(&self, _: &OpenTickets) -> bool { self.open }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let created = client.create(TicketCreate { id: 7 }).await.unwrap();
//!     client.update(7, Some(created.version), Close).await.unwrap();
//!
//!     assert!(client.query(OpenTickets).await.unwrap().is_empty());
//!     assert!(client.get(7).await.unwrap().is_some());
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient), a client whose replies are
//! scripted, for exercising failure paths of code that sits on top of the store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use record::Record;
