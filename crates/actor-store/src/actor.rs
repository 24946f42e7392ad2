//! # Store Actor
//!
//! `ResourceActor` owns the records of one entity type and processes requests one at a time.
//! Because nothing else can touch the map, a read-check-write inside a single message is atomic,
//! which is what makes version-guarded updates a real compare-and-swap.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::record::Record;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that manages a collection of records.
///
/// # Concurrency Model
/// Each `ResourceActor` runs in its own Tokio task and handles its channel sequentially, so the
/// `store` needs no `Mutex`. Callers that raced on the same record are ordered by the channel.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client freely; dropping every clone stops the actor.
///
/// # Operations
///
/// * **Create**: builds the entity with `T::from_create_params`, refuses an id that is already
///   stored, inserts with version 1.
/// * **Get**: returns a clone of the record, or `None`.
/// * **Update**: checks `expected_version` when given, runs `on_update` on a copy, and only
///   commits (version + 1, fresh `updated_at`) if the hook succeeds.
/// * **Query**: returns matching records in ascending key order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, Record<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, callers wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // e.g. "OrderItem" instead of "shipping_service::model::order_item::OrderItem"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.handle_create(entity_type, params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let record = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                ResourceRequest::Update {
                    id,
                    expected_version,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?expected_version, ?update, "Update");
                    let _ = respond_to.send(self.handle_update(
                        entity_type,
                        id,
                        expected_version,
                        update,
                    ));
                }
                ResourceRequest::Query { query, respond_to } => {
                    let records: Vec<Record<T>> = self
                        .store
                        .values()
                        .filter(|record| record.entity.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, matched = records.len(), "Query");
                    let _ = respond_to.send(Ok(records));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn handle_create(
        &mut self,
        entity_type: &str,
        params: T::Create,
    ) -> Result<Record<T>, FrameworkError> {
        let entity = T::from_create_params(params).map_err(|e| {
            warn!(entity_type, error = %e, "Create rejected");
            FrameworkError::EntityError(Box::new(e))
        })?;
        let id = entity.id();
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Already exists");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }
        let record = Record::new(entity, Utc::now());
        self.store.insert(id.clone(), record.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(record)
    }

    fn handle_update(
        &mut self,
        entity_type: &str,
        id: T::Id,
        expected_version: Option<u64>,
        update: T::Update,
    ) -> Result<Record<T>, FrameworkError> {
        let Some(record) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        if let Some(expected) = expected_version {
            if record.version != expected {
                warn!(entity_type, %id, expected, actual = record.version, "Version conflict");
                return Err(FrameworkError::VersionConflict {
                    id: id.to_string(),
                    expected,
                    actual: record.version,
                });
            }
        }

        // Apply to a copy so a failing hook cannot leave a half-mutated entity behind.
        let mut entity = record.entity.clone();
        if let Err(e) = entity.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update rejected");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        record.entity = entity;
        record.touch(Utc::now());
        info!(entity_type, %id, version = record.version, "Updated");
        Ok(record.clone())
    }
}
