//! # Stored Records
//!
//! The envelope the store keeps around every entity.

use chrono::{DateTime, Utc};

/// An entity together with the bookkeeping the store owns.
///
/// `version` starts at 1 and is bumped on every successful update; it is the token callers
/// hand back to [`ResourceClient::update`](crate::ResourceClient::update) for compare-and-swap.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    pub entity: T,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T> Record<T> {
    pub(crate) fn new(entity: T, now: DateTime<Utc>) -> Self {
        Self {
            entity,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.version += 1;
        self.updated_at = now;
    }
}
