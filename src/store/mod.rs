use std::future::Future;

use crate::error::{Error, Result};
use crate::models::{CreateMessagePayload, Message, NewMessage};
use crate::validate;

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Storage backend for message records.
///
/// Implementations assign ids from a counter that never goes backwards and
/// stamp `created_at` when the record is inserted.
pub trait MessageStore {
    /// All messages, newest `created_at` first. Ties put the higher id first.
    fn list(&self) -> impl Future<Output = Result<Vec<Message>>>;

    fn insert(&self, new: NewMessage) -> impl Future<Output = Result<Message>>;

    /// Fails with [`Error::NotFound`](crate::error::Error::NotFound) when no record has `id`.
    fn delete(&self, id: i64) -> impl Future<Output = Result<()>>;

    /// Validates the payload and stores it, returning the new id. Nothing is
    /// stored when validation fails.
    fn create(&self, payload: &CreateMessagePayload) -> impl Future<Output = Result<i64>> {
        let validated = validate::new_message(payload);
        async move {
            let message = self.insert(validated?).await?;
            Ok::<_, Error>(message.id)
        }
    }
}
