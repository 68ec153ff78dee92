use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use super::MessageStore;
use crate::error::{Error, Result};
use crate::models::{Message, NewMessage};

#[derive(Debug)]
struct Inner {
    messages: Vec<Message>,
    next_id: i64,
}

/// Process-local store. Contents live as long as the process does.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            inner: Mutex::new(Inner {
                messages: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| Error::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Message>> {
        let mut messages = self.lock()?.messages.clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(messages)
    }

    async fn insert(&self, new: NewMessage) -> Result<Message> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let message = new.into_message(id, Utc::now());
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.lock()?;
        let index = inner
            .messages
            .iter()
            .position(|m| m.id == id)
            .ok_or(Error::NotFound)?;
        inner.messages.remove(index);
        Ok(())
    }
}
