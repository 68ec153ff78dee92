use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#ffeb3b";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
pub struct Message {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/messages`. Every field is optional at the wire level so
/// that missing fields are reported by the validator rather than by serde.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessagePayload {
    pub author: Option<String>,
    pub message: Option<String>,
    pub color: Option<String>,
}

/// A message that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub author: String,
    pub message: String,
    pub color: String,
}

impl NewMessage {
    pub(crate) fn into_message(self, id: i64, created_at: DateTime<Utc>) -> Message {
        Message {
            id,
            author: self.author,
            message: self.message,
            color: self.color,
            created_at,
        }
    }
}
