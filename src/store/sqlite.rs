use chrono::Utc;

use super::MessageStore;
use crate::db::{self, DbPool};
use crate::error::{Error, Result};
use crate::models::{Message, NewMessage};

/// SQLite-backed store. `AUTOINCREMENT` keeps deleted ids from coming back.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> Result<SqliteStore> {
        let pool = db::connect(database_url).await?;
        Ok(SqliteStore { pool })
    }
}

impl MessageStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, author, message, color, created_at FROM messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn insert(&self, new: NewMessage) -> Result<Message> {
        let created_at = Utc::now();
        let result = sqlx::query("INSERT INTO messages (author, message, color, created_at) VALUES (?1, ?2, ?3, ?4)")
            .bind(&new.author)
            .bind(&new.message)
            .bind(&new.color)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(new.into_message(result.last_insert_rowid(), created_at))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
