//! Request log repository.
//!
//! One row per answered comment: body, url and the reply that was posted.
//! Rows are never updated or deleted.

use super::DbError;
use sqlx::SqlitePool;

/// A logged request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedRequest {
    pub id: i64,
    pub comment: String,
    pub url: String,
    pub response: String,
    pub logged_at: i64,
}

/// Repository for request log operations.
pub struct RequestLogRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RequestLogRepository<'a> {
    /// Create a new request log repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a request, returning its row id.
    pub async fn append(&self, comment: &str, url: &str, response: &str) -> Result<i64, DbError> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO request_log (comment, url, response, logged_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(comment)
        .bind(url)
        .bind(response)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Most recent requests, newest first.
    pub async fn recent(&self, limit: u32) -> Result<Vec<LoggedRequest>, DbError> {
        let rows = sqlx::query_as::<_, (i64, String, String, String, i64)>(
            r#"
            SELECT id, comment, url, response, logged_at
            FROM request_log
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, comment, url, response, logged_at)| LoggedRequest {
                id,
                comment,
                url,
                response,
                logged_at,
            })
            .collect())
    }

    /// Total number of logged requests.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM request_log")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
