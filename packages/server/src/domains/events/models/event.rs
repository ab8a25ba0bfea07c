use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::domains::events::errors::StoreError;

/// Normalized source-control activity kinds.
///
/// `PULL_REQUEST` is only produced in legacy dispatch mode, where the webhook
/// schema had no lifecycle tag. Variants are additive: the backing Postgres
/// enum grows with `ALTER TYPE action_kind ADD VALUE`, existing variants
/// never change meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "action_kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Push,
    PullRequest,
    Merge,
    PullRequestOpened,
    PullRequestReviewRequested,
    PullRequestClosed,
}

/// A normalized activity event. Built once by the classifier, stored as-is,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub request_id: String,
    pub author: String,
    pub action: ActionKind,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: DateTime<Utc>,
}

impl Event {
    pub async fn insert(&self, pool: &PgPool) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO events (request_id, author, action, from_branch, to_branch, "timestamp")
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&self.request_id)
        .bind(&self.author)
        .bind(self.action)
        .bind(&self.from_branch)
        .bind(&self.to_branch)
        .bind(self.timestamp)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Most recent events first. `id` breaks ties within a second.
    pub async fn find_recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>, StoreError> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT request_id, author, action, from_branch, to_branch, "timestamp"
            FROM events
            ORDER BY "timestamp" DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
