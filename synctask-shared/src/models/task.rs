/// Task model and database operations
///
/// Tasks belong to a user through `added_by_email` (unenforced foreign
/// key) and sit in one of three status buckets. Any caller-supplied
/// fields outside the known set (ordering hints, labels, ...) are kept
/// verbatim in the `extra` JSONB column and flattened back out on reads.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     task_title TEXT NOT NULL,
///     description TEXT NOT NULL,
///     added_by_email TEXT NOT NULL,
///     status TEXT NOT NULL DEFAULT 'to-do',
///     extra JSONB NOT NULL DEFAULT '{}',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
///
/// CREATE UNIQUE INDEX tasks_title_description_owner_key
///     ON tasks (task_title, description, added_by_email);
/// ```
///
/// The unique index over the `(task_title, description, added_by_email)`
/// triple is the duplicate-task check; creation never pre-reads.
///
/// # Example
///
/// ```no_run
/// use synctask_shared::models::task::{CreateTask, Task, TaskStatus};
/// use synctask_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     task_title: "Write report".to_string(),
///     description: "Q3 numbers".to_string(),
///     added_by_email: "jane@example.com".to_string(),
///     status: TaskStatus::ToDo,
///     extra: Default::default(),
/// }).await?;
///
/// let board = Task::list_by_owner_and_status(&pool, "jane@example.com", TaskStatus::ToDo).await?;
/// assert!(board.iter().any(|t| t.id == task.id));
/// # Ok(())
/// # }
/// ```

use crate::models::ack::{DeleteAck, UpdateAck};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// Task status bucket
///
/// The wire spelling is `to-do` / `ongoing` / `completed`; anything else
/// is rejected at the API boundary before reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "to-do")]
    ToDo,

    #[serde(rename = "ongoing")]
    Ongoing,

    #[serde(rename = "completed")]
    Completed,
}

/// Error for an unrecognized status string
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

impl TaskStatus {
    /// Converts the status to its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to-do",
            TaskStatus::Ongoing => "ongoing",
            TaskStatus::Completed => "completed",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-do" => Ok(TaskStatus::ToDo),
            "ongoing" => Ok(TaskStatus::Ongoing),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Task document
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Store-generated identifier
    pub id: Uuid,

    pub task_title: String,

    pub description: String,

    /// Email of the owning user (unenforced foreign key)
    pub added_by_email: String,

    /// Current status bucket
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,

    /// Caller-supplied fields outside the known set, flattened on the wire
    #[serde(flatten)]
    pub extra: JsonValue,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub task_title: String,

    pub description: String,

    pub added_by_email: String,

    pub status: TaskStatus,

    /// Unknown body fields, stored verbatim
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Input for a partial task update
///
/// Only present fields are written. Unknown body fields are merged into
/// the `extra` column, leaving previously stored keys untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub task_title: Option<String>,

    pub description: Option<String>,

    pub added_by_email: Option<String>,

    pub status: Option<TaskStatus>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Task {
    /// Inserts a new task document
    ///
    /// # Errors
    ///
    /// Returns an error if the `(task_title, description, added_by_email)`
    /// triple already exists (unique violation) or the database operation
    /// fails.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (task_title, description, added_by_email, status, extra)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, task_title, description, added_by_email, status, extra,
                      created_at, updated_at
            "#,
        )
        .bind(data.task_title)
        .bind(data.description)
        .bind(data.added_by_email)
        .bind(data.status.as_str())
        .bind(JsonValue::Object(data.extra))
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, task_title, description, added_by_email, status, extra,
                   created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists one owner's tasks in one status bucket
    ///
    /// The board view issues this once per status. Unbounded result size.
    pub async fn list_by_owner_and_status(
        pool: &PgPool,
        email: &str,
        status: TaskStatus,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, task_title, description, added_by_email, status, extra,
                   created_at, updated_at
            FROM tasks
            WHERE added_by_email = $1 AND status = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(email)
        .bind(status.as_str())
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Applies a field-level merge update to the task with the given ID
    ///
    /// No existence pre-check: an unknown ID yields an acknowledgment
    /// with zero counts, not an error.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateTask,
    ) -> Result<UpdateAck, sqlx::Error> {
        // Build the SET list from whichever fields are present
        let mut query = String::from("UPDATE tasks SET updated_at = NOW()");
        let mut bind_count = 1;
        let has_extra = !data.extra.is_empty();

        if data.task_title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", task_title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.added_by_email.is_some() {
            bind_count += 1;
            query.push_str(&format!(", added_by_email = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }
        if has_extra {
            bind_count += 1;
            // JSONB concatenation keeps stored keys the patch doesn't name
            query.push_str(&format!(", extra = extra || ${}", bind_count));
        }

        query.push_str(" WHERE id = $1");

        let mut q = sqlx::query(&query).bind(id);

        if let Some(task_title) = data.task_title {
            q = q.bind(task_title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(added_by_email) = data.added_by_email {
            q = q.bind(added_by_email);
        }
        if let Some(status) = data.status {
            q = q.bind(status.as_str());
        }
        if has_extra {
            q = q.bind(JsonValue::Object(data.extra));
        }

        let result = q.execute(pool).await?;

        Ok(UpdateAck::new(result.rows_affected()))
    }

    /// Removes the task with the given ID
    ///
    /// No existence check; deleting an unknown ID acknowledges zero rows.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<DeleteAck, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(DeleteAck::new(result.rows_affected()))
    }
}
