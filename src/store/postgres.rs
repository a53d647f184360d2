use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Credential, Task, TaskInput, TaskUpdate};
use crate::store::{StoreError, TaskStore, UserStore};

// Postgres unique_violation, raised by the unique index on users.username.
const UNIQUE_VIOLATION: &str = "23505";

fn map_insert_error(error: sqlx::Error) -> StoreError {
    let is_duplicate = error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false);

    if is_duplicate {
        StoreError::DuplicateUsername
    } else {
        StoreError::Unavailable(error)
    }
}

/// `UserStore` backed by the `users` table.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        sqlx::query_as::<_, Credential>(
            "SELECT id, username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Unavailable)
    }

    async fn insert(&self, username: &str, password_hash: &str) -> Result<Credential, StoreError> {
        sqlx::query_as::<_, Credential>(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2)
             RETURNING id, username, password_hash",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }
}

/// `TaskStore` backed by the `tasks` table.
#[derive(Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<Task>, StoreError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, done, owner_id FROM tasks
             WHERE owner_id = $1 ORDER BY id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Unavailable)
    }

    async fn insert(&self, owner_id: i32, input: &TaskInput) -> Result<Task, StoreError> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, description, owner_id) VALUES ($1, $2, $3)
             RETURNING id, title, description, done, owner_id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::Unavailable)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, StoreError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, done, owner_id FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Unavailable)
    }

    async fn update(
        &self,
        id: i32,
        owner_id: i32,
        update: &TaskUpdate,
    ) -> Result<Option<Task>, StoreError> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = $1, description = $2, done = $3
             WHERE id = $4 AND owner_id = $5
             RETURNING id, title, description, done, owner_id",
        )
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.done)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Unavailable)
    }

    async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Unavailable)?;

        Ok(result.rows_affected() > 0)
    }
}
