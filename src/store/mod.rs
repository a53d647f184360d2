//!
//! # Store Interfaces
//!
//! The core consumes its persistence through these two traits rather than
//! talking to a database directly. Production wires in the Postgres
//! implementations from [`postgres`]; tests substitute in-memory doubles.
//! Stores supply their own atomicity: the users table carries a unique
//! constraint on `username`, which is the authoritative backstop for the
//! registration race (see [`StoreError::DuplicateUsername`]).

pub mod postgres;

use async_trait::async_trait;
use std::fmt;

use crate::models::{Credential, Task, TaskInput, TaskUpdate};

pub use postgres::{PgTaskStore, PgUserStore};

/// Errors surfaced by a store implementation.
#[derive(Debug)]
pub enum StoreError {
    /// The unique constraint on `username` rejected an insert.
    DuplicateUsername,
    /// The store could not be reached or the query failed. Not retried by
    /// the callers in this crate.
    Unavailable(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::DuplicateUsername => write!(f, "username already exists"),
            StoreError::Unavailable(e) => write!(f, "store unavailable: {}", e),
        }
    }
}

/// Lookup and creation of user credentials.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a credential by exact, case-sensitive username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError>;

    /// Insert a new credential. Fails with [`StoreError::DuplicateUsername`]
    /// when the username is already taken.
    async fn insert(&self, username: &str, password_hash: &str) -> Result<Credential, StoreError>;
}

/// Row CRUD for tasks, scoped by owner where the operation mutates.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<Task>, StoreError>;

    async fn insert(&self, owner_id: i32, input: &TaskInput) -> Result<Task, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, StoreError>;

    /// Update a task owned by `owner_id`. Returns `None` when no such row
    /// exists for that owner.
    async fn update(
        &self,
        id: i32,
        owner_id: i32,
        update: &TaskUpdate,
    ) -> Result<Option<Task>, StoreError>;

    /// Delete a task owned by `owner_id`. Returns whether a row was removed.
    async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, StoreError>;
}
