//! In-memory store doubles for the integration tests, so the full HTTP
//! flow runs without a live database.

use async_trait::async_trait;
use jsonwebtoken::Algorithm;
use std::sync::Mutex;

use taskdeck::auth::TokenCodec;
use taskdeck::models::{Credential, Task, TaskInput, TaskUpdate};
use taskdeck::store::{StoreError, TaskStore, UserStore};

pub fn test_codec() -> TokenCodec {
    TokenCodec::with_secret("integration-test-secret", Algorithm::HS256, 30)
}

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<Credential>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.username == username).cloned())
    }

    async fn insert(&self, username: &str, password_hash: &str) -> Result<Credential, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        // Same uniqueness guarantee the real table's constraint provides.
        if rows.iter().any(|c| c.username == username) {
            return Err(StoreError::DuplicateUsername);
        }
        let credential = Credential {
            id: rows.len() as i32 + 1,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        rows.push(credential.clone());
        Ok(credential)
    }
}

#[derive(Default)]
struct TaskRows {
    rows: Vec<Task>,
    next_id: i32,
}

#[derive(Default)]
pub struct MemoryTaskStore {
    inner: Mutex<TaskRows>,
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<Task>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, owner_id: i32, input: &TaskInput) -> Result<Task, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let task = Task {
            id: inner.next_id,
            title: input.title.clone(),
            description: input.description.clone(),
            done: false,
            owner_id,
        };
        inner.rows.push(task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|t| t.id == id).cloned())
    }

    async fn update(
        &self,
        id: i32,
        owner_id: i32,
        update: &TaskUpdate,
    ) -> Result<Option<Task>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner
            .rows
            .iter_mut()
            .find(|t| t.id == id && t.owner_id == owner_id)
        {
            Some(task) => {
                task.title = update.title.clone();
                task.description = update.description.clone();
                task.done = update.done;
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|t| !(t.id == id && t.owner_id == owner_id));
        Ok(inner.rows.len() < before)
    }
}
