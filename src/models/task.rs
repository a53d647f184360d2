use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A to-do item as stored in the database and returned by the API.
///
/// `owner_id` references the user who created the task; every mutation is
/// gated on the acting identity matching it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub owner_id: i32,
}

/// Input payload for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Maximum length of 1000 characters.
    #[validate(length(max = 1000))]
    pub description: String,
}

/// Input payload for a full task update: the creation fields plus the
/// completion flag, which defaults to false when omitted.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 1000))]
    pub description: String,

    #[serde(default)]
    pub done: bool,
}
