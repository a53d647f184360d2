use crate::{
    auth::{resolve, TokenCodec},
    error::AppError,
    models::{TaskInput, TaskUpdate},
    store::TaskStore,
};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

/// Retrieves the authenticated user's tasks.
///
/// Only rows whose `owner_id` matches the resolved identity are returned,
/// ordered by id.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the session cookie is missing or invalid.
/// - `500 Internal Server Error`: For store errors.
#[get("")]
pub async fn get_tasks(
    store: web::Data<dyn TaskStore>,
    tokens: web::Data<TokenCodec>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let identity = resolve(&req, &tokens)?;

    let tasks = store.list_for_owner(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task owned by the authenticated user.
///
/// ## Request Body:
/// A JSON object matching `TaskInput`:
/// - `title`: 1 to 200 characters (required).
/// - `description`: up to 1000 characters (required, may be empty).
///
/// The owner is always the resolved identity; a client cannot create a
/// task for someone else.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `401 Unauthorized`: If the session cookie is missing or invalid.
/// - `422 Unprocessable Entity`: If input validation fails.
/// - `500 Internal Server Error`: For store errors.
#[post("")]
pub async fn create_task(
    store: web::Data<dyn TaskStore>,
    tokens: web::Data<TokenCodec>,
    task_data: web::Json<TaskInput>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let identity = resolve(&req, &tokens)?;
    let task = store.insert(identity.user_id, &task_data).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its id.
///
/// The caller must own the task; a task owned by someone else answers
/// exactly like a missing one, so ids cannot be probed.
///
/// ## Path Parameters:
/// - `id`: The id of the task to retrieve.
///
/// ## Responses:
/// - `200 OK`: Returns the `Task` object as JSON.
/// - `401 Unauthorized`: If the session cookie is missing or invalid.
/// - `404 Not Found`: If the task does not exist or is not owned by the caller.
/// - `500 Internal Server Error`: For store errors.
#[get("/{id}")]
pub async fn get_task(
    store: web::Data<dyn TaskStore>,
    tokens: web::Data<TokenCodec>,
    task_id: web::Path<i32>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let identity = resolve(&req, &tokens)?;

    match store.find_by_id(task_id.into_inner()).await? {
        Some(task) if task.owner_id == identity.user_id => Ok(HttpResponse::Ok().json(task)),
        _ => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Updates an existing task.
///
/// Full update: title, description, and the `done` flag (defaults to
/// false when omitted). Only the owner can update a task; a task owned by
/// someone else answers exactly like a missing one.
///
/// ## Path Parameters:
/// - `id`: The id of the task to update.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task` object as JSON.
/// - `401 Unauthorized`: If the session cookie is missing or invalid.
/// - `404 Not Found`: If the task does not exist or is not owned by the caller.
/// - `422 Unprocessable Entity`: If input validation fails.
/// - `500 Internal Server Error`: For store errors.
#[put("/{id}")]
pub async fn update_task(
    store: web::Data<dyn TaskStore>,
    tokens: web::Data<TokenCodec>,
    task_id: web::Path<i32>,
    task_data: web::Json<TaskUpdate>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let identity = resolve(&req, &tokens)?;
    let task_id = task_id.into_inner();

    // The update is owner-scoped in the store; a miss covers both a
    // nonexistent row and a foreign-owned one.
    match store.update(task_id, identity.user_id, &task_data).await? {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Deletes a task by its id.
///
/// Only the owner can delete a task; a task owned by someone else answers
/// exactly like a missing one.
///
/// ## Path Parameters:
/// - `id`: The id of the task to delete.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the session cookie is missing or invalid.
/// - `404 Not Found`: If the task does not exist or is not owned by the caller.
/// - `500 Internal Server Error`: For store errors.
#[delete("/{id}")]
pub async fn delete_task(
    store: web::Data<dyn TaskStore>,
    tokens: web::Data<TokenCodec>,
    task_id: web::Path<i32>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let identity = resolve(&req, &tokens)?;

    let removed = store.delete(task_id.into_inner(), identity.user_id).await?;

    if !removed {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}
