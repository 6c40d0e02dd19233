/// Task endpoints
///
/// # Endpoints
///
/// - `POST /tasks` - Create a task, suppressing duplicates
/// - `GET /tasks/:email` - List one owner's tasks grouped by status
/// - `PATCH /tasks/:id` - Partial task update
/// - `DELETE /tasks/:id` - Delete a task

use crate::{
    app::AppState,
    error::{is_unique_violation, ApiResult},
    routes::AlreadyExists,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use synctask_shared::models::{
    ack::{DeleteAck, InsertAck, UpdateAck},
    task::{CreateTask, Task, TaskStatus, UpdateTask},
};
use uuid::Uuid;

/// Board view of one owner's tasks
///
/// Every task whose `status` is one of the three known values appears in
/// exactly one bucket. Key spelling is part of the wire contract.
#[derive(Debug, Serialize)]
pub struct TaskBoardResponse {
    #[serde(rename = "toDo")]
    pub to_do: Vec<Task>,

    #[serde(rename = "onGoing")]
    pub on_going: Vec<Task>,

    pub completed: Vec<Task>,
}

/// List tasks by owner
///
/// Issues three independent filtered queries, one per status bucket,
/// each matching `added_by_email` and `status` exactly. No pagination.
///
/// # Endpoint
///
/// ```text
/// GET /tasks/jane@example.com
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: store failure
pub async fn list_tasks_by_owner(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<TaskBoardResponse>> {
    tracing::debug!(owner = %email, "Listing tasks");

    let to_do = Task::list_by_owner_and_status(&state.db, &email, TaskStatus::ToDo).await?;
    let on_going = Task::list_by_owner_and_status(&state.db, &email, TaskStatus::Ongoing).await?;
    let completed =
        Task::list_by_owner_and_status(&state.db, &email, TaskStatus::Completed).await?;

    Ok(Json(TaskBoardResponse {
        to_do,
        on_going,
        completed,
    }))
}

/// Create task endpoint
///
/// Inserts the task document and responds 201 with the insert
/// acknowledgment. A task sharing the
/// `(task_title, description, added_by_email)` triple with a stored one
/// trips the unique index and is reported as 200 "Already exists".
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// {
///   "task_title": "Write report",
///   "description": "Q3 numbers",
///   "added_by_email": "jane@example.com",
///   "status": "to-do"
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: unknown `status` value
/// - `500 Internal Server Error`: store failure
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTask>,
) -> ApiResult<Response> {
    tracing::debug!(title = %body.task_title, owner = %body.added_by_email, "Creating task");

    match Task::create(&state.db, body).await {
        Ok(task) => Ok((StatusCode::CREATED, Json(InsertAck::new(task.id))).into_response()),
        Err(err) if is_unique_violation(&err) => {
            tracing::debug!("Task already exists");
            Ok((StatusCode::OK, Json(AlreadyExists::default())).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Update task endpoint
///
/// Applies a field-level merge: present known fields overwrite their
/// columns, unknown body fields merge into the stored document. No
/// existence check; an unknown id acknowledges zero matched rows. A
/// malformed id is rejected by the `Path` extractor with a 400 before
/// any store call.
///
/// # Endpoint
///
/// ```text
/// PATCH /tasks/550e8400-e29b-41d4-a716-446655440000
/// Content-Type: application/json
///
/// { "status": "completed" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: malformed task id
/// - `422 Unprocessable Entity`: unknown `status` value
/// - `500 Internal Server Error`: store failure
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateTask>,
) -> ApiResult<Json<UpdateAck>> {
    tracing::debug!(task_id = %id, "Updating task");

    let ack = Task::update(&state.db, id, patch).await?;

    Ok(Json(ack))
}

/// Delete task endpoint
///
/// Removes the task by id, no existence check beforehand. Responds 203
/// with the delete acknowledgment.
///
/// # Endpoint
///
/// ```text
/// DELETE /tasks/550e8400-e29b-41d4-a716-446655440000
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: malformed task id
/// - `500 Internal Server Error`: store failure
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    tracing::debug!(task_id = %id, "Deleting task");

    let ack: DeleteAck = Task::delete(&state.db, id).await?;

    Ok((StatusCode::NON_AUTHORITATIVE_INFORMATION, Json(ack)).into_response())
}
