/// User endpoints
///
/// # Endpoints
///
/// - `POST /users` - Create a user, suppressing duplicates

use crate::{
    app::AppState,
    error::{is_unique_violation, ApiResult},
    routes::AlreadyExists,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use synctask_shared::models::{
    ack::InsertAck,
    user::{CreateUser, User},
};

/// Create user endpoint
///
/// Inserts the user document and responds 201 with the insert
/// acknowledgment. A user with the same `(name, email)` pair trips the
/// store's unique index and is reported as 200 "Already exists",
/// success-shaped rather than an error. Extra body fields are stored
/// verbatim.
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com"
/// }
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: store failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> ApiResult<Response> {
    tracing::debug!(name = %body.name, email = %body.email, "Creating user");

    match User::create(&state.db, body).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(InsertAck::new(user.id))).into_response()),
        Err(err) if is_unique_violation(&err) => {
            tracing::debug!("User already exists");
            Ok((StatusCode::OK, Json(AlreadyExists::default())).into_response())
        }
        Err(err) => Err(err.into()),
    }
}
