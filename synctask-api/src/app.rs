/// Application state and router builder
///
/// This module defines the shared application state and provides a
/// function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use synctask_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = synctask_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses
/// Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /              # Plain-text liveness string
/// ├── GET    /health        # Health check with store connectivity
/// ├── POST   /users         # Create user (duplicate-suppressed)
/// ├── POST   /tasks         # Create task (duplicate-suppressed)
/// ├── GET    /tasks/:email  # List one owner's tasks grouped by status
/// ├── PATCH  /tasks/:id     # Partial task update
/// └── DELETE /tasks/:id     # Delete task
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer; `*` in the configured origins means
///    permissive)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // The GET on /tasks takes the owner email in the same path position
    // the mutating verbs take a task id; the router needs a single
    // parameter name per segment, so all three verbs register under :id
    // and the listing handler extracts the segment as a string.
    let task_item_routes = get(routes::tasks::list_tasks_by_owner)
        .patch(routes::tasks::update_task)
        .delete(routes::tasks::delete_task);

    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/", get(routes::health::liveness))
        .route("/health", get(routes::health::health_check))
        .route("/users", post(routes::users::create_user))
        .route("/tasks", post(routes::tasks::create_task))
        .route("/tasks/:id", task_item_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
