/// Common test utilities for integration tests
///
/// These tests drive the real router against a running PostgreSQL
/// pointed at by `DATABASE_URL`, so they are `#[ignore]`d by default:
///
/// ```bash
/// cargo test -p synctask-api -- --ignored
/// ```

use axum::body::Body;
use axum::http::Request;
use sqlx::PgPool;
use synctask_api::app::{build_router, AppState};
use synctask_api::config::Config;
use uuid::Uuid;

/// Test context containing the pool and the assembled router
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Connects, applies migrations, and builds the app
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Path relative to this crate's Cargo.toml
        sqlx::migrate!("../migrations").run(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Deletes all documents owned by the given test email
    pub async fn cleanup_owner(&self, email: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM tasks WHERE added_by_email = $1")
            .bind(email)
            .execute(&self.db)
            .await?;
        sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

/// Fresh owner email per test so concurrent runs don't collide
pub fn unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

/// Builds a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
