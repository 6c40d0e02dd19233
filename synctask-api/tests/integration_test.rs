/// Integration tests for the SyncTask API
///
/// These verify the full CRUD contract end-to-end:
/// - Duplicate suppression on user and task creation
/// - Board listing partitioned across the three status buckets
/// - Partial update moving a task between buckets and merging extra fields
/// - Delete removing a task from subsequent listings
/// - Boundary rejection of malformed ids and unknown status values

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;
use synctask_shared::models::task::Task;
use synctask_shared::models::user::User;
use tower::Service as _;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_user_suppresses_duplicate() {
    let mut ctx = TestContext::new().await.unwrap();
    let email = common::unique_email();

    let body = json!({"name": "Jane", "email": email, "avatar": "none"});

    let response = ctx
        .app
        .call(common::json_request("POST", "/users", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let ack = common::body_json(response).await;
    assert_eq!(ack["acknowledged"], true);
    assert!(ack["insertedId"].is_string());

    // Identical (name, email) pair: success-shaped duplicate report
    let response = ctx
        .app
        .call(common::json_request("POST", "/users", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let dup = common::body_json(response).await;
    assert_eq!(dup["message"], "Already exists");

    assert_eq!(
        User::count_by_identity(&ctx.db, "Jane", &email)
            .await
            .unwrap(),
        1
    );

    ctx.cleanup_owner(&email).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_task_suppresses_duplicate() {
    let mut ctx = TestContext::new().await.unwrap();
    let email = common::unique_email();

    let body = json!({
        "task_title": "A",
        "description": "B",
        "added_by_email": email,
        "status": "to-do"
    });

    let response = ctx
        .app
        .call(common::json_request("POST", "/tasks", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = ctx
        .app
        .call(common::json_request("POST", "/tasks", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let dup = common::body_json(response).await;
    assert_eq!(dup["message"], "Already exists");

    let board = common::body_json(
        ctx.app
            .call(common::empty_request("GET", &format!("/tasks/{}", email)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(board["toDo"].as_array().unwrap().len(), 1);

    ctx.cleanup_owner(&email).await.unwrap();
}

/// The concrete scenario from the contract: create, list, move across
/// buckets via patch, delete, list empty.
#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_board_lifecycle() {
    let mut ctx = TestContext::new().await.unwrap();
    let email = common::unique_email();

    let response = ctx
        .app
        .call(common::json_request(
            "POST",
            "/tasks",
            json!({
                "task_title": "A",
                "description": "B",
                "added_by_email": email,
                "status": "to-do"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let ack = common::body_json(response).await;
    let task_id = ack["insertedId"].as_str().unwrap().to_string();

    // Task lands in the to-do bucket, the others stay empty
    let board = common::body_json(
        ctx.app
            .call(common::empty_request("GET", &format!("/tasks/{}", email)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(board["toDo"].as_array().unwrap().len(), 1);
    assert_eq!(board["onGoing"].as_array().unwrap().len(), 0);
    assert_eq!(board["completed"].as_array().unwrap().len(), 0);
    assert_eq!(board["toDo"][0]["task_title"], "A");

    // Move to completed
    let response = ctx
        .app
        .call(common::json_request(
            "PATCH",
            &format!("/tasks/{}", task_id),
            json!({"status": "completed"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack = common::body_json(response).await;
    assert_eq!(ack["matchedCount"], 1);
    assert_eq!(ack["modifiedCount"], 1);

    let board = common::body_json(
        ctx.app
            .call(common::empty_request("GET", &format!("/tasks/{}", email)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(board["toDo"].as_array().unwrap().len(), 0);
    assert_eq!(board["completed"].as_array().unwrap().len(), 1);

    // Delete acknowledges with a 203
    let response = ctx
        .app
        .call(common::empty_request(
            "DELETE",
            &format!("/tasks/{}", task_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NON_AUTHORITATIVE_INFORMATION);
    let ack = common::body_json(response).await;
    assert_eq!(ack["deletedCount"], 1);

    let board = common::body_json(
        ctx.app
            .call(common::empty_request("GET", &format!("/tasks/{}", email)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(board["toDo"].as_array().unwrap().len(), 0);
    assert_eq!(board["onGoing"].as_array().unwrap().len(), 0);
    assert_eq!(board["completed"].as_array().unwrap().len(), 0);

    ctx.cleanup_owner(&email).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_patch_merges_extra_fields() {
    let mut ctx = TestContext::new().await.unwrap();
    let email = common::unique_email();

    let response = ctx
        .app
        .call(common::json_request(
            "POST",
            "/tasks",
            json!({
                "task_title": "A",
                "description": "B",
                "added_by_email": email,
                "status": "to-do",
                "order": 1
            }),
        ))
        .await
        .unwrap();
    let ack = common::body_json(response).await;
    let task_id: Uuid = ack["insertedId"].as_str().unwrap().parse().unwrap();

    // Patch only unknown fields: known columns stay untouched, the
    // stored document gains the new keys
    let response = ctx
        .app
        .call(common::json_request(
            "PATCH",
            &format!("/tasks/{}", task_id),
            json!({"order": 3, "label": "urgent"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let task = Task::find_by_id(&ctx.db, task_id).await.unwrap().unwrap();
    assert_eq!(task.task_title, "A");
    assert_eq!(task.extra["order"], 3);
    assert_eq!(task.extra["label"], "urgent");

    ctx.cleanup_owner(&email).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_update_unknown_id_acknowledges_zero_rows() {
    let mut ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .call(common::json_request(
            "PATCH",
            &format!("/tasks/{}", Uuid::new_v4()),
            json!({"status": "ongoing"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ack = common::body_json(response).await;
    assert_eq!(ack["matchedCount"], 0);
    assert_eq!(ack["modifiedCount"], 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_malformed_task_id_is_rejected() {
    let mut ctx = TestContext::new().await.unwrap();

    // Rejected by the Path extractor, never reaches the store
    let response = ctx
        .app
        .call(common::json_request(
            "PATCH",
            "/tasks/not-a-uuid",
            json!({"status": "ongoing"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = ctx
        .app
        .call(common::empty_request("DELETE", "/tasks/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_unknown_status_is_rejected() {
    let mut ctx = TestContext::new().await.unwrap();
    let email = common::unique_email();

    let response = ctx
        .app
        .call(common::json_request(
            "POST",
            "/tasks",
            json!({
                "task_title": "A",
                "description": "B",
                "added_by_email": email,
                "status": "done"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_liveness_and_health() {
    let mut ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .call(common::empty_request("GET", "/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"SyncTask server is running!");

    let response = ctx
        .app
        .call(common::empty_request("GET", "/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let health = common::body_json(response).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "connected");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_user_missing_field_is_rejected() {
    let mut ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .call(common::json_request(
            "POST",
            "/users",
            json!({"name": "No Email"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
