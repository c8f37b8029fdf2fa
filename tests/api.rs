//! End-to-end tests against the router, one in-memory database per test.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use brooder::api;
use brooder::storage::LocalBlobStore;
use brooder_core::db::{seed, Database};

fn server() -> (TestServer, tempfile::TempDir) {
    let db = Database::open_memory().unwrap();
    db.migrate().unwrap();
    seed::load_catalog(&db).unwrap();

    let media = tempfile::tempdir().unwrap();
    let storage = Arc::new(LocalBlobStore::new(media.path()));
    let server = TestServer::new(api::create_router(db, storage)).unwrap();
    (server, media)
}

#[tokio::test]
async fn rejects_requests_without_user_header() {
    let (server, _media) = server();

    let response = server.get("/api/flocks").await;
    assert_eq!(response.status_code(), 401);

    let response = server.post("/api/flocks").json(&json!({})).await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn creates_and_lists_flocks_per_user() {
    let (server, _media) = server();

    let response = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({}))
        .await;
    assert_eq!(response.status_code(), 201);
    let flock: Value = response.json();
    assert_eq!(flock["name"], "My Flock");
    assert_eq!(flock["status"], "preparing");
    assert_eq!(flock["current_week"], 0);

    let listed: Value = server
        .get("/api/flocks")
        .add_header("x-user-id", "alice")
        .await
        .json();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let empty: Value = server
        .get("/api/flocks")
        .add_header("x-user-id", "bob")
        .await
        .json();
    assert!(empty.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn hides_missing_flocks_and_blocks_foreign_ones() {
    let (server, _media) = server();

    let response = server
        .get("/api/flocks/00000000-0000-0000-0000-000000000000")
        .add_header("x-user-id", "alice")
        .await;
    assert_eq!(response.status_code(), 404);

    let flock: Value = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({}))
        .await
        .json();
    let flock_id = flock["id"].as_str().unwrap().to_string();

    let response = server
        .get(&format!("/api/flocks/{flock_id}"))
        .add_header("x-user-id", "mallory")
        .await;
    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn start_action_is_one_way() {
    let (server, _media) = server();

    let flock: Value = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({}))
        .await
        .json();
    let flock_id = flock["id"].as_str().unwrap().to_string();

    let response = server
        .patch(&format!("/api/flocks/{flock_id}"))
        .add_header("x-user-id", "alice")
        .json(&json!({"action": "start"}))
        .await;
    assert_eq!(response.status_code(), 200);
    let started: Value = response.json();
    assert_eq!(started["status"], "active");
    assert_eq!(started["current_week"], 1);

    let response = server
        .patch(&format!("/api/flocks/{flock_id}"))
        .add_header("x-user-id", "alice")
        .json(&json!({"action": "start"}))
        .await;
    assert_eq!(response.status_code(), 409);

    let response = server
        .patch(&format!("/api/flocks/{flock_id}"))
        .add_header("x-user-id", "alice")
        .json(&json!({"action": "launch"}))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn week_view_overlays_todays_completions() {
    let (server, _media) = server();

    let flock: Value = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({"start_date": chrono::Utc::now()}))
        .await
        .json();
    let flock_id = flock["id"].as_str().unwrap().to_string();

    let view: Value = server
        .get(&format!("/api/flocks/{flock_id}/tasks"))
        .add_header("x-user-id", "alice")
        .await
        .json();
    assert_eq!(view["current_week"], 1);
    assert_eq!(view["recommended_temp_f"], 95);
    let tasks = view["tasks"].as_array().unwrap();
    assert!(!tasks.is_empty());
    assert!(tasks.iter().all(|t| t["is_completed"] == false));
    let task_id = tasks[0]["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/flocks/{flock_id}/completions"))
        .add_header("x-user-id", "alice")
        .json(&json!({"task_id": task_id}))
        .await;
    assert_eq!(response.status_code(), 201);

    let view: Value = server
        .get(&format!("/api/flocks/{flock_id}/tasks"))
        .add_header("x-user-id", "alice")
        .await
        .json();
    let entry = view["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == task_id.as_str())
        .unwrap();
    assert_eq!(entry["is_completed"], true);
}

#[tokio::test]
async fn undo_without_a_completion_is_not_found() {
    let (server, _media) = server();

    let flock: Value = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({"start_date": chrono::Utc::now()}))
        .await
        .json();
    let flock_id = flock["id"].as_str().unwrap().to_string();

    let view: Value = server
        .get(&format!("/api/flocks/{flock_id}/tasks"))
        .add_header("x-user-id", "alice")
        .await
        .json();
    let task_id = view["tasks"][0]["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/flocks/{flock_id}/completions"))
        .add_header("x-user-id", "alice")
        .json(&json!({"task_id": task_id, "action": "undo"}))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn completion_history_includes_stats() {
    let (server, _media) = server();

    let flock: Value = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({"start_date": chrono::Utc::now()}))
        .await
        .json();
    let flock_id = flock["id"].as_str().unwrap().to_string();

    let view: Value = server
        .get(&format!("/api/flocks/{flock_id}/tasks"))
        .add_header("x-user-id", "alice")
        .await
        .json();
    let task_id = view["tasks"][0]["id"].as_str().unwrap().to_string();

    server
        .post(&format!("/api/flocks/{flock_id}/completions"))
        .add_header("x-user-id", "alice")
        .json(&json!({"task_id": task_id, "notes": "all chicks drinking"}))
        .await;

    let history: Value = server
        .get(&format!("/api/flocks/{flock_id}/completions"))
        .add_header("x-user-id", "alice")
        .await
        .json();
    assert_eq!(history["completions"].as_array().unwrap().len(), 1);
    assert_eq!(history["completions"][0]["notes"], "all chicks drinking");
    assert_eq!(history["stats"]["total_completed"], 1);

    // The flock detail view carries the same history inline.
    let detail: Value = server
        .get(&format!("/api/flocks/{flock_id}"))
        .add_header("x-user-id", "alice")
        .await
        .json();
    assert_eq!(detail["task_completions"].as_array().unwrap().len(), 1);
    assert_eq!(detail["task_completions"][0]["task_id"], task_id.as_str());
}

#[tokio::test]
async fn completing_an_unknown_task_is_not_found() {
    let (server, _media) = server();

    let flock: Value = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({}))
        .await
        .json();
    let flock_id = flock["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/flocks/{flock_id}/completions"))
        .add_header("x-user-id", "alice")
        .json(&json!({"task_id": "11111111-1111-1111-1111-111111111111"}))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn chick_roster_and_notes_round_trip() {
    let (server, _media) = server();

    let flock: Value = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({}))
        .await
        .json();
    let flock_id = flock["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/flocks/{flock_id}/chicks"))
        .add_header("x-user-id", "alice")
        .json(&json!({"name": "Pepper", "breed": "Barred Rock"}))
        .await;
    assert_eq!(response.status_code(), 201);
    let chick: Value = response.json();
    let chick_id = chick["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/chicks/{chick_id}/notes"))
        .add_header("x-user-id", "alice")
        .json(&json!({"content": "first to use the perch"}))
        .await;
    assert_eq!(response.status_code(), 201);
    let note: Value = response.json();
    let note_id = note["id"].as_str().unwrap().to_string();

    let profile: Value = server
        .get(&format!("/api/chicks/{chick_id}"))
        .add_header("x-user-id", "alice")
        .await
        .json();
    assert_eq!(profile["name"], "Pepper");
    assert_eq!(profile["notes"].as_array().unwrap().len(), 1);

    let response = server
        .patch(&format!("/api/notes/{note_id}"))
        .add_header("x-user-id", "alice")
        .json(&json!({"content": "first to perch, bossy at the feeder"}))
        .await;
    assert_eq!(response.status_code(), 200);

    // A stranger can't see or edit the chick.
    let response = server
        .get(&format!("/api/chicks/{chick_id}"))
        .add_header("x-user-id", "mallory")
        .await;
    assert_eq!(response.status_code(), 403);

    let response = server
        .delete(&format!("/api/chicks/{chick_id}"))
        .add_header("x-user-id", "alice")
        .await;
    assert_eq!(response.status_code(), 200);

    let response = server
        .get(&format!("/api/chicks/{chick_id}"))
        .add_header("x-user-id", "alice")
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn deleting_a_flock_removes_its_chicks() {
    let (server, _media) = server();

    let flock: Value = server
        .post("/api/flocks")
        .add_header("x-user-id", "alice")
        .json(&json!({}))
        .await
        .json();
    let flock_id = flock["id"].as_str().unwrap().to_string();

    let chick: Value = server
        .post(&format!("/api/flocks/{flock_id}/chicks"))
        .add_header("x-user-id", "alice")
        .json(&json!({"name": "Nugget"}))
        .await
        .json();
    let chick_id = chick["id"].as_str().unwrap().to_string();

    let response = server
        .delete(&format!("/api/flocks/{flock_id}"))
        .add_header("x-user-id", "alice")
        .await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let response = server
        .get(&format!("/api/chicks/{chick_id}"))
        .add_header("x-user-id", "alice")
        .await;
    assert_eq!(response.status_code(), 404);
}
