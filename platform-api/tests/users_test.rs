mod common;

use common::{unique_email, TestApp};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn register_login_directory_flow_works() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();
    let email = unique_email("flow");

    // 1. Register
    let response = client
        .post(format!("{}/user/register", app.address))
        .json(&json!({
            "email": email,
            "password": "p1-strong-enough",
            "full_name": "A",
            "id_role": 1,
            "wallet_address": "w1"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::CREATED, response.status());

    // 2. Registering the same email again loses to the unique constraint
    let response = client
        .post(format!("{}/user/register", app.address))
        .json(&json!({
            "email": email,
            "password": "another-password",
            "full_name": "B",
            "id_role": 2,
            "wallet_address": "w2"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::CONFLICT, response.status());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("DuplicateAccount"));

    // 3. Login with the correct password
    let response = client
        .post(format!("{}/user/login", app.address))
        .json(&json!({ "email": email, "password": "p1-strong-enough" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::OK, response.status());

    // 4. Wrong password and unknown user produce the identical outcome
    let wrong = client
        .post(format!("{}/user/login", app.address))
        .json(&json!({ "email": email, "password": "wrong-password" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::UNAUTHORIZED, wrong.status());
    let wrong_body: serde_json::Value = wrong.json().await.expect("Failed to parse JSON");

    let unknown = client
        .post(format!("{}/user/login", app.address))
        .json(&json!({ "email": unique_email("ghost"), "password": "p1-strong-enough" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::UNAUTHORIZED, unknown.status());
    let unknown_body: serde_json::Value = unknown.json().await.expect("Failed to parse JSON");
    assert_eq!(wrong_body["error"], unknown_body["error"]);

    // 5. Projection by id: role resolved, password hash absent
    let id = app.user_id_by_email(&email).await;
    let response = client
        .get(format!("{}/user/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(body["user"]["id_role"], 1);
    assert_eq!(body["user"]["role"], "Admin");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    // 6. Listing by role contains the user's projection
    let response = client
        .get(format!("{}/user/role/1", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let users = body["users"].as_array().expect("users should be a list");
    assert!(users.iter().any(|u| u["email"] == email.as_str()));

    app.remove_user(&email).await;
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn delete_is_not_idempotent_in_outcome() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();
    let email = unique_email("delete");

    let response = client
        .post(format!("{}/user/register", app.address))
        .json(&json!({
            "email": email,
            "password": "p1-strong-enough",
            "full_name": "To Delete",
            "id_role": 2,
            "wallet_address": "w1"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::CREATED, response.status());

    let id = app.user_id_by_email(&email).await;

    // First delete removes the row
    let response = client
        .delete(format!("{}/user/delete/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::OK, response.status());

    // Second delete reports NotFound
    let response = client
        .delete(format!("{}/user/delete/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    // And so does a lookup on the removed id
    let response = client
        .get(format!("{}/user/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn validation_rejects_bad_payloads_before_hashing() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/user/register", app.address))
        .json(&json!({
            "email": "not-an-email",
            "password": "p1-strong-enough",
            "full_name": "A",
            "id_role": 1,
            "wallet_address": "w1"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    let response = client
        .post(format!("{}/user/register", app.address))
        .json(&json!({
            "email": unique_email("short"),
            "password": "short",
            "full_name": "A",
            "id_role": 1,
            "wallet_address": "w1"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn bootstrap_seeds_canonical_roles_exactly_once() {
    // Building the application twice runs the seeding step twice.
    let first = TestApp::spawn().await;
    let second = TestApp::spawn().await;

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM roles")
        .fetch_one(second.db.pool())
        .await
        .expect("Failed to count roles");
    assert_eq!(count, 4);

    let descriptions: Vec<String> =
        sqlx::query_scalar("SELECT description FROM roles ORDER BY id ASC")
            .fetch_all(first.db.pool())
            .await
            .expect("Failed to list roles");
    assert_eq!(descriptions, ["Admin", "Auditor", "Producer", "Investor"]);
}
