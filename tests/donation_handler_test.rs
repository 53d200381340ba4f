mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn donation(user_id: &str, amount: f64) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "name": "Test User Alumni",
        "email": "donor@test.com",
        "phone": "(555) 123-4567",
        "amount": amount,
        "purpose": "Scholarship Fund",
        "message": "Happy to contribute!"
    })
}

#[tokio::test]
async fn test_donation_is_copied_to_user() {
    let app = TestApp::new();
    let user = app.register("donor@test.com").await;
    let user_id = user["id"].as_str().unwrap();

    let (status, created) = app.post("/api/donate", donation(user_id, 100.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["amount"], 100.0);
    assert_eq!(created["purpose"], "Scholarship Fund");

    let (status, second) = app.post("/api/donate", donation(user_id, 25.5)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = app.get(&format!("/api/user/{user_id}")).await;
    let history = fetched["donations"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], created);
    assert_eq!(history[1], second);
}

#[tokio::test]
async fn test_donation_without_matching_user() {
    let app = TestApp::new();
    let (status, created) = app.post("/api/donate", donation("nobody", 10.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["user_id"], "nobody");
    assert_eq!(app.donations.donations.lock().unwrap().len(), 1);

    let (_, stats) = app.get("/api/stats").await;
    assert_eq!(stats["recent_donations"], 1);
}

#[tokio::test]
async fn test_donation_message_is_optional() {
    let app = TestApp::new();
    let mut body = donation("u", 5.0);
    body.as_object_mut().unwrap().remove("message");
    let (status, created) = app.post("/api/donate", body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["message"].is_null());
}

#[tokio::test]
async fn test_negative_amount_rejected_even_though_any_float_decodes() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/donate", donation("u", -1.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
    assert!(app.donations.donations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_amount_is_accepted() {
    let app = TestApp::new();
    let (status, created) = app.post("/api/donate", donation("u", 0.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["amount"], 0.0);
}
