//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn signup_returns_user_with_generated_goal() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": "signup@example.com",
        "password": "plain-password",
        "profile": {
            "name": "Alex",
            "age": 28,
            "gender": "female",
            "weight_kg": 70.0,
            "height_cm": 175.0,
            "activity_level": "lightly_active",
            "primary_health_goal": "more energy"
        }
    });

    let (status, response) = app.post("/api/v1/auth/signup", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["email"], "signup@example.com");
    assert_eq!(response["name"], "Alex");
    // BMI ~22.9 at lightly active
    assert_eq!(response["goal"]["goal_type"], "general_health");
    assert_eq!(response["goal"]["target_calories_per_day"], 2000);
    assert!(response["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn signup_rejects_empty_email() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": "  ",
        "password": "plain-password",
        "profile": {
            "name": "Alex",
            "age": 28,
            "gender": "male",
            "weight_kg": 70.0,
            "height_cm": 175.0,
            "activity_level": "sedentary",
            "primary_health_goal": "more energy"
        }
    });

    let (status, response) = app.post("/api/v1/auth/signup", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn login_round_trip() {
    let app = common::TestApp::new().await;

    let email = "login@example.com";
    let signup = json!({
        "email": email,
        "password": "correct-password",
        "profile": {
            "name": "Sam",
            "age": 35,
            "gender": "other",
            "weight_kg": 80.0,
            "height_cm": 180.0,
            "activity_level": "very_active",
            "primary_health_goal": "endurance"
        }
    });
    let (status, _) = app.post("/api/v1/auth/signup", &signup.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let login = json!({ "email": email, "password": "correct-password" });
    let (status, response) = app.post("/api/v1/auth/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["email"], email);
    assert_eq!(response["name"], "Sam");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = common::TestApp::new().await;
    app.signup_user().await;

    let login = json!({ "email": "nobody@example.com", "password": "wrong" });
    let (status, response) = app.post("/api/v1/auth/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "UNAUTHORIZED");
}
