use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fleet_core::models::Role;
use fleet_core::token::Claims;

use crate::common::{
    ADMIN_EMAIL, ADMIN_PASSWORD, EDITOR_EMAIL, TEST_JWT_SECRET, setup_test_app, token_for,
};

#[tokio::test]
async fn login_returns_usable_token() {
    let app = setup_test_app().await;

    let body = serde_json::json!({
        "email": ADMIN_EMAIL,
        "password": ADMIN_PASSWORD,
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/administrators/login")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["email"], ADMIN_EMAIL);
    assert_eq!(json["profile"], "Admin");
    let token = json["token"].as_str().unwrap();

    // The returned token must open a protected route.
    let response = app
        .oneshot(
            Request::get("/vehicles")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let app = setup_test_app().await;

    let body = serde_json::json!({
        "email": ADMIN_EMAIL,
        "password": "not-the-password",
    });

    let response = app
        .oneshot(
            Request::post("/administrators/login")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_unknown_email_returns_401() {
    let app = setup_test_app().await;

    let body = serde_json::json!({
        "email": "nobody@test.com",
        "password": ADMIN_PASSWORD,
    });

    let response = app
        .oneshot(
            Request::post("/administrators/login")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "unauthorized");
}

#[tokio::test]
async fn missing_token_returns_401() {
    let app = setup_test_app().await;

    let response = app
        .oneshot(Request::get("/vehicles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_wrong_secret_returns_401() {
    let app = setup_test_app().await;

    let forged = fleet_core::token::issue(ADMIN_EMAIL, Role::Admin, "attacker-secret").unwrap();

    let response = app
        .oneshot(
            Request::get("/vehicles")
                .header("authorization", format!("Bearer {forged}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_returns_401() {
    let app = setup_test_app().await;

    // Hand-craft a token whose lifetime (plus clock leeway) has fully elapsed.
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: ADMIN_EMAIL.to_string(),
        profile: Role::Admin,
        iat: now - 4 * 3600,
        exp: now - 2 * 3600,
    };
    let expired = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app
        .oneshot(
            Request::get("/vehicles")
                .header("authorization", format!("Bearer {expired}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn editor_can_create_and_read_vehicles() {
    let app = setup_test_app().await;
    let token = token_for(Role::Editor);

    let body = serde_json::json!({
        "name": "Panda",
        "brand": "Fiat",
        "year": 2020,
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/vehicles")
                .header("authorization", format!("Bearer {token}"))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let id = json["id"].as_str().unwrap();

    let response = app
        .oneshot(
            Request::get(format!("/vehicles/{id}"))
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn editor_cannot_list_vehicles() {
    let app = setup_test_app().await;
    let token = token_for(Role::Editor);

    let response = app
        .oneshot(
            Request::get("/vehicles")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "forbidden");
    assert_eq!(json["message"], "Insufficient role for this route");
}

#[tokio::test]
async fn editor_cannot_delete_or_manage_administrators() {
    let app = setup_test_app().await;
    let token = token_for(Role::Editor);

    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/vehicles/{}", uuid::Uuid::new_v4()))
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(
            Request::get("/administrators")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn editor_login_reports_editor_profile() {
    let app = setup_test_app().await;

    let body = serde_json::json!({
        "email": EDITOR_EMAIL,
        "password": crate::common::EDITOR_PASSWORD,
    });

    let response = app
        .oneshot(
            Request::post("/administrators/login")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["profile"], "Editor");
}
