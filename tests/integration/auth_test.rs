//! Login and protected endpoint access

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::{Value, json};
use user_auth_api::entities::v1::users::Model;
use user_auth_api::testing::{DEFAULT_PASSWORD, UserFactory};

#[actix_web::test]
async fn test_jwt_login_success() {
    let (service, db, hasher) = user_auth_api::service!();
    let client_user = UserFactory::new().create(&db, &hasher).await.unwrap();

    let req = TestRequest::post()
        .uri("/api/login/")
        .set_json(json!({
            "username": client_user.username,
            "password": DEFAULT_PASSWORD,
        }))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert!(body.get("access").is_some(), "Expected access in {}", body);
    assert!(body.get("refresh").is_some(), "Expected refresh in {}", body);
    assert_ne!(body["access"], body["refresh"]);
}

#[actix_web::test]
async fn test_protected_without_token() {
    let (service, _db, _hasher) = user_auth_api::service!();

    let req = TestRequest::get().uri("/api/protected/").to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["detail"], "Authentication credentials were not provided.");
}

#[actix_web::test]
async fn test_protected_with_token() {
    let (service, db, hasher) = user_auth_api::service!();
    let client_user = UserFactory::new().create(&db, &hasher).await.unwrap();
    let token = user_auth_api::login!(&service, client_user);

    let req = TestRequest::get()
        .uri("/api/protected/")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["username"], client_user.username.as_str());
}

#[actix_web::test]
async fn test_protected_with_wrong_scheme() {
    let (service, db, hasher) = user_auth_api::service!();
    let client_user = UserFactory::new().create(&db, &hasher).await.unwrap();
    let token = user_auth_api::login!(&service, client_user);

    let req = TestRequest::get()
        .uri("/api/protected/")
        .insert_header(("Authorization", format!("Token {}", token)))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let (service, db, hasher) = user_auth_api::service!();
    let client_user = UserFactory::new().create(&db, &hasher).await.unwrap();

    let req = TestRequest::post()
        .uri("/api/login/")
        .set_json(json!({
            "username": client_user.username,
            "password": "wrong_password",
        }))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["detail"], "No active account found with the given credentials");
    assert!(body.get("access").is_none());
}

#[actix_web::test]
async fn test_login_unknown_user() {
    let (service, _db, _hasher) = user_auth_api::service!();

    let req = TestRequest::post()
        .uri("/api/login/")
        .set_json(json!({ "username": "nobody", "password": DEFAULT_PASSWORD }))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_inactive_user() {
    let (service, db, hasher) = user_auth_api::service!();
    let inactive = UserFactory::new().inactive().create(&db, &hasher).await.unwrap();

    let req = TestRequest::post()
        .uri("/api/login/")
        .set_json(json!({ "username": inactive.username, "password": DEFAULT_PASSWORD }))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_missing_fields() {
    let (service, _db, _hasher) = user_auth_api::service!();

    let req = TestRequest::post()
        .uri("/api/login/")
        .set_json(json!({}))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["username"], json!(["This field is required."]));
    assert_eq!(body["password"], json!(["This field is required."]));
}

#[actix_web::test]
async fn test_login_malformed_json() {
    let (service, _db, _hasher) = user_auth_api::service!();

    let req = TestRequest::post()
        .uri("/api/login/")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_login_records_last_login() {
    let (service, db, hasher) = user_auth_api::service!();
    let client_user = UserFactory::new().create(&db, &hasher).await.unwrap();
    assert!(client_user.last_login.is_none());

    user_auth_api::login!(&service, client_user);

    let user = Model::find_by_id(&db, client_user.id).await.unwrap().unwrap();
    assert!(user.last_login.is_some());
}

#[actix_web::test]
async fn test_staff_can_login() {
    let (service, db, hasher) = user_auth_api::service!();
    let staff_user = UserFactory::staff().create(&db, &hasher).await.unwrap();

    let token = user_auth_api::login!(&service, staff_user);
    assert!(!token.is_empty());
}
