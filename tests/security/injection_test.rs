//! SQL Injection Security Tests
//!
//! SeaORM binds every value as a parameter, so hostile input must come back
//! as an ordinary authentication failure and leave the users table intact.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::{Value, json};
use user_auth_api::entities::v1::users;
use user_auth_api::testing::{DEFAULT_PASSWORD, UserFactory};

const PAYLOADS: &[&str] = &[
    "admin' OR '1'='1",
    "admin' --",
    "' OR 1=1; --",
    "x'; DROP TABLE users; --",
    "' UNION SELECT id, username, password FROM users --",
];

async fn user_count(db: &DatabaseConnection) -> u64 {
    users::Entity::find().count(db).await.expect("users table should still exist")
}

// =============================================================================
// SQL INJECTION TESTS - LOGIN
// =============================================================================

#[actix_web::test]
async fn test_sql_injection_in_login_username() {
    let (service, db, hasher) = user_auth_api::service!();
    UserFactory::admin().username("admin").create(&db, &hasher).await.unwrap();

    for payload in PAYLOADS {
        let req = TestRequest::post()
            .uri("/api/login/")
            .set_json(json!({ "username": payload, "password": DEFAULT_PASSWORD }))
            .to_request();

        let resp = call_service(&service, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "Payload {:?} should not log in",
            payload
        );

        let body: Value = read_body_json(resp).await;
        assert!(body.get("access").is_none());
    }

    assert_eq!(user_count(&db).await, 1);
}

#[actix_web::test]
async fn test_sql_injection_in_login_password() {
    let (service, db, hasher) = user_auth_api::service!();
    let admin = UserFactory::admin().create(&db, &hasher).await.unwrap();

    for payload in PAYLOADS {
        let req = TestRequest::post()
            .uri("/api/login/")
            .set_json(json!({ "username": admin.username, "password": payload }))
            .to_request();

        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    assert_eq!(user_count(&db).await, 1);
}

#[actix_web::test]
async fn test_sql_injection_in_refresh_token() {
    let (service, db, hasher) = user_auth_api::service!();
    UserFactory::new().create(&db, &hasher).await.unwrap();

    for payload in PAYLOADS {
        let req = TestRequest::post()
            .uri("/api/token/refresh/")
            .set_json(json!({ "refresh": payload }))
            .to_request();

        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    assert_eq!(user_count(&db).await, 1);
}

// =============================================================================
// SQL INJECTION TESTS - STORED DATA
// =============================================================================

#[actix_web::test]
async fn test_hostile_username_is_stored_literally() {
    let (service, db, hasher) = user_auth_api::service!();
    let hostile = "robert'); DROP TABLE users; --";
    UserFactory::new().create(&db, &hasher).await.unwrap();
    let user = UserFactory::new()
        .username(hostile)
        .email("robert@example.com")
        .create(&db, &hasher)
        .await
        .unwrap();

    assert_eq!(user.username, hostile);
    assert_eq!(user_count(&db).await, 2);

    let stored = users::Entity::find()
        .filter(users::Column::Username.eq(hostile))
        .one(&db)
        .await
        .unwrap();
    assert_eq!(stored.map(|user| user.id), Some(user.id));

    let token = user_auth_api::login!(&service, user);

    let req = TestRequest::get()
        .uri("/api/users/me/")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let body: Value = read_body_json(call_service(&service, req).await).await;
    assert_eq!(body["username"], hostile);
}
