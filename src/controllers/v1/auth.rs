use actix_web::web::{Data, Json};
use actix_web::{Responder, post};
use sea_orm::DatabaseConnection;

use crate::error::{Error, Validation};
use crate::requests::v1::auth::{LoginRequest, RefreshRequest};
use crate::responses::v1::auth::{AccessToken, TokenPair};
use crate::responses::v1::common::Detail;
use crate::security::{JwtService, PasswordHasher};
use crate::services;

/// Obtain an access/refresh token pair
///
/// Fail if:
/// - username or password is missing
/// - user not found or inactive
/// - password is incorrect
#[utoipa::path(
    post,
    path = "/api/login/",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        TokenPair,
        (status = 400, description = "Missing fields", body = Validation),
        (status = 401, description = "Invalid credentials", body = Detail),
    )
)]
#[post("/api/login/")]
pub async fn login(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    jwt: Data<JwtService>,
    Json(request): Json<LoginRequest>,
) -> Result<impl Responder, Error> {
    services::v1::auth::login::login(&db, &hasher, &jwt, request).await
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/token/refresh/",
    tag = "Auth",
    request_body = RefreshRequest,
    responses(
        AccessToken,
        (status = 400, description = "Missing refresh token", body = Validation),
        (status = 401, description = "Invalid or expired refresh token", body = Detail),
    )
)]
#[post("/api/token/refresh/")]
pub async fn refresh(
    jwt: Data<JwtService>,
    Json(request): Json<RefreshRequest>,
) -> Result<impl Responder, Error> {
    services::v1::auth::refresh::refresh(&jwt, request).await
}
