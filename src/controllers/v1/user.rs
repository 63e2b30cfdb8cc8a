use actix_web::web::{Data, Json};
use actix_web::{Responder, get, post};
use sea_orm::DatabaseConnection;

use crate::error::Error;
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::user::ChangePasswordRequest;
use crate::responses::v1::common::{Detail, ErrorMessage};
use crate::responses::v1::user::{User, UserList};
use crate::security::PasswordHasher;
use crate::services;

/// List users
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = "User",
    security(("token" = [])),
    responses(
        UserList,
        (status = 401, description = "Unauthorized", body = Detail),
    ),
)]
#[get("/api/users/")]
pub async fn list(db: Data<DatabaseConnection>, auth: Auth) -> Result<impl Responder, Error> {
    services::v1::user::list::list(&db, auth).await
}

/// Current user
#[utoipa::path(
    get,
    path = "/api/users/me/",
    tag = "User",
    security(("token" = [])),
    responses(
        User,
        (status = 401, description = "Unauthorized", body = Detail),
    ),
)]
#[get("/api/users/me/")]
pub async fn me(auth: Auth) -> Result<impl Responder, Error> {
    services::v1::user::me::me(auth).await
}

/// Change the current user's password
///
/// Fail if
/// - a field is blank
/// - old password is incorrect
/// - new password and confirmation differ
/// - new password is too short
#[utoipa::path(
    post,
    path = "/api/users/change_password/",
    tag = "User",
    security(("token" = [])),
    request_body = ChangePasswordRequest,
    responses(
        Detail,
        (status = 400, description = "Rejected", body = ErrorMessage),
        (status = 401, description = "Unauthorized", body = Detail),
    ),
)]
#[post("/api/users/change_password/")]
pub async fn change_password(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    auth: Auth,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl Responder, Error> {
    services::v1::user::change_password::change_password(&db, &hasher, auth, request).await
}
