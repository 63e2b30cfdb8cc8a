use actix_web::{Responder, get};

use crate::error::Error;
use crate::middlewares::v1::auth::Auth;
use crate::responses::v1::auth::Protected;
use crate::responses::v1::common::Detail;
use crate::services;

/// Reachable by any authenticated user
#[utoipa::path(
    get,
    path = "/api/protected/",
    tag = "Auth",
    security(("token" = [])),
    responses(
        Protected,
        (status = 401, description = "Unauthorized", body = Detail),
    )
)]
#[get("/api/protected/")]
pub async fn protected(auth: Auth) -> Result<impl Responder, Error> {
    services::v1::protected::protected(auth).await
}
