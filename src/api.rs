use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, error, requests, responses};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Auth"),
        (name = "User"),
    ),
    modifiers(&Authentication),
    paths(
        controllers::v1::auth::login,
        controllers::v1::auth::refresh,
        controllers::v1::protected::protected,

        controllers::v1::user::list,
        controllers::v1::user::me,
        controllers::v1::user::change_password,
    ),
    components(schemas(
        requests::v1::auth::LoginRequest,
        requests::v1::auth::RefreshRequest,
        requests::v1::user::ChangePasswordRequest,

        responses::v1::auth::TokenPair,
        responses::v1::auth::AccessToken,
        responses::v1::auth::Protected,
        responses::v1::user::User,
        responses::v1::user::UserList,
        responses::v1::common::Detail,
        responses::v1::common::ErrorMessage,

        error::Validation,
    )),
)]
pub struct Definition;

/// Registers the `token` bearer scheme referenced by secured paths
pub struct Authentication;

impl Modify for Authentication {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
