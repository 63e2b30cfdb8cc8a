use actix_web::web::{self, JsonConfig, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::Definition;
use crate::controllers;
use crate::error::Error;

pub fn route(app: &mut ServiceConfig) {
    app.app_data(JsonConfig::default().error_handler(|err, _| {
        tracing::info!("Rejected request body: {}", err);

        Error::bad_request(err.to_string()).into()
    }));
    // Auth
    app.service(controllers::v1::auth::login);
    app.service(controllers::v1::auth::refresh);
    app.service(controllers::v1::protected::protected);
    // User
    app.service(controllers::v1::user::list);
    app.service(controllers::v1::user::me);
    app.service(controllers::v1::user::change_password);
}

/// Swagger UI under `path`, must be registered after [`route`]
pub fn docs(app: &mut ServiceConfig, path: &str) {
    let path = path.trim_end_matches('/');

    app.service(web::redirect(path.to_string(), format!("{}/", path)));
    app.service(
        SwaggerUi::new(format!("{}/{{_:.*}}", path))
            .url("/api-docs/openapi.json", Definition::openapi()),
    );
}
