use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use user_auth_api::config::{self, AppConfig};
use user_auth_api::{database, router, telemetry, JwtService, PasswordHasher};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config: AppConfig = config::load().context("failed to load configuration")?;

    telemetry::init(&config.observability)
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    tracing::info!(
        name = %config.app.name,
        environment = %config.app.environment,
        "Starting"
    );

    let db = database::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    let hasher = PasswordHasher::from_config(&config.auth.argon2)
        .map_err(|e| anyhow::anyhow!("invalid argon2 parameters: {}", e))?;
    let jwt = JwtService::from_config(&config.auth);

    let db = Data::new(db);
    let hasher = Data::new(hasher);
    let jwt = Data::new(jwt);
    let api = config.api.clone();

    let mut server = HttpServer::new(move || {
        let api = api.clone();

        App::new()
            .app_data(db.clone())
            .app_data(hasher.clone())
            .app_data(jwt.clone())
            .configure(router::route)
            .configure(move |app| {
                if api.swagger_enabled {
                    router::docs(app, &api.swagger_path);
                }
            })
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let address = (config.server.host.as_str(), config.server.port);

    tracing::info!("Listening on {}:{}", address.0, address.1);

    server
        .bind(address)
        .with_context(|| format!("failed to bind {}:{}", address.0, address.1))?
        .run()
        .await
        .context("server error")
}
