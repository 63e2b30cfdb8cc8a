/// Builds the in-process test service
///
/// Expands to `(service, db, hasher)`. Each invocation gets its own
/// in-memory database.
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::setup::database().await;
        let hasher = $crate::testing::setup::password_hasher();
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new(hasher.clone()))
            .app_data(::actix_web::web::Data::new($crate::testing::setup::jwt()))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db, hasher)
    }};
}

/// Logs `$user` in with the factory password and yields the access token
///
/// Panics when login does not answer 200.
#[macro_export]
macro_rules! login {
    ($service:expr, $user:expr) => {
        $crate::login!($service, $user, $crate::testing::DEFAULT_PASSWORD)
    };
    ($service:expr, $user:expr, $password:expr) => {{
        let request = ::actix_web::test::TestRequest::post()
            .uri("/api/login/")
            .set_json(::serde_json::json!({
                "username": $user.username,
                "password": $password,
            }))
            .to_request();

        let response = ::actix_web::test::call_service($service, request).await;
        assert_eq!(
            response.status(),
            ::actix_web::http::StatusCode::OK,
            "login failed for {}",
            $user.username
        );

        let body: ::serde_json::Value = ::actix_web::test::read_body_json(response).await;
        body["access"]
            .as_str()
            .expect("login response has no access token")
            .to_string()
    }};
}
