use sea_orm::DatabaseConnection;

use crate::entities::v1::users::Model;
use crate::error::Error;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::TokenPair;
use crate::security::{JwtService, PasswordHasher};

pub const INVALID_CREDENTIALS: &str = "No active account found with the given credentials";

/// Exchange username and password for an access/refresh pair
///
/// Fail if:
/// - username or password is blank
/// - user not found or inactive
/// - password is incorrect
#[::tracing::instrument(skip(db, hasher, jwt, request), fields(username = %request.username))]
pub async fn login(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    jwt: &JwtService,
    request: LoginRequest,
) -> Result<TokenPair, Error> {
    request.validate()?;

    let user = match Model::find_by_username(db, &request.username).await? {
        Some(user) if user.is_active => user,
        Some(_) => {
            ::tracing::info!("Login attempt for inactive user");

            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        None => {
            ::tracing::info!("Login attempt for unknown user");

            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
    };

    if !hasher.verify(&request.password, &user.password)? {
        ::tracing::info!(user_id = user.id, "Login attempt with wrong password");

        return Err(Error::unauthorized(INVALID_CREDENTIALS));
    }

    let user = if hasher.needs_rehash(&user.password)? {
        ::tracing::info!(user_id = user.id, "Upgrading password hash parameters");

        user.update_password(db, hasher.hash(&request.password)?).await?
    } else {
        user
    };

    let user = user.touch_last_login(db).await?;

    ::tracing::info!(user_id = user.id, "User logged in");

    Ok(jwt.pair(user.id)?.into())
}
