use crate::error::Error;
use crate::requests::v1::auth::RefreshRequest;
use crate::responses::v1::auth::AccessToken;
use crate::security::{JwtService, TokenType};

/// Issue a new access token from a refresh token
///
/// The user is not looked up again. An account disabled after the refresh
/// token was issued still gets a new access token, which the bearer
/// extractor then rejects.
#[::tracing::instrument(skip_all)]
pub async fn refresh(jwt: &JwtService, request: RefreshRequest) -> Result<AccessToken, Error> {
    request.validate()?;

    let claims = jwt
        .verify(request.refresh.trim(), TokenType::Refresh)
        .map_err(|e| {
            ::tracing::info!("Rejected refresh token: {}", e);

            Error::unauthorized("Token is invalid or expired")
        })?;

    Ok(AccessToken {
        access: jwt.issue(claims.user_id, TokenType::Access)?,
    })
}
