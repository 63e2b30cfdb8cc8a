use crate::error::Error;
use crate::middlewares::v1::auth::Auth;
use crate::responses::v1::auth::Protected;

#[::tracing::instrument(skip(auth), fields(user_id = auth.user.id))]
pub async fn protected(auth: Auth) -> Result<Protected, Error> {
    Ok(Protected {
        message: "Authenticated".to_string(),
        username: auth.user.username,
    })
}
