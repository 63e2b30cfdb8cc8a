use sea_orm::DatabaseConnection;

use crate::entities::v1::users::Model;
use crate::error::Error;
use crate::middlewares::v1::auth::Auth;
use crate::responses::v1::user::UserList;

/// List every active user
///
/// Staff and plain users get the same listing.
#[::tracing::instrument(skip(db, auth), fields(user_id = auth.user.id))]
pub async fn list(db: &DatabaseConnection, auth: Auth) -> Result<UserList, Error> {
    let users = Model::active(db).await?;

    Ok(users
        .into_iter()
        .map(Into::into)
        .collect::<Vec<_>>()
        .into())
}
