use sea_orm::DatabaseConnection;

use crate::error::Error;
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::user::{ChangePasswordRequest, MIN_PASSWORD_LENGTH};
use crate::responses::v1::common::Detail;
use crate::security::PasswordHasher;

pub const PASSWORD_CHANGED: &str = "Contraseña actualizada correctamente";
pub const FIELDS_REQUIRED: &str = "Todos los campos son obligatorios";
pub const WRONG_OLD_PASSWORD: &str = "Contraseña actual incorrecta";
pub const PASSWORDS_DIFFER: &str = "Las contraseñas nuevas no coinciden";

/// Replace the caller's password
///
/// Fail if, checked in this order:
/// - any field is blank
/// - old password is not the current password
/// - new password and confirmation differ
/// - new password is too short
#[::tracing::instrument(skip(db, hasher, auth, request), fields(user_id = auth.user.id))]
pub async fn change_password(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    auth: Auth,
    request: ChangePasswordRequest,
) -> Result<Detail, Error> {
    if request.has_blank_fields() {
        return Err(Error::bad_request(FIELDS_REQUIRED));
    }

    if !hasher.verify(&request.old_password, &auth.user.password)? {
        ::tracing::info!("Password change rejected, old password is incorrect");

        return Err(Error::bad_request(WRONG_OLD_PASSWORD));
    }

    if !request.confirmed() {
        return Err(Error::bad_request(PASSWORDS_DIFFER));
    }

    if !request.long_enough() {
        return Err(Error::bad_request(format!(
            "La nueva contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LENGTH
        )));
    }

    auth.user
        .update_password(db, hasher.hash(&request.new_password)?)
        .await?;

    ::tracing::info!("Password changed");

    Ok(Detail::new(PASSWORD_CHANGED))
}
