use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    #[schema(example = "123456")]
    pub old_password: String,
    #[serde(default)]
    #[schema(example = "nueva_contraseña_segura_123")]
    pub new_password: String,
    #[serde(default)]
    #[schema(example = "nueva_contraseña_segura_123")]
    pub new_password_confirm: String,
}

impl ChangePasswordRequest {
    /// Whitespace-only counts as blank, the same as `Validation::required`.
    pub fn has_blank_fields(&self) -> bool {
        [&self.old_password, &self.new_password, &self.new_password_confirm]
            .iter()
            .any(|field| field.trim().is_empty())
    }

    pub fn confirmed(&self) -> bool {
        self.new_password == self.new_password_confirm
    }

    /// Length is counted in characters, not bytes.
    pub fn long_enough(&self) -> bool {
        self.new_password.chars().count() >= MIN_PASSWORD_LENGTH
    }
}
