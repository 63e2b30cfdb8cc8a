use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Validation;

#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "john")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "123456")]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), Validation> {
        let mut validation = Validation::new();
        validation.required("username", &self.username);
        validation.required("password", &self.password);

        if validation.is_empty() {
            Ok(())
        } else {
            Err(validation)
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh: String,
}

impl RefreshRequest {
    pub fn validate(&self) -> Result<(), Validation> {
        let mut validation = Validation::new();
        validation.required("refresh", &self.refresh);

        if validation.is_empty() {
            Ok(())
        } else {
            Err(validation)
        }
    }
}
