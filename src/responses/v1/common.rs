use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

/// Human readable outcome of an action
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "OK")]
pub struct Detail {
    #[schema(example = "Contraseña actualizada correctamente")]
    pub detail: String,
}

impl Detail {
    pub fn new<T: ToString>(detail: T) -> Self {
        Self {
            detail: detail.to_string(),
        }
    }
}

impl Responder for Detail {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}

/// Body of 400 responses raised by business rules
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct ErrorMessage {
    #[schema(example = "Contraseña actual incorrecta")]
    pub error: String,
}
