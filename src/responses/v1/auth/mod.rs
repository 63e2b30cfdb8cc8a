use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "Authenticated")]
pub struct TokenPair {
    #[schema()]
    pub access: String,
    #[schema()]
    pub refresh: String,
}

impl From<(String, String)> for TokenPair {
    fn from((access, refresh): (String, String)) -> Self {
        Self { access, refresh }
    }
}

impl Responder for TokenPair {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "Refreshed")]
pub struct AccessToken {
    #[schema()]
    pub access: String,
}

impl Responder for AccessToken {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "OK")]
pub struct Protected {
    #[schema(example = "Authenticated")]
    pub message: String,
    #[schema(example = "john")]
    pub username: String,
}

impl Responder for Protected {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
