use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use sea_orm::DatabaseConnection;

use crate::entities::v1::users::Model;
use crate::error::Error;
use crate::security::{Claims, JwtService, TokenType};

/// Caller identified by a valid `Authorization: Bearer <access>` header
#[derive(Clone, Debug)]
pub struct Auth {
    pub user: Model,
    pub claims: Claims,
}

impl Auth {
    fn bearer(req: &HttpRequest) -> Result<String, Error> {
        let header = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(|| Error::unauthorized("Authentication credentials were not provided."))?;

        let header = header.to_str().map_err(|e| {
            tracing::warn!("Authorization header is not valid ASCII: {}", e);

            Error::unauthorized("Given token not valid for any token type")
        })?;

        match header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => {
                tracing::warn!("Authorization header does not carry a bearer token");

                Err(Error::unauthorized("Given token not valid for any token type"))
            }
        }
    }
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let db = req.app_data::<Data<DatabaseConnection>>().cloned();
        let jwt = req.app_data::<Data<JwtService>>().cloned();
        let token = Self::bearer(req);

        Box::pin(async move {
            let (db, jwt) = match (db, jwt) {
                (Some(db), Some(jwt)) => (db, jwt),
                _ => {
                    tracing::error!("Database or token service is not registered as app data");

                    return Err(Error::Database(sea_orm::DbErr::Custom(
                        "application state is missing".to_string(),
                    )));
                }
            };

            let claims = jwt.verify(&token?, TokenType::Access)?;

            let user = match Model::find_by_id(&db, claims.user_id).await? {
                Some(user) => user,
                None => {
                    tracing::warn!(user_id = claims.user_id, "Token refers to a missing user");

                    return Err(Error::unauthorized("User not found"));
                }
            };

            if !user.is_active {
                tracing::warn!(user_id = user.id, "Token refers to an inactive user");

                return Err(Error::unauthorized("User is inactive"));
            }

            Ok(Auth { user, claims })
        })
    }
}
