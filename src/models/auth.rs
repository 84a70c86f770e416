//! Bearer-token authentication for admin requests.

use std::future::{Ready, ready};

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, http::StatusCode,
    http::header, web,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dto::errors::{ErrorBody, ErrorCode};
use crate::models::config::ServerConfig;

/// Claims carried by an admin access token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing access token")]
    MissingToken,

    #[error("Unrecognised access token")]
    UnknownToken,

    #[error("Server is not configured to verify access tokens")]
    MissingConfig,

    #[error("Failed to sign access token")]
    Signing,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::UnknownToken => StatusCode::UNAUTHORIZED,
            AuthError::MissingConfig | AuthError::Signing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errcode = match self {
            AuthError::MissingToken => ErrorCode::MissingToken,
            AuthError::UnknownToken => ErrorCode::UnknownToken,
            AuthError::MissingConfig | AuthError::Signing => ErrorCode::Unknown,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody::new(errcode, self.to_string()))
    }
}

impl AuthenticatedUser {
    /// Verifies an HS256 token and returns its claims.
    pub fn from_token(token: &str, secret: &str) -> Result<Self, AuthError> {
        decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            log::debug!("Rejected access token for admin API: {e}");
            AuthError::UnknownToken
        })
    }

    /// Signs these claims with the shared secret.
    pub fn to_token(&self, secret: &str) -> Result<String, AuthError> {
        encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| {
            log::error!("Failed to sign access token: {e}");
            AuthError::Signing
        })
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            log::error!("ServerConfig is not registered as app data");
            return ready(Err(AuthError::MissingConfig));
        };

        let result = match bearer_token(req) {
            Some(token) => AuthenticatedUser::from_token(token, &config.secret),
            None => Err(AuthError::MissingToken),
        };
        ready(result)
    }
}
