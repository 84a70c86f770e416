//! HTTP routes of the admin API.

use actix_web::{HttpResponse, error::InternalError, web};

use crate::dto::errors::{ErrorBody, ErrorCode};
use crate::forms::FormError;
use crate::services::ServiceError;

pub mod destinations;

/// Registers every admin route under `/_synapse/admin`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config()).service(
        web::scope("/_synapse/admin").service(destinations::list_federation_destinations),
    );
}

/// Reports query strings that cannot be decoded at all with the same error
/// shape as the listing's own validation.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(ErrorBody::new(ErrorCode::InvalidParam, err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Maps a service failure onto its HTTP status and `errcode`.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Forbidden => {
            HttpResponse::Forbidden().json(ErrorBody::new(ErrorCode::Forbidden, err.to_string()))
        }
        ServiceError::Form(FormError::InvalidParameter(message)) => HttpResponse::BadRequest()
            .json(ErrorBody::new(ErrorCode::InvalidParam, message.as_str())),
        ServiceError::Form(FormError::UnrecognizedValue(message)) => HttpResponse::BadRequest()
            .json(ErrorBody::new(ErrorCode::Unknown, message.as_str())),
        ServiceError::Repository(_) => {
            HttpResponse::InternalServerError()
                .json(ErrorBody::new(ErrorCode::Unknown, "Internal server error"))
        }
    }
}
