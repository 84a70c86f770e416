use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::destinations::DestinationsQueryForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::destinations::list_destinations;

/// `GET /_synapse/admin/v1/federation/destinations?from=0&limit=10`
#[get("/v1/federation/destinations")]
pub async fn list_federation_destinations(
    user: AuthenticatedUser,
    params: web::Query<DestinationsQueryForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match list_destinations(
        repo.get_ref(),
        &user,
        params.into_inner(),
        server_config.max_page_size,
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(&err),
    }
}
