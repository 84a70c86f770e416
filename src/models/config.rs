//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// HS256 key used to verify admin access tokens.
    pub secret: String,
    /// Upper bound for the `limit` query parameter. `None` leaves pages unbounded.
    #[serde(default)]
    pub max_page_size: Option<usize>,
}
