//! DTOs exposed by the federation destinations endpoint.

use serde::Serialize;

use crate::domain::destination::Destination;

/// Page of destinations returned by
/// [`crate::services::destinations::list_destinations`].
#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    /// Destinations inside the requested window.
    pub destinations: Vec<Destination>,
    /// Number of destinations matching the filter, ignoring the window.
    pub total: usize,
    /// Offset to send as `from` to fetch the following page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}
