//! Service listing the federation destinations known to the homeserver.

use crate::SERVICE_ADMIN_ROLE;
use crate::dto::destinations::DestinationsResponse;
use crate::forms::destinations::DestinationsQueryForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DestinationListQuery, DestinationReader, Pagination};
use crate::services::{ServiceResult, ensure_role};

/// Offset of the next page, present only while `start + limit` stops short
/// of `total`. It counts the rows actually returned rather than `limit`.
pub fn next_token(start: usize, limit: usize, total: usize, returned: usize) -> Option<String> {
    if start.saturating_add(limit) < total {
        Some(start.saturating_add(returned).to_string())
    } else {
        None
    }
}

/// Validates the raw query, fetches one page and computes the continuation
/// token. `max_page_size`, when set, clamps `limit` before anything else
/// sees it.
pub fn list_destinations<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: DestinationsQueryForm,
    max_page_size: Option<usize>,
) -> ServiceResult<DestinationsResponse>
where
    R: DestinationReader + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let mut query = DestinationListQuery::try_from(form).inspect_err(|err| {
        log::debug!("Rejected destinations query: {err}");
    })?;

    let Pagination { start, mut limit } = query.pagination.unwrap_or(Pagination {
        start: 0,
        limit: usize::MAX,
    });
    if let Some(cap) = max_page_size {
        limit = limit.min(cap);
    }
    query.pagination = Some(Pagination { start, limit });

    let (total, destinations) = repo.list_destinations(query).map_err(|err| {
        log::error!("Failed to list federation destinations: {err}");
        err
    })?;

    let next_token = next_token(start, limit, total, destinations.len());

    Ok(DestinationsResponse {
        destinations,
        total,
        next_token,
    })
}
