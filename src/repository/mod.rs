use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        destination::{Destination, DestinationRetryTimings, DestinationSortOrder, Direction},
        types::DestinationName,
    },
    repository::errors::RepositoryResult,
};

pub mod destination;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Offset window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub start: usize,
    pub limit: usize,
}

/// Filter, ordering and window for a destination listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationListQuery {
    /// Case-sensitive substring matched against the destination name.
    pub destination: Option<String>,
    pub order_by: DestinationSortOrder,
    pub direction: Direction,
    pub pagination: Option<Pagination>,
}

impl DestinationListQuery {
    pub fn new() -> Self {
        Self {
            destination: None,
            order_by: DestinationSortOrder::default(),
            direction: Direction::default(),
            pagination: None,
        }
    }

    pub fn destination(mut self, filter: impl Into<String>) -> Self {
        self.destination = Some(filter.into());
        self
    }

    pub fn order_by(mut self, order_by: DestinationSortOrder, direction: Direction) -> Self {
        self.order_by = order_by;
        self.direction = direction;
        self
    }

    pub fn paginate(mut self, start: usize, limit: usize) -> Self {
        self.pagination = Some(Pagination { start, limit });
        self
    }
}

impl Default for DestinationListQuery {
    fn default() -> Self {
        Self::new()
    }
}

pub trait DestinationReader {
    /// Returns the number of destinations matching the filter together with
    /// the requested window of them.
    fn list_destinations(
        &self,
        query: DestinationListQuery,
    ) -> RepositoryResult<(usize, Vec<Destination>)>;
    fn get_destination(&self, name: &DestinationName) -> RepositoryResult<Option<Destination>>;
}

pub trait DestinationWriter {
    /// Records a retry attempt, creating the destination on first use.
    ///
    /// Returns `false` when an existing, longer backoff was left in place.
    fn set_destination_retry_timings(
        &self,
        name: &DestinationName,
        timings: &DestinationRetryTimings,
    ) -> RepositoryResult<bool>;
    fn set_destination_last_successful_stream_ordering(
        &self,
        name: &DestinationName,
        stream_ordering: i64,
    ) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
