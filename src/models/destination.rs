use diesel::prelude::*;

use crate::domain::destination::{
    Destination as DomainDestination, DestinationRetryTimings as DomainRetryTimings,
};
use crate::domain::types::DestinationName;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::destinations)]
#[diesel(primary_key(destination))]
/// Diesel model for [`crate::domain::destination::Destination`].
pub struct Destination {
    pub destination: String,
    pub retry_last_ts: i64,
    pub retry_interval: i64,
    pub failure_ts: Option<i64>,
    pub last_successful_stream_ordering: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::destinations)]
/// Row created by the first retry-timing write for a destination.
pub struct NewDestinationRetryTimings<'a> {
    pub destination: &'a str,
    pub failure_ts: Option<i64>,
    pub retry_last_ts: i64,
    pub retry_interval: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::destinations)]
#[diesel(treat_none_as_null = true)]
/// Retry-timing columns overwritten on an existing destination.
pub struct UpdateDestinationRetryTimings {
    pub failure_ts: Option<i64>,
    pub retry_last_ts: i64,
    pub retry_interval: i64,
}

impl From<Destination> for DomainDestination {
    fn from(row: Destination) -> Self {
        Self {
            destination: DestinationName::from_stored(row.destination),
            retry_last_ts: row.retry_last_ts,
            retry_interval: row.retry_interval,
            failure_ts: row.failure_ts,
            last_successful_stream_ordering: row.last_successful_stream_ordering,
        }
    }
}

impl<'a> NewDestinationRetryTimings<'a> {
    pub fn new(destination: &'a DestinationName, timings: &DomainRetryTimings) -> Self {
        Self {
            destination: destination.as_str(),
            failure_ts: timings.failure_ts,
            retry_last_ts: timings.retry_last_ts,
            retry_interval: timings.retry_interval,
        }
    }
}

impl From<&DomainRetryTimings> for UpdateDestinationRetryTimings {
    fn from(timings: &DomainRetryTimings) -> Self {
        Self {
            failure_ts: timings.failure_ts,
            retry_last_ts: timings.retry_last_ts,
            retry_interval: timings.retry_interval,
        }
    }
}
