//! Destination listing and retry-timing persistence.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        destination::{Destination, DestinationRetryTimings, DestinationSortOrder, Direction},
        types::DestinationName,
    },
    models::destination::{
        Destination as DbDestination, NewDestinationRetryTimings as DbNewRetryTimings,
        UpdateDestinationRetryTimings as DbUpdateRetryTimings,
    },
    repository::{
        DestinationListQuery, DestinationReader, DestinationWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::destinations,
};

// SQLite `LIKE` folds ASCII case, `instr` does not.
diesel::define_sql_function!(fn instr(haystack: Text, needle: Text) -> Integer);

type BoxedDestinations<'a> = destinations::BoxedQuery<'a, Sqlite>;

/// Applies the requested ordering. Every key falls back to the destination
/// name so the order is total, and `Backward` flips the tie-break as well.
/// SQLite places NULL before any value in ascending order, so a missing
/// `failure_ts` or stream ordering sorts lowest.
fn apply_order(
    items: BoxedDestinations<'_>,
    order_by: DestinationSortOrder,
    direction: Direction,
) -> BoxedDestinations<'_> {
    macro_rules! ordered_by {
        ($column:expr) => {
            match direction {
                Direction::Forward => {
                    items.order_by(($column.asc(), destinations::destination.asc()))
                }
                Direction::Backward => {
                    items.order_by(($column.desc(), destinations::destination.desc()))
                }
            }
        };
    }

    match order_by {
        DestinationSortOrder::Destination => match direction {
            Direction::Forward => items.order_by(destinations::destination.asc()),
            Direction::Backward => items.order_by(destinations::destination.desc()),
        },
        DestinationSortOrder::RetryLastTs => ordered_by!(destinations::retry_last_ts),
        DestinationSortOrder::RetryInterval => ordered_by!(destinations::retry_interval),
        DestinationSortOrder::FailureTs => ordered_by!(destinations::failure_ts),
        DestinationSortOrder::LastSuccessfulStreamOrdering => {
            ordered_by!(destinations::last_successful_stream_ordering)
        }
    }
}

fn to_sql_count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl DestinationReader for DieselRepository {
    fn list_destinations(
        &self,
        query: DestinationListQuery,
    ) -> RepositoryResult<(usize, Vec<Destination>)> {
        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = destinations::table.into_boxed::<Sqlite>();

            if let Some(filter) = &query.destination {
                items = items.filter(instr(destinations::destination, filter.clone()).gt(0));
            }
            items
        };

        // Count and page come from the same read transaction.
        let (total, rows) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let total = query_builder().count().get_result::<i64>(conn)?;

            let mut items = apply_order(query_builder(), query.order_by, query.direction);
            if let Some(pagination) = &query.pagination {
                items = items
                    .offset(to_sql_count(pagination.start))
                    .limit(to_sql_count(pagination.limit));
            }

            let rows = items.load::<DbDestination>(conn)?;
            Ok((total, rows))
        })?;

        let destinations = rows.into_iter().map(Destination::from).collect();

        Ok((total as usize, destinations))
    }

    fn get_destination(&self, name: &DestinationName) -> RepositoryResult<Option<Destination>> {
        let mut conn = self.conn()?;

        let row = destinations::table
            .find(name.as_str())
            .first::<DbDestination>(&mut conn)
            .optional()?;

        Ok(row.map(Destination::from))
    }
}

impl DestinationWriter for DieselRepository {
    fn set_destination_retry_timings(
        &self,
        name: &DestinationName,
        timings: &DestinationRetryTimings,
    ) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        conn.transaction::<bool, diesel::result::Error, _>(|conn| {
            let current_interval = destinations::table
                .find(name.as_str())
                .select(destinations::retry_interval)
                .first::<i64>(conn)
                .optional()?;

            match current_interval {
                None => {
                    diesel::insert_into(destinations::table)
                        .values(DbNewRetryTimings::new(name, timings))
                        .execute(conn)?;
                    Ok(true)
                }
                // A reset always wins; otherwise only a longer backoff may
                // replace the stored one.
                Some(current) if timings.retry_interval == 0 || current < timings.retry_interval => {
                    diesel::update(destinations::table.find(name.as_str()))
                        .set(DbUpdateRetryTimings::from(timings))
                        .execute(conn)?;
                    Ok(true)
                }
                Some(_) => Ok(false),
            }
        })
        .map_err(RepositoryError::from)
    }

    fn set_destination_last_successful_stream_ordering(
        &self,
        name: &DestinationName,
        stream_ordering: i64,
    ) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        diesel::insert_into(destinations::table)
            .values((
                destinations::destination.eq(name.as_str()),
                destinations::last_successful_stream_ordering.eq(Some(stream_ordering)),
            ))
            .on_conflict(destinations::destination)
            .do_update()
            .set(destinations::last_successful_stream_ordering.eq(Some(stream_ordering)))
            .execute(&mut conn)?;

        Ok(())
    }
}
