//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::destination::{Destination, DestinationRetryTimings};
use crate::domain::types::DestinationName;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DestinationListQuery, DestinationReader, DestinationWriter};

mock! {
    pub Repository {}

    impl DestinationReader for Repository {
        fn list_destinations(
            &self,
            query: DestinationListQuery,
        ) -> RepositoryResult<(usize, Vec<Destination>)>;
        fn get_destination(&self, name: &DestinationName) -> RepositoryResult<Option<Destination>>;
    }

    impl DestinationWriter for Repository {
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
}
