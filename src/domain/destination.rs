use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{DestinationName, TypeConstraintError};

/// Connectivity and retry state of one remote server.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub destination: DestinationName,
    /// Milliseconds since epoch of the last retry attempt, 0 if never retried.
    pub retry_last_ts: i64,
    /// Current backoff interval in milliseconds, 0 if not backing off.
    pub retry_interval: i64,
    /// Start of the current failure streak, `None` while healthy.
    pub failure_ts: Option<i64>,
    pub last_successful_stream_ordering: Option<i64>,
}

/// One retry-timing update. `retry_last_ts` and `retry_interval` are always
/// written together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DestinationRetryTimings {
    pub failure_ts: Option<i64>,
    pub retry_last_ts: i64,
    pub retry_interval: i64,
}

impl DestinationRetryTimings {
    pub fn new(failure_ts: Option<i64>, retry_last_ts: i64, retry_interval: i64) -> Self {
        Self {
            failure_ts,
            retry_last_ts,
            retry_interval,
        }
    }

    /// Timings recorded after a successful delivery: clears the backoff.
    pub fn reset(now_ms: i64) -> Self {
        Self::new(None, now_ms, 0)
    }
}

/// Column a destination listing can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DestinationSortOrder {
    #[default]
    Destination,
    RetryLastTs,
    RetryInterval,
    FailureTs,
    LastSuccessfulStreamOrdering,
}

impl DestinationSortOrder {
    pub const ALL: [DestinationSortOrder; 5] = [
        DestinationSortOrder::Destination,
        DestinationSortOrder::RetryLastTs,
        DestinationSortOrder::RetryInterval,
        DestinationSortOrder::FailureTs,
        DestinationSortOrder::LastSuccessfulStreamOrdering,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationSortOrder::Destination => "destination",
            DestinationSortOrder::RetryLastTs => "retry_last_ts",
            DestinationSortOrder::RetryInterval => "retry_interval",
            DestinationSortOrder::FailureTs => "failure_ts",
            DestinationSortOrder::LastSuccessfulStreamOrdering => {
                "last_successful_stream_ordering"
            }
        }
    }
}

impl Display for DestinationSortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DestinationSortOrder {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DestinationSortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// Traversal direction of a listing. `Backward` reverses the whole order,
/// tie-breaks included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Forward, Direction::Backward];

    /// Token used by the `dir` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "f",
            Direction::Backward => "b",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(Direction::Forward),
            "b" => Ok(Direction::Backward),
            _ => Err(TypeConstraintError::InvalidValue(s.to_string())),
        }
    }
}
