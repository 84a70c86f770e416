//! Error bodies returned by the admin API.

use serde::Serialize;

/// Machine-readable error code sent as `errcode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "M_FORBIDDEN")]
    Forbidden,
    #[serde(rename = "M_INVALID_PARAM")]
    InvalidParam,
    #[serde(rename = "M_MISSING_TOKEN")]
    MissingToken,
    #[serde(rename = "M_UNKNOWN_TOKEN")]
    UnknownToken,
    #[serde(rename = "M_UNKNOWN")]
    Unknown,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errcode: ErrorCode,
    pub error: String,
}

impl ErrorBody {
    pub fn new(errcode: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            errcode,
            error: error.into(),
        }
    }
}
