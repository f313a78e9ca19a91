//! Error taxonomy for upstream calls
//!
//! Transport failures, bad statuses and undecodable bodies stay distinct:
//! the service maps malformed depth payloads to a 404 while transport
//! failures surface as server errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("{endpoint} returned an unparsable body: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}
