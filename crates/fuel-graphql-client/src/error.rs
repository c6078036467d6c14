use std::fmt;

/// Errors returned by [`Client`](crate::Client) calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("build http client failed: {0}")]
    Build(#[source] reqwest::Error),

    #[error("invalid header {name:?} in the client configuration")]
    InvalidHeader { name: String },

    #[error("send request failed: {0}")]
    Send(#[source] reqwest::Error),

    #[error("read response body failed: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("parse response body failed: {0}")]
    ParseBody(#[source] serde_json::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("the response has neither data nor errors")]
    MissingData,

    #[error(transparent)]
    Query(#[from] QueryErrors),
}

/// A scalar could not be parsed from its textual representation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScalarError {
    #[error("invalid hex string {value:?} for scalar {type_name}: {source}")]
    InvalidHex {
        type_name: &'static str,
        value: String,
        source: hex::FromHexError,
    },

    #[error("{type_name} expects at most {expected} bytes, got {actual}")]
    TooLong {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid number {value:?} for scalar {type_name}")]
    InvalidNumber { type_name: &'static str, value: String },

    #[error("invalid value {value:?} for enum type {type_name}")]
    InvalidEnumValue { type_name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct QueryErrorLocation {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for QueryErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(line:{},column:{})", self.line, self.column)
    }
}

/// A GraphQL error record returned by the node.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct QueryError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<QueryErrorLocation>,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, location) in self.locations.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            location.fmt(f)?;
        }

        write!(f, ": {}", self.message)
    }
}

/// All the errors of a failed query, reported as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryErrors(pub Vec<QueryError>);

impl QueryErrors {
    pub fn errors(&self) -> &[QueryError] {
        &self.0
    }
}

impl fmt::Display for QueryErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("execute query failed: ")?;

        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            error.fmt(f)?;
        }

        Ok(())
    }
}

impl std::error::Error for QueryErrors {}
