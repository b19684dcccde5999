//! Request lifecycle status vocabulary.
//!
//! These must match the values stored in the `requests.status` column.
//! The column is free TEXT at the database level; parsing happens when a
//! row is projected into the transport record, so an unknown value is a
//! validation failure rather than a silent passthrough.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Open,
    InProgress,
    Closed,
}

impl RequestStatus {
    /// The string stored in the `requests.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    /// Parse a stored status string. Exact match only.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            other => Err(CoreError::Validation(format!(
                "unknown request status: {other:?}"
            ))),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
