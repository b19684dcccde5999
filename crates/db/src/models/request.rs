//! Request entity model, create DTO, and the transport record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dispatch_core::status::RequestStatus;
use dispatch_core::types::{DbId, Timestamp};

use crate::error::DbError;

/// A row from the `requests` table, exactly as persisted.
///
/// `status` is carried as the raw column text; it is only interpreted when
/// the row is projected into a [`RequestRecord`].
#[derive(Debug, Clone, FromRow)]
pub struct RequestRow {
    pub id: DbId,
    pub area_id: DbId,
    pub client_id: DbId,
    pub subject: String,
    pub body: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    pub area_id: DbId,
    pub client_id: DbId,
    pub subject: String,
    pub body: Option<String>,
    /// Defaults to `open` if omitted.
    pub status: Option<RequestStatus>,
}

/// The transport record returned to callers of the query service.
///
/// Every column of the persisted request is represented here; construction
/// goes through the validated [`TryFrom`] below, never field-by-field from
/// untrusted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    pub id: DbId,
    pub area_id: DbId,
    pub client_id: DbId,
    pub subject: String,
    pub body: Option<String>,
    pub status: RequestStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<RequestRow> for RequestRecord {
    type Error = DbError;

    fn try_from(row: RequestRow) -> Result<Self, Self::Error> {
        let status = RequestStatus::parse(&row.status)
            .map_err(|source| DbError::InvalidRow { id: row.id, source })?;
        Ok(Self {
            id: row.id,
            area_id: row.area_id,
            client_id: row.client_id,
            subject: row.subject,
            body: row.body,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
