//! Area entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dispatch_core::types::{DbId, Timestamp};

/// A row from the `areas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Area {
    pub id: DbId,
    /// Unique display name used for filtering.
    pub fullname_area: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new area.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArea {
    pub fullname_area: String,
}
