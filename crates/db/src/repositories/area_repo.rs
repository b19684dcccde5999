//! Repository for the `areas` table.

use sqlx::PgPool;

use crate::models::area::{Area, CreateArea};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, fullname_area, created_at";

/// Write and lookup operations for areas.
pub struct AreaRepo;

impl AreaRepo {
    /// Insert a new area, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArea) -> Result<Area, sqlx::Error> {
        let query =
            format!("INSERT INTO areas (fullname_area) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Area>(&query)
            .bind(&input.fullname_area)
            .fetch_one(pool)
            .await
    }

    /// Find an area by its unique display name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Area>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM areas WHERE fullname_area = $1");
        sqlx::query_as::<_, Area>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
