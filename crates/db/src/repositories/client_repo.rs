//! Repository for the `clients` table.

use sqlx::PgPool;

use crate::models::client::{Client, CreateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, fullname_client, created_at";

/// Write and lookup operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query =
            format!("INSERT INTO clients (fullname_client) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.fullname_client)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its unique display name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE fullname_client = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
