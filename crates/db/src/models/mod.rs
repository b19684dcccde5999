//! Entity structs, create DTOs, and the transport record.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! `request` additionally defines [`request::RequestRecord`], the validated
//! transport projection returned by the query service.

pub mod area;
pub mod client;
pub mod request;

pub use area::{Area, CreateArea};
pub use client::{Client, CreateClient};
pub use request::{CreateRequest, RequestRecord, RequestRow};
