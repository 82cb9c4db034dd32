//! Client entity model and DTOs.

use rentline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    /// Natural key; unique across clients.
    pub tax_id: String,
    pub business_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub tax_id: String,
    pub business_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub business_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
