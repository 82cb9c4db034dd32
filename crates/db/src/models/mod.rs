//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for updates

pub mod asset;
pub mod category;
pub mod client;
pub mod dashboard;
pub mod product;
pub mod rental;
pub mod stock_movement;
