//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or a transaction connection) as the first
//! argument.

pub mod asset_repo;
pub mod category_repo;
pub mod client_repo;
pub mod dashboard_repo;
pub mod product_repo;
pub mod rental_repo;
pub mod stock_movement_repo;

pub use asset_repo::AssetRepo;
pub use category_repo::CategoryRepo;
pub use client_repo::ClientRepo;
pub use dashboard_repo::DashboardRepo;
pub use product_repo::ProductRepo;
pub use rental_repo::{RentalRepo, RentalTxError};
pub use stock_movement_repo::StockMovementRepo;
