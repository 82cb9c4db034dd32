//! Shared domain types for the Rentline backend.
//!
//! Holds the ID/timestamp aliases, the domain error enum, and the
//! enumerated value types the rest of the workspace branches on.

pub mod domain;
pub mod error;
pub mod types;
