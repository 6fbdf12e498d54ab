//! `gilded-rose-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use value_object::ValueObject;
