//! Inventory domain: item classification and the daily update rules.
//!
//! This crate is deterministic domain logic only (no IO, no storage). Raw
//! records are classified once into [`TradeableItem`]s, which are then
//! advanced in place one simulated day at a time.

pub mod bounds;
pub mod catalog;
pub mod category;
pub mod classifier;
pub mod item;
pub mod shop;
mod update;

pub use bounds::QualityBounds;
pub use catalog::{Catalog, Modifier};
pub use category::{BaseCategory, Category};
pub use classifier::{Classifier, classify};
pub use item::{RawItem, TradeableItem};
pub use shop::{Rejection, Shop};

pub use gilded_rose_core::{InventoryError, InventoryResult};
