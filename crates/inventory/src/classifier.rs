//! Classification: raw records in, validated tradeable items out.

use gilded_rose_core::InventoryResult;

use crate::catalog::Catalog;
use crate::item::{RawItem, TradeableItem};

/// Maps raw item records to typed, bounds-checked items.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    catalog: Catalog,
}

impl Classifier {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve the item's category and validate its quality against the
    /// category bounds. Out-of-range legendary qualities are rejected, not
    /// clamped.
    pub fn classify(&self, raw: &RawItem) -> InventoryResult<TradeableItem> {
        let category = self.catalog.resolve(&raw.name);
        category.bounds().check(&raw.name, raw.quality)?;

        tracing::debug!(item = %raw.name, %category, "classified item");
        Ok(TradeableItem::admitted(raw, category))
    }
}

/// Classify with the default catalog.
pub fn classify(raw: &RawItem) -> InventoryResult<TradeableItem> {
    Classifier::default().classify(raw)
}
