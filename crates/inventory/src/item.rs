use serde::{Deserialize, Serialize};

use gilded_rose_core::ValueObject;

use crate::bounds::QualityBounds;
use crate::category::Category;

/// Input record supplied by the caller: `(name, sell_in, quality)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawItem {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl RawItem {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl core::fmt::Display for RawItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl ValueObject for RawItem {}

/// A classified item that takes part in the daily simulation.
///
/// Invariant: `bounds().contains(quality())` holds from construction onwards.
/// Instances are only produced by [`crate::Classifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeableItem {
    pub(crate) name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
    pub(crate) bounds: QualityBounds,
    pub(crate) category: Category,
}

impl TradeableItem {
    /// Callers must have validated `quality` against `category.bounds()`.
    pub(crate) fn admitted(raw: &RawItem, category: Category) -> Self {
        Self {
            name: raw.name.clone(),
            sell_in: raw.sell_in,
            quality: raw.quality,
            bounds: category.bounds(),
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn bounds(&self) -> QualityBounds {
        self.bounds
    }

    pub fn min_quality(&self) -> i32 {
        self.bounds.min()
    }

    pub fn max_quality(&self) -> i32 {
        self.bounds.max()
    }

    /// Current state as a plain record.
    pub fn to_raw(&self) -> RawItem {
        RawItem::new(self.name.clone(), self.sell_in, self.quality)
    }
}

impl core::fmt::Display for TradeableItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
