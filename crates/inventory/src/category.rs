//! Update-rule categories.
//!
//! A category is chosen once, when an item is classified, and never changes.

use serde::{Deserialize, Serialize};

use gilded_rose_core::ValueObject;

use crate::bounds::QualityBounds;

/// Categories that carry their own quality rule and may be doubled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseCategory {
    /// Loses quality every day, twice as fast once overdue.
    Generic,
    /// Gains quality with age ("Aged Brie").
    Appreciating,
    /// Gains quality as the event approaches, worthless afterwards
    /// ("Backstage passes").
    EventPass,
}

/// The update rule assigned to a tradeable item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "base")]
pub enum Category {
    Generic,
    Appreciating,
    /// Never changes quality or sell_in ("Sulfuras").
    Legendary,
    EventPass,
    /// Applies the wrapped rule twice per day ("Conjured").
    Doubled(BaseCategory),
}

impl Category {
    /// Quality range the category admits.
    pub fn bounds(self) -> QualityBounds {
        match self {
            Category::Legendary => QualityBounds::LEGENDARY,
            _ => QualityBounds::DEFAULT,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }

    /// The quality rule to run and how many times to run it per day.
    ///
    /// `None` means the item is frozen.
    pub(crate) fn quality_rule(self) -> Option<(BaseCategory, usize)> {
        match self {
            Category::Generic => Some((BaseCategory::Generic, 1)),
            Category::Appreciating => Some((BaseCategory::Appreciating, 1)),
            Category::EventPass => Some((BaseCategory::EventPass, 1)),
            Category::Doubled(base) => Some((base, 2)),
            Category::Legendary => None,
        }
    }
}

impl From<BaseCategory> for Category {
    fn from(base: BaseCategory) -> Self {
        match base {
            BaseCategory::Generic => Category::Generic,
            BaseCategory::Appreciating => Category::Appreciating,
            BaseCategory::EventPass => Category::EventPass,
        }
    }
}

impl core::fmt::Display for BaseCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            BaseCategory::Generic => "generic",
            BaseCategory::Appreciating => "appreciating",
            BaseCategory::EventPass => "event_pass",
        };
        f.write_str(label)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Category::Generic => f.write_str("generic"),
            Category::Appreciating => f.write_str("appreciating"),
            Category::Legendary => f.write_str("legendary"),
            Category::EventPass => f.write_str("event_pass"),
            Category::Doubled(base) => write!(f, "doubled({base})"),
        }
    }
}

impl ValueObject for Category {}
