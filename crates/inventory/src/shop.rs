//! The shop: owns the item list and advances it one day at a time.

use gilded_rose_core::InventoryError;

use crate::classifier::Classifier;
use crate::item::{RawItem, TradeableItem};

/// An input record that failed classification and was left out of the
/// simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub item: RawItem,
    pub error: InventoryError,
}

/// In-memory inventory driven one simulated day at a time.
#[derive(Debug, Clone)]
pub struct Shop {
    raw: Vec<RawItem>,
    items: Vec<TradeableItem>,
    rejected: Vec<Rejection>,
    day: u32,
}

impl Shop {
    /// Classify `raw` with the default catalog.
    pub fn new(raw: Vec<RawItem>) -> Self {
        Self::with_classifier(raw, &Classifier::default())
    }

    /// Classify every record; records that violate their bounds are logged
    /// and skipped.
    pub fn with_classifier(raw: Vec<RawItem>, classifier: &Classifier) -> Self {
        let mut items = Vec::with_capacity(raw.len());
        let mut rejected = Vec::new();

        for record in &raw {
            match classifier.classify(record) {
                Ok(item) => items.push(item),
                Err(error) => {
                    tracing::warn!(
                        item = %error.name(),
                        quality = error.quality(),
                        "skipping item: {error}"
                    );
                    rejected.push(Rejection {
                        item: record.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            admitted = items.len(),
            rejected = rejected.len(),
            "shop stocked"
        );

        Self {
            raw,
            items,
            rejected,
            day: 0,
        }
    }

    /// Advance every admitted item by one day.
    pub fn update_quality(&mut self) {
        for item in &mut self.items {
            item.daily_update();
        }
        self.day += 1;
        tracing::debug!(day = self.day, items = self.items.len(), "advanced one day");
    }

    pub fn advance(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// The records the shop was built from, unchanged.
    pub fn raw_items(&self) -> &[RawItem] {
        &self.raw
    }

    /// Admitted items, in input order.
    pub fn items(&self) -> &[TradeableItem] {
        &self.items
    }

    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    /// Number of days simulated so far.
    pub fn day(&self) -> u32 {
        self.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_keeps_name() {
        let mut shop = Shop::new(vec![RawItem::new("foo", 0, 0)]);
        shop.update_quality();
        assert_eq!(shop.items()[0].name(), "foo");
        assert_eq!(shop.raw_items()[0].name, "foo");
    }

    #[test]
    fn invalid_items_are_skipped_and_recorded() {
        let shop = Shop::new(vec![
            RawItem::new("Aged Brie", 2, 0),
            RawItem::new("Sulfuras, Hand of Ragnaros", 0, 79),
            RawItem::new("basic", 0, 51),
            RawItem::new("Elixir of the Mongoose", 5, 7),
        ]);

        let names: Vec<_> = shop.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Aged Brie", "Elixir of the Mongoose"]);

        assert_eq!(shop.rejected().len(), 2);
        assert_eq!(shop.rejected()[0].item.quality, 79);
        assert_eq!(
            shop.rejected()[1].error,
            InventoryError::above_max("basic", 51, 50)
        );
        assert_eq!(shop.raw_items().len(), 4);
    }

    #[test]
    fn advance_counts_days_and_updates_each_item_once_per_day() {
        let mut shop = Shop::new(vec![
            RawItem::new("+5 Dexterity Vest", 10, 20),
            RawItem::new("Sulfuras, Hand of Ragnaros", 0, 80),
        ]);
        shop.advance(3);

        assert_eq!(shop.day(), 3);
        assert_eq!(shop.items()[0].to_raw(), RawItem::new("+5 Dexterity Vest", 7, 17));
        assert_eq!(
            shop.items()[1].to_raw(),
            RawItem::new("Sulfuras, Hand of Ragnaros", 0, 80)
        );
    }

    #[test]
    fn legendary_items_keep_their_state_across_days() {
        let mut shop = Shop::new(vec![
            RawItem::new("Sulfuras, Hand of Ragnaros", -1, 80),
            RawItem::new("Conjured Mana Cake", 3, 6),
            RawItem::new("Legendary Aged Brie", 4, 80),
        ]);
        shop.advance(5);

        let legendary: Vec<_> = shop
            .items()
            .iter()
            .filter(|item| item.category().is_legendary())
            .map(|item| item.to_raw())
            .collect();
        assert_eq!(
            legendary,
            vec![
                RawItem::new("Sulfuras, Hand of Ragnaros", -1, 80),
                RawItem::new("Legendary Aged Brie", 4, 80),
            ]
        );
        assert!(!shop.items()[1].category().is_legendary());
    }

    #[test]
    fn raw_records_are_not_mutated_by_updates() {
        let mut shop = Shop::new(vec![RawItem::new("basic", 1, 10)]);
        shop.update_quality();
        assert_eq!(shop.raw_items()[0], RawItem::new("basic", 1, 10));
        assert_eq!(shop.items()[0].quality(), 9);
    }
}
