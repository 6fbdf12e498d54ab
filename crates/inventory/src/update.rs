//! Daily update engine.
//!
//! One call is one simulated day for one item. Quality rules read the
//! `sell_in` value from *before* the day's decrement.

use crate::bounds::QualityBounds;
use crate::category::BaseCategory;
use crate::item::TradeableItem;

impl TradeableItem {
    /// Advance this item by one day. Total: never fails, never leaves bounds.
    pub fn daily_update(&mut self) {
        let Some((rule, passes)) = self.category.quality_rule() else {
            return;
        };

        for _ in 0..passes {
            self.quality = next_quality(rule, self.quality, self.sell_in, self.bounds);
        }
        self.sell_in = self.sell_in.saturating_sub(1);
    }
}

/// One application of a base quality rule.
fn next_quality(rule: BaseCategory, quality: i32, sell_in: i32, bounds: QualityBounds) -> i32 {
    match rule {
        BaseCategory::Generic => {
            if quality == bounds.min() {
                return quality;
            }
            let delta = if sell_in < 0 { 2 } else { 1 };
            bounds.saturate(quality - delta)
        }
        BaseCategory::Appreciating => {
            if quality == bounds.max() {
                return quality;
            }
            let delta = if sell_in < 0 { 2 } else { 1 };
            bounds.saturate(quality + delta)
        }
        BaseCategory::EventPass => {
            // Worthless once the event has passed, whatever the quality was.
            if sell_in < 0 {
                return bounds.min();
            }
            if quality == bounds.max() {
                return quality;
            }
            let delta = match sell_in {
                ..=5 => 3,
                6..=10 => 2,
                _ => 1,
            };
            bounds.saturate(quality + delta)
        }
    }
}
