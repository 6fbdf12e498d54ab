use serde::{Deserialize, Serialize};

use gilded_rose_core::{InventoryError, InventoryResult, ValueObject};

/// Inclusive quality range permitted for an item category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualityBounds {
    min: i32,
    max: i32,
}

impl QualityBounds {
    /// Bounds for every non-legendary item.
    pub const DEFAULT: Self = Self { min: 0, max: 50 };

    /// Legendary items hold exactly one quality value.
    pub const LEGENDARY: Self = Self { min: 80, max: 80 };

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, quality: i32) -> bool {
        (self.min..=self.max).contains(&quality)
    }

    /// Reject `quality` if it lies outside the range. The upper bound is
    /// checked first.
    pub fn check(&self, name: &str, quality: i32) -> InventoryResult<()> {
        if quality > self.max {
            return Err(InventoryError::above_max(name, quality, self.max));
        }
        if quality < self.min {
            return Err(InventoryError::below_min(name, quality, self.min));
        }
        Ok(())
    }

    pub(crate) fn saturate(&self, quality: i32) -> i32 {
        quality.clamp(self.min, self.max)
    }
}

impl Default for QualityBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ValueObject for QualityBounds {}
