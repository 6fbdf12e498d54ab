//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Bounds violation raised while admitting an item to the simulation.
///
/// Daily updates never fail, so this is only produced by classification. A
/// violation is a permanent defect of the input record and is never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Quality is above the category's maximum.
    #[error("quality {quality} of '{name}' exceeds maximum {max}")]
    QualityAboveMax { name: String, quality: i32, max: i32 },

    /// Quality is below the category's minimum.
    #[error("quality {quality} of '{name}' is below minimum {min}")]
    QualityBelowMin { name: String, quality: i32, min: i32 },
}

impl InventoryError {
    pub fn above_max(name: impl Into<String>, quality: i32, max: i32) -> Self {
        Self::QualityAboveMax {
            name: name.into(),
            quality,
            max,
        }
    }

    pub fn below_min(name: impl Into<String>, quality: i32, min: i32) -> Self {
        Self::QualityBelowMin {
            name: name.into(),
            quality,
            min,
        }
    }

    /// Name of the rejected item.
    pub fn name(&self) -> &str {
        match self {
            Self::QualityAboveMax { name, .. } | Self::QualityBelowMin { name, .. } => name,
        }
    }

    /// The quality value that was rejected.
    pub fn quality(&self) -> i32 {
        match self {
            Self::QualityAboveMax { quality, .. } | Self::QualityBelowMin { quality, .. } => *quality,
        }
    }
}
