//! Width tables and feedback timing, with JSON overrides.
//!
//! Defaults come from [`crate::consts`]. A host may ship its own tables as
//! JSON; any field it leaves out, down to a single size class of one side,
//! keeps its default. Every entry must keep `min <= default <= max`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LHS_WIDTHS, LIMIT_INDICATOR_MS, RHS_WIDTHS};
use crate::size::{Side, SidebarSize, WidthBounds};

/// Error returned by [`SidebarConfig::from_json`] and [`SidebarConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be decoded.
    #[error("failed to parse sidebar config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A table entry violates `min <= default <= max`.
    #[error("invalid {side:?} bounds at {size:?}: min {min}, default {default}, max {max}")]
    InvalidBounds { side: Side, size: SidebarSize, min: u32, default: u32, max: u32 },
}

/// Bounds for one side, one entry per size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsTable {
    pub small: WidthBounds,
    pub medium: WidthBounds,
    pub large: WidthBounds,
    pub x_large: WidthBounds,
}

impl BoundsTable {
    /// Build a table from entries ordered small to extra-large.
    #[must_use]
    pub const fn from_array(entries: [WidthBounds; 4]) -> Self {
        Self { small: entries[0], medium: entries[1], large: entries[2], x_large: entries[3] }
    }

    #[must_use]
    pub fn get(&self, size: SidebarSize) -> WidthBounds {
        match size {
            SidebarSize::Small => self.small,
            SidebarSize::Medium => self.medium,
            SidebarSize::Large => self.large,
            SidebarSize::XLarge => self.x_large,
        }
    }
}

/// Sizing configuration shared by both sidebars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigOverrides", rename_all = "camelCase")]
pub struct SidebarConfig {
    pub lhs: BoundsTable,
    pub rhs: BoundsTable,
    /// Milliseconds the limit-reached indicator stays on the handle.
    pub limit_indicator_ms: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            lhs: BoundsTable::from_array(LHS_WIDTHS),
            rhs: BoundsTable::from_array(RHS_WIDTHS),
            limit_indicator_ms: LIMIT_INDICATOR_MS,
        }
    }
}

/// Deserialized form of [`SidebarConfig`]: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigOverrides {
    lhs: TableOverrides,
    rhs: TableOverrides,
    limit_indicator_ms: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TableOverrides {
    small: Option<WidthBounds>,
    medium: Option<WidthBounds>,
    large: Option<WidthBounds>,
    x_large: Option<WidthBounds>,
}

impl TableOverrides {
    fn over(self, base: BoundsTable) -> BoundsTable {
        BoundsTable {
            small: self.small.unwrap_or(base.small),
            medium: self.medium.unwrap_or(base.medium),
            large: self.large.unwrap_or(base.large),
            x_large: self.x_large.unwrap_or(base.x_large),
        }
    }
}

impl From<ConfigOverrides> for SidebarConfig {
    fn from(raw: ConfigOverrides) -> Self {
        let base = Self::default();
        Self {
            lhs: raw.lhs.over(base.lhs),
            rhs: raw.rhs.over(base.rhs),
            limit_indicator_ms: raw.limit_indicator_ms.unwrap_or(base.limit_indicator_ms),
        }
    }
}

impl SidebarConfig {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every table entry for `min <= default <= max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for side in [Side::Lhs, Side::Rhs] {
            for size in SidebarSize::ALL {
                let b = self.bounds(side, size);
                if !b.is_well_formed() {
                    return Err(ConfigError::InvalidBounds {
                        side,
                        size,
                        min: b.min,
                        default: b.default,
                        max: b.max,
                    });
                }
            }
        }
        Ok(())
    }

    /// Bounds for `side` at `size`.
    #[must_use]
    pub fn bounds(&self, side: Side, size: SidebarSize) -> WidthBounds {
        match side {
            Side::Lhs => self.lhs.get(size),
            Side::Rhs => self.rhs.get(size),
        }
    }
}
