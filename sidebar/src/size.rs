//! Size classes and the size-class mapper.
//!
//! The viewport width picks a coarse [`SidebarSize`]; each side then maps that
//! class to a [`WidthBounds`] triple. The mapping is a total lookup table with
//! one entry per class, so there is no runtime failure mode.

#[cfg(test)]
#[path = "size_test.rs"]
mod size_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    LARGE_BREAKPOINT_PX, LHS_DRAGGED_CLASS, LHS_WIDTHS, MEDIUM_BREAKPOINT_PX, RHS_DRAGGED_CLASS, RHS_WIDTHS,
    XLARGE_BREAKPOINT_PX,
};

/// Which sidebar a panel is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Channel list on the left of the centre view.
    Lhs,
    /// Thread/search panel on the right of the centre view.
    Rhs,
}

impl Side {
    /// Suffix appended to the per-user storage key.
    #[must_use]
    pub fn storage_suffix(self) -> &'static str {
        match self {
            Self::Lhs => "lhs_width",
            Self::Rhs => "rhs_width",
        }
    }

    /// Class added to the panel while its handle is dragged.
    #[must_use]
    pub fn dragged_class(self) -> &'static str {
        match self {
            Self::Lhs => LHS_DRAGGED_CLASS,
            Self::Rhs => RHS_DRAGGED_CLASS,
        }
    }
}

/// Breakpoint-driven width regime of the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarSize {
    /// Phone-sized viewport; sidebars have a fixed width.
    Small,
    /// Tablet-sized viewport; the right sidebar overlaps the centre view.
    Medium,
    /// Regular desktop viewport.
    #[default]
    Large,
    /// Wide desktop viewport.
    XLarge,
}

impl SidebarSize {
    /// Every size class, smallest first.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];

    /// Size class for a viewport of `width` CSS pixels.
    #[must_use]
    pub fn from_viewport_width(width: f64) -> Self {
        if width < MEDIUM_BREAKPOINT_PX {
            Self::Small
        } else if width < LARGE_BREAKPOINT_PX {
            Self::Medium
        } else if width < XLARGE_BREAKPOINT_PX {
            Self::Large
        } else {
            Self::XLarge
        }
    }

    /// Position of this class in the per-side width tables.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
            Self::XLarge => 3,
        }
    }
}

/// Pixel bounds for one side at one size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl WidthBounds {
    #[must_use]
    pub const fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }

    /// Whether `min <= default <= max`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.default && self.default <= self.max
    }

    /// Clamp `width` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, width: u32) -> u32 {
        width.max(self.min).min(self.max)
    }
}

/// Built-in bounds for `side` at `size`.
#[must_use]
pub fn bounds(side: Side, size: SidebarSize) -> WidthBounds {
    match side {
        Side::Lhs => LHS_WIDTHS[size.index()],
        Side::Rhs => RHS_WIDTHS[size.index()],
    }
}

/// Whether the user may drag the panel at this size class.
#[must_use]
pub fn is_resizable(size: SidebarSize) -> bool {
    size != SidebarSize::Small
}

/// Whether the panel floats over the centre view instead of pushing it.
#[must_use]
pub fn should_overlap(side: Side, size: SidebarSize) -> bool {
    side == Side::Rhs && size == SidebarSize::Medium
}
