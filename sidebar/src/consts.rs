//! Shared constants for the sidebar crate.

use crate::size::WidthBounds;

// ── Breakpoints ─────────────────────────────────────────────────

/// Viewport width (CSS px) at which the layout leaves the small class.
pub const MEDIUM_BREAKPOINT_PX: f64 = 768.0;

/// Viewport width at which the layout enters the large class.
pub const LARGE_BREAKPOINT_PX: f64 = 1200.0;

/// Viewport width at which the layout enters the extra-large class.
pub const XLARGE_BREAKPOINT_PX: f64 = 1680.0;

// ── Width tables ────────────────────────────────────────────────
//
// Ordered small, medium, large, extra-large.

/// Left-hand sidebar bounds per size class.
pub const LHS_WIDTHS: [WidthBounds; 4] = [
    WidthBounds::new(240, 240, 240),
    WidthBounds::new(200, 264, 240),
    WidthBounds::new(200, 304, 240),
    WidthBounds::new(200, 440, 240),
];

/// Right-hand sidebar bounds per size class.
pub const RHS_WIDTHS: [WidthBounds; 4] = [
    WidthBounds::new(400, 400, 400),
    WidthBounds::new(304, 400, 400),
    WidthBounds::new(304, 464, 400),
    WidthBounds::new(304, 776, 500),
];

// ── Feedback ────────────────────────────────────────────────────

/// How long the resize handle shows the limit-reached indicator.
pub const LIMIT_INDICATOR_MS: u32 = 800;

// ── CSS ─────────────────────────────────────────────────────────

/// Class on the resize handle while a drag is pinned at a limit.
pub const LIMIT_REACHED_CLASS: &str = "limit-reached";

/// Class on the left panel while its handle is being dragged.
pub const LHS_DRAGGED_CLASS: &str = "sidebar--left-dragged";

/// Class on the right panel while its handle is being dragged.
pub const RHS_DRAGGED_CLASS: &str = "sidebar--right-dragged";

/// Class that disables width transitions for one frame.
pub const PREVENT_ANIMATION_CLASS: &str = "prevent-animation";

// ── Storage ─────────────────────────────────────────────────────

/// Prefix shared by every per-user storage key.
pub const STORAGE_USER_PREFIX: &str = "user_";
