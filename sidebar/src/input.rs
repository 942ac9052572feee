//! Drag session state and resize direction.
//!
//! A [`DragSession`] lives from pointer-down on the resize handle to the next
//! pointer-up anywhere in the window. It only remembers the previous pointer
//! X coordinate, so each move contributes an incremental delta.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::size::Side;

/// Active gesture on the resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// Handle is held down.
    Active {
        /// Client X of the previous pointer event.
        anchor_x: f64,
    },
}

impl DragSession {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Which horizontal pointer movement grows the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    /// Handle on the right edge; moving right grows the panel.
    Right,
    /// Handle on the left edge; moving left grows the panel.
    Left,
}

impl ResizeDirection {
    #[must_use]
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Lhs => Self::Right,
            Side::Rhs => Self::Left,
        }
    }

    /// Width change produced by moving the pointer from `anchor_x` to `x`.
    #[must_use]
    pub fn width_delta(self, anchor_x: f64, x: f64) -> f64 {
        match self {
            Self::Right => x - anchor_x,
            Self::Left => anchor_x - x,
        }
    }
}
