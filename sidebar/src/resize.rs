//! Drag-resize state machine.
//!
//! [`ResizeCore`] holds everything that does not depend on the DOM: the side,
//! the current size class and its bounds, and the drag session. Each handler
//! receives the panel's rendered width where it needs one (`None` when the
//! element is gone) and returns the [`Action`]s the host must apply.
//!
//! Width changes are incremental. Every move adds `x - anchor_x` (mirrored for
//! the right-hand panel) to the rendered width and then moves the anchor, so
//! coalesced or dropped events never accumulate drift.
//!
//! A candidate width past a limit snaps to that limit and flashes the handle,
//! unless the panel already sits on the limit, in which case the move is
//! rejected outright. Reversing the pointer brings the next candidate back in
//! bounds.
//!
//! Re-initialization requested during a drag (a new size class or a new user)
//! is deferred until the pointer is released, so the width under the pointer
//! never jumps mid-drag.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::config::SidebarConfig;
use crate::consts::{LIMIT_REACHED_CLASS, PREVENT_ANIMATION_CLASS};
use crate::input::{DragSession, ResizeDirection};
use crate::size::{self, Side, SidebarSize, WidthBounds};
use crate::view::{ClassTarget, Cursor};

/// DOM mutations requested by [`ResizeCore`] handlers, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the panel's inline width.
    SetWidth(u32),
    /// Remove the panel's inline width.
    ClearWidth,
    AddClass { target: ClassTarget, class: &'static str },
    RemoveClass { target: ClassTarget, class: &'static str },
    /// Fire-and-forget class removal after a delay.
    RemoveClassAfter { target: ClassTarget, class: &'static str, delay_ms: u32 },
    /// Class removal deferred to the next animation frame.
    RemoveClassNextFrame { target: ClassTarget, class: &'static str },
    SetCursor(Cursor),
    /// Remember this width for the signed-in user.
    PersistWidth(u32),
}

/// Core resize state: all logic that does not touch the panel element.
#[derive(Debug, Clone)]
pub struct ResizeCore {
    side: Side,
    size: SidebarSize,
    bounds: WidthBounds,
    direction: ResizeDirection,
    config: SidebarConfig,
    session: DragSession,
    reinit_pending: bool,
}

impl ResizeCore {
    #[must_use]
    pub fn new(side: Side, size: SidebarSize, config: SidebarConfig) -> Self {
        Self {
            side,
            size,
            bounds: config.bounds(side, size),
            direction: ResizeDirection::for_side(side),
            config,
            session: DragSession::Idle,
            reinit_pending: false,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn size(&self) -> SidebarSize {
        self.size
    }

    #[must_use]
    pub fn bounds(&self) -> WidthBounds {
        self.bounds
    }

    #[must_use]
    pub fn session(&self) -> DragSession {
        self.session
    }

    #[must_use]
    pub fn is_resizable(&self) -> bool {
        size::is_resizable(self.size)
    }

    #[must_use]
    pub fn should_overlap(&self) -> bool {
        size::should_overlap(self.side, self.size)
    }

    // --- Lifecycle ---

    /// Initial width on mount: the persisted width if any, else the default,
    /// clamped to the current bounds. Transitions are held off for one frame.
    #[must_use]
    pub fn initialize(&self, persisted: Option<u32>) -> Vec<Action> {
        if !self.is_resizable() {
            return Vec::new();
        }
        let width = self.bounds.clamp(persisted.unwrap_or(self.bounds.default));
        log::trace!("{:?} sidebar initialized at {width}px", self.side);
        without_transition(width)
    }

    /// [`Self::initialize`], or mark it pending while a drag is in progress.
    pub fn initialize_or_defer(&mut self, persisted: Option<u32>) -> Vec<Action> {
        if self.session.is_active() {
            self.reinit_pending = true;
            log::trace!("{:?} sidebar re-initialization deferred until drag ends", self.side);
            return Vec::new();
        }
        self.initialize(persisted)
    }

    /// Whether a deferred re-initialization was pending; clears the flag.
    pub fn take_pending_initialize(&mut self) -> bool {
        std::mem::take(&mut self.reinit_pending)
    }

    #[must_use]
    pub fn has_pending_initialize(&self) -> bool {
        self.reinit_pending
    }

    /// Switch to a new size class and re-derive bounds.
    pub fn set_size(&mut self, size: SidebarSize, persisted: Option<u32>) -> Vec<Action> {
        self.size = size;
        self.bounds = self.config.bounds(self.side, size);
        if self.is_resizable() {
            return self.initialize_or_defer(persisted);
        }
        self.reinit_pending = false;
        let mut actions = self.end_session();
        actions.push(Action::ClearWidth);
        actions
    }

    /// Abandon any drag without persisting, e.g. when the panel is torn down.
    pub fn cancel_drag(&mut self) -> Vec<Action> {
        self.reinit_pending = false;
        self.end_session()
    }

    // --- Pointer input ---

    /// Pointer-down on the resize handle.
    pub fn on_pointer_down(&mut self, x: f64) -> Vec<Action> {
        if !self.is_resizable() {
            return Vec::new();
        }
        self.session = DragSession::Active { anchor_x: x };
        log::trace!("{:?} sidebar drag started at x={x}", self.side);
        vec![
            Action::SetCursor(Cursor::ColResize),
            Action::AddClass { target: ClassTarget::Panel, class: self.side.dragged_class() },
        ]
    }

    /// Window-level pointer move. Ignored unless a drag is active.
    pub fn on_pointer_move(&mut self, x: f64, rendered: Option<f64>) -> Vec<Action> {
        let DragSession::Active { anchor_x } = self.session else {
            return Vec::new();
        };
        let Some(rendered) = rendered else {
            return Vec::new();
        };
        self.session = DragSession::Active { anchor_x: x };

        let delta = self.direction.width_delta(anchor_x, x);
        if delta.abs() < f64::EPSILON {
            return Vec::new();
        }
        let candidate = rendered + delta;
        let min = f64::from(self.bounds.min);
        let max = f64::from(self.bounds.max);

        if candidate > max {
            if rendered >= max {
                return Vec::new();
            }
            return self.snap_to(self.bounds.max);
        }
        if candidate < min {
            if rendered <= min {
                return Vec::new();
            }
            return self.snap_to(self.bounds.min);
        }
        vec![Action::SetWidth(to_px(candidate))]
    }

    /// Window-level pointer release. Ends the drag and persists the result,
    /// unless a re-initialization is pending and will replace the width.
    pub fn on_pointer_up(&mut self, rendered: Option<f64>) -> Vec<Action> {
        if !self.session.is_active() {
            return Vec::new();
        }
        let Some(rendered) = rendered else {
            self.session = DragSession::Idle;
            return vec![Action::SetCursor(Cursor::Default)];
        };
        let mut actions = self.end_session();
        if !self.reinit_pending {
            actions.push(Action::PersistWidth(to_px(rendered)));
        }
        actions
    }

    /// Double-click on the handle: restore the default width without animating.
    #[must_use]
    pub fn on_double_click(&self) -> Vec<Action> {
        if !self.is_resizable() {
            return Vec::new();
        }
        let width = self.bounds.default;
        let mut actions = without_transition(width);
        actions.push(Action::PersistWidth(width));
        actions
    }

    // --- Internals ---

    fn end_session(&mut self) -> Vec<Action> {
        if !self.session.is_active() {
            return Vec::new();
        }
        self.session = DragSession::Idle;
        log::trace!("{:?} sidebar drag ended", self.side);
        vec![
            Action::SetCursor(Cursor::Default),
            Action::RemoveClass { target: ClassTarget::Panel, class: self.side.dragged_class() },
        ]
    }

    fn snap_to(&self, width: u32) -> Vec<Action> {
        vec![
            Action::SetWidth(width),
            Action::AddClass { target: ClassTarget::Handle, class: LIMIT_REACHED_CLASS },
            Action::RemoveClassAfter {
                target: ClassTarget::Handle,
                class: LIMIT_REACHED_CLASS,
                delay_ms: self.config.limit_indicator_ms,
            },
        ]
    }
}

fn without_transition(width: u32) -> Vec<Action> {
    vec![
        Action::AddClass { target: ClassTarget::Panel, class: PREVENT_ANIMATION_CLASS },
        Action::SetWidth(width),
        Action::RemoveClassNextFrame { target: ClassTarget::Panel, class: PREVENT_ANIMATION_CLASS },
    ]
}

/// Round a non-negative CSS width to whole pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(width: f64) -> u32 {
    width.max(0.0).round() as u32
}
