//! Mutable view handle for a resizable panel.
//!
//! Width changes are written straight to the panel element instead of going
//! through the reactive render tree, so a drag never re-renders the sidebar
//! contents. [`PanelView`] is that imperative handle; [`crate::dom`] backs it
//! with real DOM nodes and tests back it with a recorder.

/// Element a class change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassTarget {
    /// The sidebar container whose width is being changed.
    Panel,
    /// The thin drag handle on the sidebar's edge.
    Handle,
}

/// Global pointer cursor shown while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Whatever the stylesheet says.
    Default,
    /// Horizontal resize cursor.
    ColResize,
}

impl Cursor {
    /// Inline `cursor` value, or `None` to remove the override.
    #[must_use]
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::ColResize => Some("col-resize"),
        }
    }
}

/// Imperative handle onto a mounted panel.
///
/// Every method must tolerate the panel being unmounted and silently do
/// nothing in that case.
pub trait PanelView {
    /// Current rendered width in CSS pixels, or `None` when unmounted.
    fn rendered_width(&self) -> Option<f64>;

    /// Write `px` as the panel's inline width.
    fn set_width(&self, px: u32);

    /// Drop the inline width so stylesheet rules apply again.
    fn clear_width(&self);

    fn add_class(&self, target: ClassTarget, class: &'static str);

    fn remove_class(&self, target: ClassTarget, class: &'static str);

    /// Remove `class` once `delay_ms` has elapsed. Not cancellable.
    fn remove_class_after(&self, target: ClassTarget, class: &'static str, delay_ms: u32);

    /// Remove `class` on the next animation frame.
    fn remove_class_next_frame(&self, target: ClassTarget, class: &'static str);

    /// Set the document-wide cursor.
    fn set_cursor(&self, cursor: Cursor);
}
