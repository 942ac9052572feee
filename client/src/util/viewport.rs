//! Viewport size-class tracking.
//!
//! Reads `window.innerWidth` and maps it to a `SidebarSize`. Requires a
//! browser environment; server rendering keeps the default size class.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use sidebar::size::SidebarSize;

use crate::state::ui::UiState;

/// Size class of the current browser viewport, if there is one.
pub fn current_size() -> Option<SidebarSize> {
    #[cfg(feature = "hydrate")]
    {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        Some(SidebarSize::from_viewport_width(width))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write `size` into `ui`, returning whether it changed.
pub fn apply_size(ui: &mut UiState, size: SidebarSize) -> bool {
    if ui.sidebar_size == size {
        return false;
    }
    ui.sidebar_size = size;
    true
}
