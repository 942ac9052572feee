//! Local UI chrome state (sidebar size class and panel expansion).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so layout
//! controls can evolve independently of server data. Sidebar widths are not
//! stored here: they are written straight to the panel elements while
//! dragging and persisted by the `sidebar` crate.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use sidebar::size::{self, Side, SidebarSize};

/// UI state for the channel layout chrome.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Breakpoint class of the current viewport.
    pub sidebar_size: SidebarSize,
    pub left_panel_expanded: bool,
    pub right_panel_expanded: bool,
    pub right_tab: RightTab,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_size: SidebarSize::default(),
            left_panel_expanded: true,
            right_panel_expanded: false,
            right_tab: RightTab::Thread,
        }
    }
}

impl UiState {
    /// Whether the sidebars may be drag-resized at the current size class.
    #[must_use]
    pub fn is_resizable(&self) -> bool {
        size::is_resizable(self.sidebar_size)
    }

    /// Whether the right panel floats over the centre channel.
    #[must_use]
    pub fn right_panel_overlaps(&self) -> bool {
        self.right_panel_expanded && size::should_overlap(Side::Rhs, self.sidebar_size)
    }

    /// Open `tab` in the right panel, or close it if it is already showing.
    pub fn toggle_right_tab(&mut self, tab: RightTab) {
        if self.right_panel_expanded && self.right_tab == tab {
            self.right_panel_expanded = false;
        } else {
            self.right_panel_expanded = true;
            self.right_tab = tab;
        }
    }
}

/// Views available in the right panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RightTab {
    #[default]
    Thread,
    Search,
    Mentions,
}

impl RightTab {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Thread => "Thread",
            Self::Search => "Search Results",
            Self::Mentions => "Recent Mentions",
        }
    }
}
