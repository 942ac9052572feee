use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_large_layout() {
    let state = UiState::default();
    assert_eq!(state.sidebar_size, SidebarSize::Large);
    assert!(state.is_resizable());
}

#[test]
fn ui_state_default_panels() {
    let state = UiState::default();
    assert!(state.left_panel_expanded);
    assert!(!state.right_panel_expanded);
    assert_eq!(state.right_tab, RightTab::Thread);
}

// =============================================================
// Derived layout flags
// =============================================================

#[test]
fn small_layout_is_not_resizable() {
    let state = UiState { sidebar_size: SidebarSize::Small, ..UiState::default() };
    assert!(!state.is_resizable());
}

#[test]
fn right_panel_overlaps_only_when_open_at_medium() {
    let mut state = UiState { sidebar_size: SidebarSize::Medium, ..UiState::default() };
    assert!(!state.right_panel_overlaps());
    state.right_panel_expanded = true;
    assert!(state.right_panel_overlaps());
    state.sidebar_size = SidebarSize::XLarge;
    assert!(!state.right_panel_overlaps());
}

// =============================================================
// RightTab
// =============================================================

#[test]
fn toggle_right_tab_opens_then_closes() {
    let mut state = UiState::default();
    state.toggle_right_tab(RightTab::Search);
    assert!(state.right_panel_expanded);
    assert_eq!(state.right_tab, RightTab::Search);
    state.toggle_right_tab(RightTab::Search);
    assert!(!state.right_panel_expanded);
}

#[test]
fn toggle_right_tab_switches_without_closing() {
    let mut state = UiState::default();
    state.toggle_right_tab(RightTab::Thread);
    state.toggle_right_tab(RightTab::Mentions);
    assert!(state.right_panel_expanded);
    assert_eq!(state.right_tab, RightTab::Mentions);
}

#[test]
fn right_tab_titles_are_distinct() {
    assert_ne!(RightTab::Thread.title(), RightTab::Search.title());
    assert_ne!(RightTab::Search.title(), RightTab::Mentions.title());
}
