//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the channel layout chrome while reading/writing shared
//! state from Leptos context providers.

pub mod left_panel;
pub mod resizable_sidebar;
pub mod right_panel;
