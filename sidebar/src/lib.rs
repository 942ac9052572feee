//! Resizable sidebar engine for the left- and right-hand chat panels.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! sizing rules for both sidebars: mapping the viewport's size class to width
//! bounds, tracking the drag session between pointer-down and pointer-up on
//! the resize handle, and remembering the last chosen width per user. The
//! host component is responsible only for wiring DOM events into a
//! [`panel::ResizablePanel`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`panel`] | Top-level controller binding core, view, and store |
//! | [`resize`] | Testable [`resize::ResizeCore`] state machine and [`resize::Action`]s |
//! | [`input`] | Drag session and resize direction types |
//! | [`size`] | Size classes, width bounds, and the size-class mapper |
//! | [`config`] | Width tables and indicator timing, overridable from JSON |
//! | [`storage`] | Persisted width store over `localStorage` or memory |
//! | [`view`] | The mutable view handle the controller writes through |
//! | [`dom`] | `web_sys` implementation of [`view::PanelView`] |
//! | [`consts`] | Shared constants (class names, breakpoints, width tables) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod input;
pub mod panel;
pub mod resize;
pub mod size;
pub mod storage;
pub mod view;
