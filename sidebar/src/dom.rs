//! `web_sys` implementation of [`PanelView`].
//!
//! Writes go straight to the panel's inline style and class list. Timed class
//! removal uses a forgotten `gloo_timers` timeout, frame-deferred removal uses
//! `requestAnimationFrame`, and the drag cursor is set on `<body>` so it
//! survives the pointer leaving the handle. Requires a browser environment.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use crate::view::{ClassTarget, Cursor, PanelView};

/// Panel and resize-handle elements of one mounted sidebar.
#[derive(Debug, Clone)]
pub struct DomPanelView {
    panel: Option<HtmlElement>,
    handle: Option<HtmlElement>,
}

impl DomPanelView {
    #[must_use]
    pub fn new(panel: HtmlElement, handle: Option<HtmlElement>) -> Self {
        Self { panel: Some(panel), handle }
    }

    /// Drop the element references; later writes are ignored.
    pub fn detach(&mut self) {
        self.panel = None;
        self.handle = None;
    }

    fn element(&self, target: ClassTarget) -> Option<&HtmlElement> {
        match target {
            ClassTarget::Panel => self.panel.as_ref(),
            ClassTarget::Handle => self.handle.as_ref(),
        }
    }
}

fn remove_class_from(element: &HtmlElement, class: &str) {
    if let Err(err) = element.class_list().remove_1(class) {
        log::debug!("failed to remove class {class}: {err:?}");
    }
}

impl PanelView for DomPanelView {
    fn rendered_width(&self) -> Option<f64> {
        self.panel.as_ref().map(|el| f64::from(el.offset_width()))
    }

    fn set_width(&self, px: u32) {
        let Some(panel) = self.panel.as_ref() else {
            return;
        };
        if let Err(err) = panel.style().set_property("width", &format!("{px}px")) {
            log::debug!("failed to set sidebar width: {err:?}");
        }
    }

    fn clear_width(&self) {
        let Some(panel) = self.panel.as_ref() else {
            return;
        };
        if let Err(err) = panel.style().remove_property("width") {
            log::debug!("failed to clear sidebar width: {err:?}");
        }
    }

    fn add_class(&self, target: ClassTarget, class: &'static str) {
        let Some(element) = self.element(target) else {
            return;
        };
        if let Err(err) = element.class_list().add_1(class) {
            log::debug!("failed to add class {class}: {err:?}");
        }
    }

    fn remove_class(&self, target: ClassTarget, class: &'static str) {
        if let Some(element) = self.element(target) {
            remove_class_from(element, class);
        }
    }

    fn remove_class_after(&self, target: ClassTarget, class: &'static str, delay_ms: u32) {
        let Some(element) = self.element(target).cloned() else {
            return;
        };
        Timeout::new(delay_ms, move || remove_class_from(&element, class)).forget();
    }

    fn remove_class_next_frame(&self, target: ClassTarget, class: &'static str) {
        let Some(element) = self.element(target).cloned() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            remove_class_from(&element, class);
            return;
        };
        let for_frame = element.clone();
        let callback = Closure::once_into_js(move || remove_class_from(&for_frame, class));
        if window.request_animation_frame(callback.unchecked_ref::<js_sys::Function>()).is_err() {
            remove_class_from(&element, class);
        }
    }

    fn set_cursor(&self, cursor: Cursor) {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = match cursor.css_value() {
            Some(value) => style.set_property("cursor", value),
            None => style.remove_property("cursor").map(|_| ()),
        };
        if let Err(err) = result {
            log::debug!("failed to set cursor: {err:?}");
        }
    }
}
