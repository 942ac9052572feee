//! Resizable panel controller.
//!
//! ARCHITECTURE
//! ============
//! [`ResizablePanel`] wires a [`ResizeCore`] to a [`PanelView`] and a
//! [`PersistedWidthStore`]. Host components forward raw pointer coordinates;
//! the controller reads the rendered width from the view, asks the core what
//! to do, and applies the resulting actions. If the view reports no element,
//! every handler is a no-op.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::config::SidebarConfig;
use crate::resize::{Action, ResizeCore};
use crate::size::{Side, SidebarSize};
use crate::storage::{PersistedWidthStore, StorageBackend};
use crate::view::PanelView;

/// One sidebar bound to its view, its width store, and the signed-in user.
pub struct ResizablePanel<V, B> {
    core: ResizeCore,
    view: V,
    store: PersistedWidthStore<B>,
    user_id: Option<String>,
}

impl<V: PanelView, B: StorageBackend> ResizablePanel<V, B> {
    #[must_use]
    pub fn new(side: Side, size: SidebarSize, config: SidebarConfig, view: V, backend: B) -> Self {
        Self {
            core: ResizeCore::new(side, size, config),
            view,
            store: PersistedWidthStore::new(backend, side),
            user_id: None,
        }
    }

    /// Scope persisted widths to `user_id`.
    #[must_use]
    pub fn with_user(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn set_user(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    // --- Queries ---

    #[must_use]
    pub fn core(&self) -> &ResizeCore {
        &self.core
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn store(&self) -> &PersistedWidthStore<B> {
        &self.store
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Width remembered for the current user, if any.
    #[must_use]
    pub fn persisted_width(&self) -> Option<u32> {
        self.user_id.as_deref().and_then(|id| self.store.get(id))
    }

    fn is_mounted(&self) -> bool {
        self.view.rendered_width().is_some()
    }

    // --- Lifecycle ---

    /// Seed the panel width once the element is mounted. During a drag the
    /// reseed waits for [`Self::pointer_up`].
    pub fn mount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        let persisted = self.persisted_width();
        let actions = self.core.initialize_or_defer(persisted);
        self.apply(actions);
    }

    /// Tear down: abandon any drag so the cursor and drag class are reset.
    pub fn unmount(&mut self) {
        let actions = self.core.cancel_drag();
        self.apply(actions);
    }

    /// React to a size-class change from the viewport.
    pub fn set_size(&mut self, size: SidebarSize) {
        if size == self.core.size() {
            return;
        }
        let persisted = self.persisted_width();
        let actions = self.core.set_size(size, persisted);
        if self.is_mounted() {
            self.apply(actions);
        }
    }

    // --- Pointer input ---

    pub fn pointer_down(&mut self, client_x: f64) {
        if !self.is_mounted() {
            return;
        }
        let actions = self.core.on_pointer_down(client_x);
        self.apply(actions);
    }

    pub fn pointer_move(&mut self, client_x: f64) {
        let rendered = self.view.rendered_width();
        let actions = self.core.on_pointer_move(client_x, rendered);
        self.apply(actions);
    }

    pub fn pointer_up(&mut self) {
        let rendered = self.view.rendered_width();
        let actions = self.core.on_pointer_up(rendered);
        self.apply(actions);
        if !self.core.session().is_active() && self.core.take_pending_initialize() {
            self.mount();
        }
    }

    pub fn double_click(&mut self) {
        if !self.is_mounted() {
            return;
        }
        let actions = self.core.on_double_click();
        self.apply(actions);
    }

    fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::SetWidth(px) => self.view.set_width(px),
                Action::ClearWidth => self.view.clear_width(),
                Action::AddClass { target, class } => self.view.add_class(target, class),
                Action::RemoveClass { target, class } => self.view.remove_class(target, class),
                Action::RemoveClassAfter { target, class, delay_ms } => {
                    self.view.remove_class_after(target, class, delay_ms);
                }
                Action::RemoveClassNextFrame { target, class } => self.view.remove_class_next_frame(target, class),
                Action::SetCursor(cursor) => self.view.set_cursor(cursor),
                Action::PersistWidth(px) => {
                    if let Some(user_id) = self.user_id.as_deref() {
                        self.store.set(user_id, px);
                    }
                }
            }
        }
    }
}
