//! Drag-resizable sidebar container shared by the left and right panels.
//!
//! ARCHITECTURE
//! ============
//! Width changes bypass the reactive tree: the component hands its panel and
//! handle elements to a `sidebar::panel::ResizablePanel`, which writes inline
//! widths directly. Leptos only tracks the size class and the signed-in user
//! and forwards them to the controller when they change.
//!
//! Pointer move and release are window listeners for the component's whole
//! lifetime so a drag keeps tracking after the pointer leaves the handle.
//! Unmounting mid-drag abandons the drag and releases the elements.

use leptos::prelude::*;
use sidebar::size::{self, Side};

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use sidebar::config::SidebarConfig;
#[cfg(feature = "hydrate")]
use sidebar::dom::DomPanelView;
#[cfg(feature = "hydrate")]
use sidebar::panel::ResizablePanel;
#[cfg(feature = "hydrate")]
use sidebar::storage::LocalStorage;
#[cfg(feature = "hydrate")]
use send_wrapper::SendWrapper;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
type Controller = Rc<RefCell<Option<ResizablePanel<DomPanelView, LocalStorage>>>>;

fn panel_class(side: Side) -> &'static str {
    match side {
        Side::Lhs => "sidebar sidebar--left",
        Side::Rhs => "sidebar sidebar--right",
    }
}

fn handle_class(side: Side) -> &'static str {
    match side {
        Side::Lhs => "sidebar__resize-handle sidebar__resize-handle--right-edge",
        Side::Rhs => "sidebar__resize-handle sidebar__resize-handle--left-edge",
    }
}

#[cfg(feature = "hydrate")]
fn with_controller(controller: &Controller, f: impl FnOnce(&mut ResizablePanel<DomPanelView, LocalStorage>)) {
    if let Some(panel) = controller.borrow_mut().as_mut() {
        f(panel);
    }
}

/// Sidebar container with a drag handle on its inner edge.
#[component]
pub fn ResizableSidebar(side: Side, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let handle_ref = NodeRef::<leptos::html::Div>::new();

    let resizable = move || ui.get().is_resizable();
    let overlap = move || size::should_overlap(side, ui.get().sidebar_size);

    #[cfg(feature = "hydrate")]
    let controller: Controller = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        let controller = Rc::clone(&controller);
        Effect::new(move || {
            let Some(panel_el) = panel_ref.get() else {
                return;
            };
            let size = ui.with(|u| u.sidebar_size);
            let user_id = auth.with(AuthState::user_id);

            let mut slot = controller.borrow_mut();
            if let Some(panel) = slot.as_mut() {
                panel.set_size(size);
                if panel.user_id() != user_id.as_deref() {
                    panel.set_user(user_id);
                    panel.mount();
                }
                return;
            }

            let handle_el = handle_ref.get_untracked().map(web_sys::HtmlElement::from);
            let view = DomPanelView::new(panel_el.into(), handle_el);
            let mut panel =
                ResizablePanel::new(side, size, SidebarConfig::default(), view, LocalStorage).with_user(user_id);
            panel.mount();
            *slot = Some(panel);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let move_listener = {
            let controller = Rc::clone(&controller);
            window_event_listener(leptos::ev::mousemove, move |ev: web_sys::MouseEvent| {
                with_controller(&controller, |panel| panel.pointer_move(f64::from(ev.client_x())));
            })
        };
        let up_listener = {
            let controller = Rc::clone(&controller);
            window_event_listener(leptos::ev::mouseup, move |_ev: web_sys::MouseEvent| {
                with_controller(&controller, ResizablePanel::pointer_up);
            })
        };
        let teardown = SendWrapper::new(Rc::clone(&controller));
        on_cleanup(move || {
            move_listener.remove();
            up_listener.remove();
            if let Some(mut panel) = teardown.borrow_mut().take() {
                panel.unmount();
                panel.view_mut().detach();
            }
        });
    }

    let on_handle_mousedown = {
        #[cfg(feature = "hydrate")]
        {
            let controller = Rc::clone(&controller);
            move |ev: leptos::ev::MouseEvent| {
                if ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                with_controller(&controller, |panel| panel.pointer_down(f64::from(ev.client_x())));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_handle_dblclick = {
        #[cfg(feature = "hydrate")]
        {
            let controller = Rc::clone(&controller);
            move |_ev: leptos::ev::MouseEvent| {
                with_controller(&controller, ResizablePanel::double_click);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div
            node_ref=panel_ref
            class=panel_class(side)
            class:sidebar--resizable=resizable
            class:sidebar--overlap=overlap
        >
            {children()}
            <div
                node_ref=handle_ref
                class=handle_class(side)
                class:sidebar__resize-handle--disabled=move || !resizable()
                on:mousedown=on_handle_mousedown
                on:dblclick=on_handle_dblclick
            ></div>
        </div>
    }
}
