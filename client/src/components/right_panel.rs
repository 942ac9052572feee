//! Right sidebar hosting thread, search, and mention views.
//!
//! ARCHITECTURE
//! ============
//! One resizable container is shared by every tab so the user's dragged width
//! carries across views. At the medium size class the panel overlaps the
//! centre channel instead of squeezing it.

use leptos::prelude::*;
use sidebar::size::Side;

use crate::components::resizable_sidebar::ResizableSidebar;
use crate::state::ui::UiState;

/// Collapsible right sidebar.
#[component]
pub fn RightPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let expanded = move || ui.get().right_panel_expanded;
    let title = move || ui.get().right_tab.title();
    let close = move |_| ui.update(|u| u.right_panel_expanded = false);

    view! {
        <Show when=expanded>
            <ResizableSidebar side=Side::Rhs>
                <div class="sidebar__header">
                    <span class="sidebar__title">{title}</span>
                    <button class="sidebar__close" title="Close" on:click=close>
                        "\u{2715}"
                    </button>
                </div>
                <div class="sidebar__content"></div>
            </ResizableSidebar>
        </Show>
    }
}
