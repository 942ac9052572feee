//! Left sidebar with the team header and channel list.
//!
//! ARCHITECTURE
//! ============
//! Sizing is delegated to `ResizableSidebar`; this component only renders
//! navigation content and hides itself when the panel is collapsed.

use leptos::prelude::*;
use sidebar::size::Side;

use crate::components::resizable_sidebar::ResizableSidebar;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Channels shown until the channel list is loaded from the server.
const DEFAULT_CHANNELS: [&str; 2] = ["town-square", "off-topic"];

/// Collapsible left sidebar.
#[component]
pub fn LeftPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let expanded = move || ui.get().left_panel_expanded;
    let display_name = move || {
        auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()))
            .unwrap_or_default()
    };

    view! {
        <Show when=expanded>
            <ResizableSidebar side=Side::Lhs>
                <div class="sidebar__header">
                    <span class="sidebar__user">{display_name}</span>
                </div>
                <nav class="sidebar__channels" aria-label="Channels">
                    <div class="sidebar__category">"CHANNELS"</div>
                    {DEFAULT_CHANNELS
                        .iter()
                        .map(|name| {
                            view! {
                                <a class="sidebar__channel" href=format!("/channels/{name}")>
                                    {format!("# {name}")}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </ResizableSidebar>
        </Show>
    }
}
