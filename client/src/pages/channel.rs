//! Channel page: left sidebar, centre channel, and right sidebar.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::left_panel::LeftPanel;
use crate::components::right_panel::RightPanel;
use crate::state::ui::{RightTab, UiState};

const DEFAULT_CHANNEL: &str = "town-square";

/// Three-column channel layout.
#[component]
pub fn ChannelPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    let channel = move || params.with(|p| p.get("channel").unwrap_or_else(|| DEFAULT_CHANNEL.to_owned()));
    let overlapped = move || ui.get().right_panel_overlaps();
    let toggle = move |tab: RightTab| ui.update(|u| u.toggle_right_tab(tab));
    let toggle_left = move |_| ui.update(|u| u.left_panel_expanded = !u.left_panel_expanded);

    view! {
        <div class="channel-layout">
            <LeftPanel/>
            <main class="channel-view" class:channel-view--overlapped=overlapped>
                <header class="channel-view__header">
                    <button class="channel-view__menu" title="Toggle channels" on:click=toggle_left>
                        "\u{2630}"
                    </button>
                    <h1 class="channel-view__title">{move || format!("# {}", channel())}</h1>
                    <button class="channel-view__action" on:click=move |_| toggle(RightTab::Search)>
                        "Search"
                    </button>
                    <button class="channel-view__action" on:click=move |_| toggle(RightTab::Mentions)>
                        "@"
                    </button>
                    <button class="channel-view__action" on:click=move |_| toggle(RightTab::Thread)>
                        "Threads"
                    </button>
                </header>
                <section class="channel-view__posts"></section>
            </main>
            <RightPanel/>
        </div>
    }
}
