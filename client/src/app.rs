//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::channel::ChannelPage;
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, loads the signed-in user, keeps the
/// sidebar size class in step with the viewport, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let sync_size = move || {
            if let Some(size) = crate::util::viewport::current_size() {
                ui.maybe_update(|u| crate::util::viewport::apply_size(u, size));
            }
        };
        sync_size();
        let resize = window_event_listener(leptos::ev::resize, move |_ev: web_sys::UiEvent| sync_size());
        on_cleanup(move || resize.remove());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-ui.css"/>
        <Title text="Channels"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChannelPage/>
                <Route path=(StaticSegment("channels"), ParamSegment("channel")) view=ChannelPage/>
            </Routes>
        </Router>
    }
}
