//! REST API helpers for communicating with the chat server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed user fetch
//! degrades to signed-out behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

#[cfg(any(test, feature = "hydrate"))]
const CURRENT_USER_ENDPOINT: &str = "/api/v4/users/me";

#[cfg(any(test, feature = "hydrate"))]
fn current_user_failed_message(status: u16) -> String {
    format!("current user request failed: {status}")
}

/// Fetch the currently authenticated user.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(CURRENT_USER_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(err) => {
                log::debug!("current user request error: {err}");
                return None;
            }
        };
        if !resp.ok() {
            log::debug!("{}", current_user_failed_message(resp.status()));
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
