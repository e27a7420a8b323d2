//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages and the in-app route guard apply identical redirect
//! behavior, whether navigation happens by full page load or client routing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::guard::{self, GuardDecision, LOGIN_PATH, SESSION_COOKIE};
use crate::state::session::{BrowserPersistence, SessionPersistence, SessionState, SessionStore, expired_session_cookie};
use crate::util::browser;

/// True once restoration finished and no session was found.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.session.is_none()
}

/// Target for a visitor whose session is gone once restoration finished.
///
/// Any persisted leftovers are dropped first. A `user` cookie without a
/// readable local-storage copy would otherwise send the cookie guard straight
/// back from `/login` to `/dashboard`.
pub fn unauth_redirect(state: &SessionState, persistence: &impl SessionPersistence) -> Option<&'static str> {
    if !should_redirect_unauth(state) {
        return None;
    }
    persistence.remove();
    persistence.set_cookie(&expired_session_cookie());
    Some(LOGIN_PATH)
}

/// Redirect to `/login` whenever the session has loaded and is empty.
pub fn install_unauth_redirect<F>(store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = store.state();
    Effect::new(move || {
        if let Some(target) = state.with(|s| unauth_redirect(s, &BrowserPersistence)) {
            leptos::logging::log!("no restorable session, expiring cookie");
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Re-run the cookie guard on every client-side navigation.
///
/// Full page loads are already gated by the server middleware; this covers
/// router transitions that never reach the server.
pub fn install_route_guard<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        let cookie = browser::read_cookie(SESSION_COOKIE);
        if let GuardDecision::Redirect(target) = guard::evaluate(&path, cookie.as_deref()) {
            leptos::logging::log!("route guard: {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
