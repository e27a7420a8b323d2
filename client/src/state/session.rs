//! Session store: the single authority for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in three places that must agree: the in-memory
//! [`SessionState`] shared through Leptos context, the `user` key in local
//! storage, and the `user` cookie. Only the cookie is visible to the route
//! guard, which runs before any page code.
//!
//! DESIGN
//! ======
//! The state transitions are plain functions over a [`SessionPersistence`]
//! so they can be exercised without a browser. [`SessionStore`] wires them to
//! a reactive signal and the real browser storage.
//!
//! TRADE-OFFS
//! ==========
//! The cookie gets a fixed one-week max-age regardless of the token's server
//! expiry, and logout never revokes the token server-side.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use cookie::Cookie;
use leptos::prelude::*;
use time::Duration;

use crate::guard::{DASHBOARD_PATH, LOGIN_PATH, SESSION_COOKIE};
use crate::net::api::{self, ApiError};
use crate::net::types::Session;
use crate::util::browser;

/// Local-storage key holding the serialized session.
pub const STORAGE_KEY: &str = "user";

/// Lifetime of the session cookie.
pub const COOKIE_MAX_AGE: Duration = Duration::weeks(1);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("use_session must be called within a SessionProvider")]
    MissingProvider,
    #[error("login failed: {0}")]
    Login(#[from] ApiError),
    #[error("session could not be serialized: {0}")]
    Encode(String),
}

/// In-memory copy of the session plus restoration status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the local-storage copy has been read on first load.
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// `Authorization` header value for the current session, if any.
    pub fn authorization(&self) -> Option<String> {
        self.session.as_ref().and_then(Session::authorization)
    }
}

/// The two persisted session forms.
pub trait SessionPersistence {
    /// Raw local-storage copy.
    fn load(&self) -> Option<String>;
    fn store(&self, raw: &str);
    fn remove(&self);
    /// Apply a `document.cookie`-style assignment.
    fn set_cookie(&self, assignment: &str);
}

/// Real browser storage; a no-op during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPersistence;

impl SessionPersistence for BrowserPersistence {
    fn load(&self) -> Option<String> {
        browser::load_item(STORAGE_KEY)
    }

    fn store(&self, raw: &str) {
        browser::save_item(STORAGE_KEY, raw);
    }

    fn remove(&self) {
        browser::remove_item(STORAGE_KEY);
    }

    fn set_cookie(&self, assignment: &str) {
        browser::write_cookie(assignment);
    }
}

/// Cookie assignment carrying `raw`, percent-encoded, valid for one week on `/`.
pub fn session_cookie(raw: &str) -> String {
    Cookie::build((SESSION_COOKIE, raw.to_owned()))
        .path("/")
        .max_age(COOKIE_MAX_AGE)
        .build()
        .encoded()
        .to_string()
}

/// Cookie assignment that deletes the session cookie.
pub fn expired_session_cookie() -> String {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
        .encoded()
        .to_string()
}

/// Rebuild the in-memory state from local storage.
///
/// A missing or unparseable copy leaves the session empty.
pub fn restore(persistence: &impl SessionPersistence) -> SessionState {
    let session = persistence.load().and_then(|raw| match serde_json::from_str::<Session>(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            leptos::logging::warn!("discarding unreadable stored session: {e}");
            None
        }
    });
    SessionState { session, loading: false }
}

/// Write `session` to all three locations.
///
/// Serialization happens first, so an encode failure leaves everything untouched.
///
/// # Errors
///
/// Returns [`SessionError::Encode`] if the session cannot be serialized.
pub fn commit(state: &mut SessionState, persistence: &impl SessionPersistence, session: Session) -> Result<(), SessionError> {
    let raw = serde_json::to_string(&session).map_err(|e| SessionError::Encode(e.to_string()))?;
    persistence.store(&raw);
    persistence.set_cookie(&session_cookie(&raw));
    state.session = Some(session);
    state.loading = false;
    Ok(())
}

/// Apply the outcome of a login request. Failures mutate nothing.
///
/// # Errors
///
/// Propagates the login failure or a serialization failure.
pub fn finish_login(
    state: &mut SessionState,
    persistence: &impl SessionPersistence,
    outcome: Result<Session, ApiError>,
) -> Result<(), SessionError> {
    let session = outcome?;
    commit(state, persistence, session)
}

/// Clear all three locations, whether or not anything was stored.
pub fn clear(state: &mut SessionState, persistence: &impl SessionPersistence) {
    state.session = None;
    state.loading = false;
    persistence.remove();
    persistence.set_cookie(&expired_session_cookie());
}

/// Reactive handle to the session, provided once at the app root.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    /// New store in the loading state; call [`Self::restore`] once mounted.
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState { session: None, loading: true }) }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn session(&self) -> Option<Session> {
        self.state.with(|s| s.session.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn authorization(&self) -> Option<String> {
        self.state.with(SessionState::authorization)
    }

    /// Header value for event handlers, without subscribing.
    pub fn authorization_untracked(&self) -> Option<String> {
        self.state.with_untracked(SessionState::authorization)
    }

    /// Load the persisted session into memory.
    pub fn restore(&self) {
        self.state.set(restore(&BrowserPersistence));
    }

    /// Authenticate against the backend, persist the session, and reload into
    /// the dashboard.
    ///
    /// # Errors
    ///
    /// Returns the login failure untouched; no session location is modified.
    pub async fn login(self, email: String, password: String) -> Result<(), SessionError> {
        let outcome = api::login(&email, &password).await;
        let mut next = self.state.get_untracked();
        if let Err(e) = finish_login(&mut next, &BrowserPersistence, outcome) {
            leptos::logging::error!("login error: {e}");
            return Err(e);
        }
        self.state.set(next);
        browser::navigate_full(DASHBOARD_PATH);
        Ok(())
    }

    /// Drop the session everywhere and go to the login page.
    pub fn logout(&self, navigate: impl Fn(&str)) {
        self.state.update(|s| clear(s, &BrowserPersistence));
        navigate(LOGIN_PATH);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Session store from context, or [`SessionError::MissingProvider`].
///
/// # Errors
///
/// Fails when called outside a [`SessionProvider`].
pub fn try_use_session() -> Result<SessionStore, SessionError> {
    use_context::<SessionStore>().ok_or(SessionError::MissingProvider)
}

/// Session store from context.
///
/// # Panics
///
/// Panics when called outside a [`SessionProvider`]; that is a wiring bug,
/// not a runtime condition.
pub fn use_session() -> SessionStore {
    match try_use_session() {
        Ok(store) => store,
        Err(e) => panic!("{e}"),
    }
}

/// Provides a [`SessionStore`] to `children` and restores it once mounted.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let store = SessionStore::new();
    provide_context(store);

    // Effects only run in the browser, where local storage exists.
    Effect::new(move || store.restore());

    children()
}
