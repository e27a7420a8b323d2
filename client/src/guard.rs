//! Route-guard decision shared by the server middleware and in-app navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard only sees the `user` cookie. It runs before protected content
//! renders and cannot reach the in-memory or local-storage session copies.
//!
//! TRADE-OFFS
//! ==========
//! This is a presence check: any non-empty cookie value passes. There is no
//! signature or token validation and no expiry check beyond the cookie's own
//! `Max-Age`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Name of the cookie carrying the serialized session.
pub const SESSION_COOKIE: &str = "user";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of evaluating a navigation against the session cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Whether `path` is covered by the guard: `/dashboard`, `/dashboard/**`, or `/login`.
pub fn is_guarded(path: &str) -> bool {
    path == LOGIN_PATH
        || path == DASHBOARD_PATH
        || path.strip_prefix(DASHBOARD_PATH).is_some_and(|rest| rest.starts_with('/'))
}

/// Decide whether a navigation to `path` may proceed given the raw cookie value.
pub fn evaluate(path: &str, cookie: Option<&str>) -> GuardDecision {
    if !is_guarded(path) {
        return GuardDecision::Allow;
    }

    let cookie_present = cookie.is_some_and(|value| !value.is_empty());
    let is_login_page = path == LOGIN_PATH;

    match (cookie_present, is_login_page) {
        (false, false) => GuardDecision::Redirect(LOGIN_PATH),
        (true, true) => GuardDecision::Redirect(DASHBOARD_PATH),
        _ => GuardDecision::Allow,
    }
}
