//! Cookie-presence guard for dashboard and login routes.
//!
//! Runs on every HTTP request before the page renders. The decision itself
//! lives in `client::guard` so in-app navigation applies identical rules.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use client::guard::{self, GuardDecision, SESSION_COOKIE};

/// Axum middleware: 307 to `/login` or `/dashboard`, or pass through.
pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let cookie = jar.get(SESSION_COOKIE).map(|c| c.value());

    let decision = guard::evaluate(path, cookie);
    if guard::is_guarded(path) {
        tracing::debug!(%path, ?decision, has_cookie = cookie.is_some(), "route guard");
    }

    match decision {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => Redirect::temporary(target).into_response(),
    }
}
