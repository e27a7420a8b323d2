//! Top navigation bar for the protected dashboard area.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;

/// Section links, signed-in email, and the logout button.
#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_session();
    let navigate = use_navigate();

    let email = move || store.session().map(|s| s.email).unwrap_or_default();
    let role = move || store.session().map(|s| s.role.label()).unwrap_or_default();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        store.logout(move |path| navigate(path, NavigateOptions::default()));
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"CostLens"</span>
            <a href="/dashboard" class="nav-bar__link">"Dashboard"</a>
            <a href="/dashboard/teams" class="nav-bar__link">"Teams"</a>
            <a href="/dashboard/resources" class="nav-bar__link">"Resources"</a>
            <a href="/dashboard/profile" class="nav-bar__link">"Profile"</a>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__self">
                {email}
                " ("
                <span class="nav-bar__role">{role}</span>
                ")"
            </span>
            <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </nav>
    }
}
