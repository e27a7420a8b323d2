//! Layout wrapping every `/dashboard/**` page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server middleware already rejected requests without a session cookie.
//! This layout covers the remaining gap: a cookie is present but the
//! local-storage copy is gone, so the in-memory session never restores.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let store = use_session();
    install_unauth_redirect(store, use_navigate());

    view! {
        <Show
            when=move || !store.loading()
            fallback=|| view! { <div class="page-status">"Loading..."</div> }
        >
            <Show
                when=move || store.is_authenticated()
                fallback=|| view! { <div class="page-status">"Redirecting to login..."</div> }
            >
                <NavBar/>
                <main class="page">
                    <Outlet/>
                </main>
            </Show>
        </Show>
    }
}
