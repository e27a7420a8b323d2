//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::guard::DASHBOARD_PATH;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, protected::ProtectedLayout,
    resources::ResourcesPage, teams::TeamsPage,
};
use crate::state::session::SessionProvider;
use crate::util::auth::install_route_guard;

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

/// Re-applies the cookie guard on client-side navigations.
#[component]
fn RouteGuard() -> impl IntoView {
    install_route_guard(use_navigate());
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/costlens.css"/>
        <Title text="CostLens"/>

        <SessionProvider>
            <Router>
                <RouteGuard/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ParentRoute path=StaticSegment("dashboard") view=ProtectedLayout>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("teams") view=TeamsPage/>
                        <Route path=StaticSegment("resources") view=ResourcesPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                    </ParentRoute>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
