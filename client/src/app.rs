//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toasts::ToastHost;
use crate::net::api::HttpApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, unauthorized::UnauthorizedPage};
use crate::state::notices::Notices;
use crate::state::session::{SessionContext, SessionStore};
use crate::util::guard::{AppRoute, DASHBOARD_PATH, Guarded};

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
/// Provides the session, API client, and notice contexts, then sets up
/// client-side routing with role guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(SessionStore::browser());
    provide_context(session.clone());
    provide_context(HttpApi::from_build_env());
    provide_context(RwSignal::new(Notices::default()));

    // Storage is only readable in the browser; effects run after hydration.
    Effect::new(move || session.load());

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog.css"/>
        <Title text="Catalog Admin"/>

        <Router>
            <ToastHost/>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=StaticSegment("dashboard") view=|| guarded(AppRoute::Dashboard)/>
                    <Route path=StaticSegment("admin") view=|| guarded(AppRoute::Admin)/>
                    <Route path=StaticSegment("user") view=|| guarded(AppRoute::User)/>
                </Routes>
            </main>
        </Router>
    }
}

fn guarded(route: AppRoute) -> impl IntoView {
    view! {
        <Guarded route=route>
            <DashboardPage/>
        </Guarded>
    }
}
