//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal provided here is the only source of truth for the
//! signed-in user. It starts in the restoring state, is filled from browser
//! storage once the app mounts, and every later change is mirrored back to
//! storage by a single effect.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    alert_detail::AlertDetailPage, alerts::AlertsPage, dashboard::DashboardLayout, filter::FilterPage,
    login::LoginPage, settings::SettingsPage, signup::SignupPage, userlist::UserListPage,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::session_store;

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restoring());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Effects only run in the browser, so storage is read after hydration.
    Effect::new(move || session.set(session_store::restore()));
    Effect::new(move || session.with(session_store::persist));

    view! {
        <Stylesheet id="leptos" href="/pkg/scanner-dashboard.css"/>
        <Title text="Scanner Alerts"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard/alerts"/> }/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard/alerts"/> }/>
                    <Route path=StaticSegment("alerts") view=AlertsPage/>
                    <Route path=StaticSegment("filter") view=FilterPage/>
                    <Route path=StaticSegment("userlist") view=UserListPage/>
                    <Route
                        path=(StaticSegment("scanners"), ParamSegment("id"), StaticSegment("settings"))
                        view=SettingsPage
                    />
                    <Route
                        path=(
                            StaticSegment("scanners"),
                            ParamSegment("id"),
                            StaticSegment("alert"),
                            ParamSegment("sub_category"),
                        )
                        view=AlertsPage
                    />
                    <Route
                        path=(
                            StaticSegment("scanners"),
                            ParamSegment("id"),
                            StaticSegment("alert"),
                            ParamSegment("sub_category"),
                            ParamSegment("aid"),
                        )
                        view=AlertDetailPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
