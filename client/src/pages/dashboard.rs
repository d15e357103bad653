//! Authenticated dashboard shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parent route for every `/dashboard/*` screen. It guards the subtree
//! against missing credentials, renders the navigation chrome, and records a
//! visit audit on mount and whenever the signed-in user changes.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::nav_menu::NavMenu;
use crate::config;
use crate::net::api::Api;
use crate::state::session::SessionState;
use crate::util::audit::spawn_visit_record;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let user = Memo::new(move |_| session.with(|s| s.user.clone()));
    Effect::new(move || {
        let Some(user) = user.get() else {
            return;
        };
        let api = Api::for_session(&session.get_untracked());
        spawn_visit_record(api, user, config::geo_lookup_url());
    });

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <div class="dashboard-shell">
                <NavMenu/>
                <main class="dashboard-shell__content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
