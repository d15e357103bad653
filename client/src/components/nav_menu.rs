//! Dashboard side navigation with the signed-in identity and sign-out.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;
use crate::util::auth::sign_out;

#[component]
pub fn NavMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="nav-menu" class:nav-menu--open=move || menu_open.get()>
            <div class="nav-menu__header">
                <span class="nav-menu__brand">"Scanner Alerts"</span>
                <button
                    class="nav-menu__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
            <ul class="nav-menu__links" on:click=move |_| menu_open.set(false)>
                <li><A href="/dashboard/alerts">"Alerts"</A></li>
                <li><A href="/dashboard/filter">"Keyword Filter"</A></li>
                <li><A href="/dashboard/userlist">"User List"</A></li>
            </ul>
            <div class="nav-menu__footer">
                <span class="nav-menu__user">{move || session.get().display_name()}</span>
                <button class="btn btn--ghost" on:click=move |_| sign_out(session)>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
