//! Email + password login page.
//!
//! The login request is tagged with the browser's device fingerprint and,
//! when the lookup succeeds, its public IP address.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::components::toast_host::notify;
use crate::config;
use crate::net::api::Api;
use crate::net::geo;
use crate::state::session::SessionState;
use crate::state::toast::{Severity, ToastState};
use crate::util::auth::{HOME_PATH, SIGNUP_PATH, signed_in_destination};
use crate::util::device::DeviceFingerprint;
use crate::util::forms::{FormField, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let busy = RwSignal::new(false);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if let Some(path) = signed_in_destination(&session.get()) {
            navigate_home(path, NavigateOptions::default());
        }
    });

    let on_input = Callback::new(move |(field, value): (FormField, String)| {
        form.update(|f| f.set(field, value));
    });
    let err = move |field: FormField| Signal::derive(move || form.with(|f| f.errors.get(field).map(str::to_owned)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let device = DeviceFingerprint::current();
        let Some(mut request) = form.try_update(|f| f.validate(&device, None)).flatten() else {
            return;
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            request.ipaddress = geo::fetch_geolocation(config::geo_lookup_url()).await.and_then(|g| g.ip());
            match Api::anonymous().login(&request).await {
                Ok(response) if response.access_token.is_some() => {
                    session.set(SessionState::from_login(response));
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Ok(_) => notify(toasts, "Login failed", Severity::Error),
                Err(e) => notify(toasts, e.user_message("Login failed"), Severity::Error),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <FormInput
                    label="Email"
                    field=FormField::Email
                    kind="email"
                    value=Signal::derive(move || form.get().email)
                    error=err(FormField::Email)
                    on_input=on_input
                />
                <FormInput
                    label="Password"
                    field=FormField::Password
                    kind="password"
                    value=Signal::derive(move || form.get().password)
                    error=err(FormField::Password)
                    on_input=on_input
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__switch">
                    "No account? " <A href=SIGNUP_PATH>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
