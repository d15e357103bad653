//! Account signup page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::components::toast_host::notify;
use crate::net::api::Api;
use crate::state::toast::{Severity, ToastState};
use crate::util::auth::LOGIN_PATH;
use crate::util::forms::{FormField, SignupForm};

#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(SignupForm::default());
    let busy = RwSignal::new(false);

    let on_input = Callback::new(move |(field, value): (FormField, String)| {
        form.update(|f| f.set(field, value));
    });
    let err = move |field: FormField| Signal::derive(move || form.with(|f| f.errors.get(field).map(str::to_owned)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(request) = form.try_update(SignupForm::validate).flatten() else {
            return;
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match Api::anonymous().signup(&request).await {
                Ok(()) => {
                    notify(toasts, "Account created. Please sign in.", Severity::Success);
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => notify(toasts, e.user_message("Signup failed"), Severity::Error),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create account"</h1>
                <FormInput
                    label="First name"
                    field=FormField::FirstName
                    value=Signal::derive(move || form.get().first_name)
                    error=err(FormField::FirstName)
                    on_input=on_input
                />
                <FormInput
                    label="Last name"
                    field=FormField::LastName
                    value=Signal::derive(move || form.get().last_name)
                    error=err(FormField::LastName)
                    on_input=on_input
                />
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
                <FormInput
                    label="Confirm password"
                    field=FormField::PasswordConfirm
                    kind="password"
                    value=Signal::derive(move || form.get().password2)
                    error=err(FormField::PasswordConfirm)
                    on_input=on_input
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign up"
                </button>
                <p class="auth-card__switch">
                    "Already registered? " <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
