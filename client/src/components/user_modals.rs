//! Add/edit operator dialogs.
//!
//! Both dialogs validate locally, send one request, report the outcome as a
//! toast and, on success, ask the caller to re-fetch before closing after a
//! short delay. There is no optimistic update of the listing.

use contracts::{OperatorAccount, Permission};
use leptos::prelude::*;

use crate::components::form_input::FormInput;
use crate::components::toast_host::{notify, run_after};
use crate::net::api::Api;
use crate::state::session::SessionState;
use crate::state::toast::{MODAL_CLOSE_DELAY_MS, Severity, ToastState};
use crate::util::forms::{EditOperatorForm, FormField, NewOperatorForm};

#[component]
fn PermissionSelect(
    #[prop(into)] value: Signal<Option<Permission>>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<(FormField, String)>,
) -> impl IntoView {
    view! {
        <label class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <span class="form-field__label">"Permission"</span>
            <select
                class="form-field__input"
                name=FormField::Permission.key()
                on:change=move |ev| on_input.run((FormField::Permission, event_target_value(&ev)))
            >
                <option value="" selected=move || value.get().is_none()>"Select permission"</option>
                {Permission::ALL
                    .into_iter()
                    .map(|p| {
                        view! {
                            <option value=p.as_str() selected=move || value.get() == Some(p)>
                                {p.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

#[component]
pub fn AddOperatorModal(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(NewOperatorForm::default());
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
        let Some(payload) = form.try_update(NewOperatorForm::validate).flatten() else {
            return;
        };
        busy.set(true);
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            match api.insert_operator(&payload).await {
                Ok(()) => {
                    notify(toasts, "User added successfully", Severity::Success);
                    form.update(NewOperatorForm::reset);
                    on_saved.try_run(());
                    run_after(MODAL_CLOSE_DELAY_MS, move || {
                        on_close.try_run(());
                    });
                }
                Err(e) => notify(toasts, e.user_message("Failed to add user"), Severity::Error),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <header class="dialog__header">
                    <h2>"Add Team Member"</h2>
                    <button type="button" class="btn btn--icon" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <FormInput
                    label="Full Name"
                    field=FormField::FullName
                    value=Signal::derive(move || form.get().full_name)
                    error=err(FormField::FullName)
                    on_input=on_input
                />
                <FormInput
                    label="Phone Number"
                    field=FormField::Phone
                    kind="tel"
                    value=Signal::derive(move || form.get().phone_number)
                    error=err(FormField::Phone)
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
                    label="Security PIN"
                    field=FormField::Pin
                    kind="password"
                    value=Signal::derive(move || form.get().security_pin)
                    error=err(FormField::Pin)
                    on_input=on_input
                />
                <FormInput
                    label="Confirm PIN"
                    field=FormField::ConfirmPin
                    kind="password"
                    value=Signal::derive(move || form.get().confirm_pin)
                    error=err(FormField::ConfirmPin)
                    on_input=on_input
                />
                <PermissionSelect
                    value=Signal::derive(move || form.get().permission)
                    error=err(FormField::Permission)
                    on_input=on_input
                />
                <footer class="dialog__actions">
                    <button type="button" class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Add User"
                    </button>
                </footer>
            </form>
        </div>
    }
}

#[component]
pub fn EditOperatorModal(account: OperatorAccount, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(EditOperatorForm::from_account(&account));
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
        let Some(payload) = form.try_update(EditOperatorForm::validate).flatten() else {
            return;
        };
        busy.set(true);
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            match api.update_operator(&payload).await {
                Ok(()) => {
                    notify(toasts, "User updated successfully", Severity::Success);
                    on_saved.try_run(());
                    run_after(MODAL_CLOSE_DELAY_MS, move || {
                        on_close.try_run(());
                    });
                }
                Err(e) => notify(toasts, e.user_message("Failed to update user"), Severity::Error),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <header class="dialog__header">
                    <h2>"Edit User"</h2>
                    <button type="button" class="btn btn--icon" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <FormInput
                    label="Full Name"
                    field=FormField::FullName
                    value=Signal::derive(move || form.get().full_name)
                    error=err(FormField::FullName)
                    on_input=on_input
                />
                <FormInput
                    label="Email"
                    field=FormField::Email
                    kind="email"
                    readonly=true
                    value=Signal::derive(move || form.get().email)
                    error=err(FormField::Email)
                    on_input=on_input
                />
                <FormInput
                    label="Phone Number"
                    field=FormField::Phone
                    kind="tel"
                    value=Signal::derive(move || form.get().phone_number)
                    error=err(FormField::Phone)
                    on_input=on_input
                />
                <FormInput
                    label="New PIN (leave blank to keep)"
                    field=FormField::Pin
                    kind="password"
                    value=Signal::derive(move || form.get().security_pin)
                    error=err(FormField::Pin)
                    on_input=on_input
                />
                <FormInput
                    label="Confirm PIN"
                    field=FormField::ConfirmPin
                    kind="password"
                    value=Signal::derive(move || form.get().confirm_pin)
                    error=err(FormField::ConfirmPin)
                    on_input=on_input
                />
                <PermissionSelect
                    value=Signal::derive(move || form.get().permission)
                    error=err(FormField::Permission)
                    on_input=on_input
                />
                <footer class="dialog__actions">
                    <button type="button" class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Save Changes"
                    </button>
                </footer>
            </form>
        </div>
    }
}
