//! Labelled form input with inline validation message.

use leptos::prelude::*;

use crate::util::forms::FormField;

#[component]
pub fn FormInput(
    label: &'static str,
    field: FormField,
    #[prop(default = "text")] kind: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<(FormField, String)>,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <label class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=kind
                name=field.key()
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            />
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
