//! Toast stack and the timers that dismiss toasts and close modals.

use leptos::prelude::*;

use crate::state::toast::{Severity, TOAST_AUTO_HIDE_MS, ToastState};

/// Run `f` after `ms` milliseconds (browser only).
pub fn run_after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}

/// Show a toast that hides itself after [`TOAST_AUTO_HIDE_MS`].
pub fn notify(toasts: RwSignal<ToastState>, message: impl Into<String>, severity: Severity) {
    let message = message.into();
    if let Some(id) = toasts.try_update(|t| t.show(message, severity)) {
        run_after(TOAST_AUTO_HIDE_MS, move || toasts.update(|t| t.dismiss(id)));
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <div class=toast.severity.css_class()>
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.update(|t| t.dismiss(toast.id))
                    >
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
