//! Footer with rows-per-page selector and previous/next controls.

use leptos::prelude::*;

#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] rows: Signal<usize>,
    options: Vec<usize>,
    #[prop(into)] label: Signal<String>,
    #[prop(into)] has_next: Signal<bool>,
    on_page: Callback<usize>,
    on_rows: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-bar">
            <label class="pagination-bar__rows">
                "Rows per page"
                <select on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<usize>() {
                        on_rows.run(value);
                    }
                }>
                    {options
                        .into_iter()
                        .map(|n| {
                            view! {
                                <option value=n.to_string() selected=move || rows.get() == n>
                                    {n.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <span class="pagination-bar__range">{move || label.get()}</span>
            <button
                class="btn btn--icon"
                aria-label="Previous page"
                disabled=move || page.get() == 0
                on:click=move |_| on_page.run(page.get_untracked().saturating_sub(1))
            >
                "‹"
            </button>
            <button
                class="btn btn--icon"
                aria-label="Next page"
                disabled=move || !has_next.get()
                on:click=move |_| on_page.run(page.get_untracked() + 1)
            >
                "›"
            </button>
        </div>
    }
}
