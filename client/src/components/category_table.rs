//! Sub-category keyword listing for the settings and filter pages.

use contracts::{AlertCategory, CategorySetting};
use leptos::prelude::*;
use leptos_router::components::A;

/// Category selector shared by the settings and filter pages.
#[component]
pub fn CategorySelect(#[prop(into)] value: Signal<AlertCategory>, on_change: Callback<AlertCategory>) -> impl IntoView {
    view! {
        <select
            class="alert-filters__select"
            on:change=move |ev| {
                if let Ok(category) = event_target_value(&ev).parse::<AlertCategory>() {
                    on_change.run(category);
                }
            }
        >
            {AlertCategory::CHOICES
                .into_iter()
                .map(|category| {
                    view! {
                        <option value=category.key() selected=move || value.get() == category>
                            {category.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Rows link to the scoped alert list when a scanner is known.
#[component]
pub fn CategoryTable(
    #[prop(into)] rows: Signal<Vec<CategorySetting>>,
    #[prop(default = None)] scanner_id: Option<i64>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Sub-category"</th>
                    <th>"Category"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || rows.with(Vec::is_empty)>
                    <tr>
                        <td class="data-table__empty" colspan="3">"No sub-categories."</td>
                    </tr>
                </Show>
                <For each=move || rows.get() key=|row| row.id let:row>
                    <tr class="data-table__row">
                        <td>{row.id}</td>
                        <td>
                            {match scanner_id {
                                Some(scanner) => {
                                    let href = format!(
                                        "/dashboard/scanners/{scanner}/alert/{}",
                                        urlencoding::encode(&row.sub_category),
                                    );
                                    view! { <A href=href>{row.sub_category.clone()}</A> }.into_any()
                                }
                                None => row.sub_category.clone().into_any(),
                            }}
                        </td>
                        <td>{row.category.clone()}</td>
                    </tr>
                </For>
            </tbody>
        </table>
    }
}
