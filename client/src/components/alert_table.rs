//! Alert listing table.

#[cfg(test)]
#[path = "alert_table_test.rs"]
mod alert_table_test;

use contracts::AlertObject;
use leptos::prelude::*;
use leptos_router::components::A;

/// Detail route for `item`, scoped to its scanner and sub-category.
fn detail_href(item: &AlertObject) -> String {
    let alert = &item.alert;
    format!(
        "/dashboard/scanners/{}/alert/{}/{}",
        alert.scanner_id,
        urlencoding::encode(&alert.sub_category),
        alert.id
    )
}

#[component]
pub fn AlertTable(#[prop(into)] alerts: Signal<Vec<AlertObject>>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <table class="data-table" class:data-table--loading=move || loading.get()>
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Headline"</th>
                    <th>"Description"</th>
                    <th>"Category"</th>
                    <th>"Addresses"</th>
                    <th>"Recorded"</th>
                    <th>"Rating"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || alerts.with(Vec::is_empty) && !loading.get()>
                    <tr>
                        <td class="data-table__empty" colspan="7">"No alerts match these filters."</td>
                    </tr>
                </Show>
                <For
                    each=move || alerts.get()
                    key=|item| item.alert.id
                    children=move |item| {
                        let href = detail_href(&item);
                        let visited = item.alert.visited();
                        let AlertObject { alert, addresses } = item;
                        view! {
                            <tr class="data-table__row" class:data-table__row--visited=visited>
                                <td>{alert.id}</td>
                                <td>
                                    <A href=href>{alert.headline}</A>
                                </td>
                                <td class="data-table__clip">{alert.description}</td>
                                <td>
                                    <span class="chip">{alert.category}</span>
                                    <span class="data-table__sub">{alert.sub_category}</span>
                                </td>
                                <td>
                                    <ul class="data-table__addresses">
                                        {addresses.into_iter().map(|address| view! { <li>{address}</li> }).collect_view()}
                                    </ul>
                                </td>
                                <td>{alert.date_time}</td>
                                <td class="data-table__stars" title=alert.rating_title>
                                    {alert.rating.stars()}
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
