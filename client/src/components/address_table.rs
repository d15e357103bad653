//! Address-candidate table with expandable contact records.
//!
//! Rows expand independently. Expanded rows list contact groups in
//! owner, current, past order and skip empty groups.

use contracts::{AddressCandidate, ContactGroup};
use leptos::prelude::*;

use crate::state::address_rows::ExpandedRows;
use crate::util::maps::map_search_url;

#[component]
pub fn AddressTable(
    #[prop(into)] addresses: Signal<Vec<AddressCandidate>>,
    expanded: RwSignal<ExpandedRows>,
    on_unlock: Callback<i64>,
    on_grantees: Callback<i64>,
) -> impl IntoView {
    view! {
        <table class="data-table data-table--addresses">
            <thead>
                <tr>
                    <th></th>
                    <th>"Address"</th>
                    <th>"Score"</th>
                    <th>"Type"</th>
                    <th>"Recorded"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || addresses.with(Vec::is_empty)>
                    <tr>
                        <td class="data-table__empty" colspan="6">"No candidate addresses."</td>
                    </tr>
                </Show>
                <For each=move || addresses.get() key=|candidate| candidate.id let:candidate>
                    <AddressRow candidate=candidate expanded=expanded on_unlock=on_unlock on_grantees=on_grantees/>
                </For>
            </tbody>
        </table>
    }
}

#[component]
fn AddressRow(
    candidate: AddressCandidate,
    expanded: RwSignal<ExpandedRows>,
    on_unlock: Callback<i64>,
    on_grantees: Callback<i64>,
) -> impl IntoView {
    let id = candidate.id;
    let is_open = move || expanded.with(|rows| rows.is_expanded(id));
    let map_href = map_search_url(&candidate.address);
    let contacts = candidate.contact_info.clone();

    view! {
        <tr class="data-table__row">
            <td>
                <button
                    class="btn btn--icon"
                    aria-label="Toggle contacts"
                    on:click=move |_| {
                        expanded.update(|rows| {
                            rows.toggle(id);
                        });
                    }
                >
                    {move || if is_open() { "▾" } else { "▸" }}
                </button>
            </td>
            <td>{candidate.address.clone()}</td>
            <td>{candidate.score_percent()}</td>
            <td>{candidate.kind.clone().unwrap_or_default()}</td>
            <td>{candidate.date_time.clone().unwrap_or_default()}</td>
            <td class="data-table__actions">
                <a class="btn btn--ghost" href=map_href target="_blank" rel="noopener noreferrer">
                    "Map"
                </a>
                <button class="btn btn--ghost" on:click=move |_| on_unlock.run(id)>
                    "Unlock contact info"
                </button>
                <button class="btn btn--ghost" on:click=move |_| on_grantees.run(id)>
                    "Grantees"
                </button>
            </td>
        </tr>
        <Show when=is_open>
            <tr class="data-table__detail">
                <td colspan="6">
                    {if contacts.is_empty() {
                        view! { <p class="muted">"No contact records."</p> }.into_any()
                    } else {
                        contacts.groups().into_iter().map(contact_group).collect_view().into_any()
                    }}
                </td>
            </tr>
        </Show>
    }
}

fn contact_group(group: ContactGroup<'_>) -> impl IntoView + use<> {
    let rows = group
        .residents
        .into_iter()
        .map(|resident| {
            view! {
                <tr>
                    <td>{resident.name.clone()}</td>
                    <td>{resident.phone_number.clone()}</td>
                    <td>{resident.email_address.clone()}</td>
                    <td>{resident.current_address.clone()}</td>
                    <td>{resident.past_address.clone()}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="contact-group">
            <h4>{group.kind.title()}</h4>
            <table class="data-table data-table--compact">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Email"</th>
                        <th>"Current address"</th>
                        <th>"Past address"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
