//! Operator account listing for the user list page.

use contracts::OperatorAccount;
use leptos::prelude::*;

#[component]
pub fn OperatorTable(#[prop(into)] rows: Signal<Vec<OperatorAccount>>, on_edit: Callback<OperatorAccount>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Permission"</th>
                    <th>"Status"</th>
                    <th>"Device"</th>
                    <th>"Location"</th>
                    <th>"Visits (today / total)"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || rows.with(Vec::is_empty)>
                    <tr>
                        <td class="data-table__empty" colspan="9">"No users found."</td>
                    </tr>
                </Show>
                <For each=move || rows.get() key=|row| row.id let:row>
                    <tr class="data-table__row">
                        <td>{row.full_name.clone()}</td>
                        <td>{row.email.clone()}</td>
                        <td>{row.phone_label().to_owned()}</td>
                        <td><span class="chip">{row.permission_label()}</span></td>
                        <td>{row.status_label().to_owned()}</td>
                        <td>{format!("{} · {} · {}", row.device, row.browser, row.os)}</td>
                        <td>{row.location_label()}</td>
                        <td>{format!("{} / {}", row.day_visits, row.current_visits)}</td>
                        <td>
                            <button
                                class="btn btn--ghost"
                                on:click={
                                    let row = row.clone();
                                    move |_| on_edit.run(row.clone())
                                }
                            >
                                "Edit"
                            </button>
                        </td>
                    </tr>
                </For>
            </tbody>
        </table>
    }
}
