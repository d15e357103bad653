//! Operator management page.
//!
//! Lists every operator with client-side search, permission filter and
//! pagination, and hosts the add/edit dialogs. Successful saves re-fetch the
//! listing.

use contracts::{OperatorAccount, Permission};
use leptos::prelude::*;

use crate::components::operator_table::OperatorTable;
use crate::components::pagination_bar::PaginationBar;
use crate::components::user_modals::{AddOperatorModal, EditOperatorModal};
use crate::net::api::Api;
use crate::state::session::SessionState;
use crate::state::user_list::{ROWS_PER_PAGE_OPTIONS, UserListState};

#[component]
pub fn UserListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let list = RwSignal::new(UserListState::default());
    let reload = RwSignal::new(0_u32);
    let adding = RwSignal::new(false);
    let editing = RwSignal::new(None::<OperatorAccount>);

    Effect::new(move || {
        reload.track();
        list.update(|state| state.loading = true);
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            match api.operators().await {
                Ok(users) => list.update(|state| state.set_users(users)),
                Err(e) => {
                    leptos::logging::warn!("user list fetch failed: {e}");
                    list.update(|state| state.loading = false);
                }
            }
        });
    });

    let on_saved = Callback::new(move |()| reload.update(|n| *n += 1));
    let on_edit = Callback::new(move |account: OperatorAccount| editing.set(Some(account)));
    let on_page = Callback::new(move |page: usize| list.update(|state| state.set_page(page)));
    let on_rows = Callback::new(move |rows: usize| list.update(|state| state.set_rows_per_page(rows)));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"User List"</h1>
                <button class="btn btn--primary" on:click=move |_| adding.set(true)>
                    "Add User"
                </button>
            </header>
            <form
                class="alert-filters"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    list.update(UserListState::apply_search);
                }
            >
                <input
                    class="alert-filters__input"
                    type="search"
                    placeholder="Search name or phone"
                    prop:value=move || list.with(|s| s.search.clone())
                    on:input=move |ev| list.update(|state| state.search = event_target_value(&ev))
                />
                <select
                    class="alert-filters__select"
                    on:change=move |ev| {
                        let permission = event_target_value(&ev).parse::<Permission>().ok();
                        list.update(|state| state.permission = permission);
                    }
                >
                    <option value="">"All permissions"</option>
                    {Permission::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--ghost" type="submit">
                    "Search"
                </button>
            </form>
            <OperatorTable rows=Signal::derive(move || list.with(UserListState::visible)) on_edit=on_edit/>
            <PaginationBar
                page=Signal::derive(move || list.with(|s| s.page))
                rows=Signal::derive(move || list.with(|s| s.rows_per_page))
                options=ROWS_PER_PAGE_OPTIONS.to_vec()
                label=Signal::derive(move || list.with(UserListState::range_label))
                has_next=Signal::derive(move || list.with(UserListState::has_next))
                on_page=on_page
                on_rows=on_rows
            />
            <Show when=move || adding.get()>
                <AddOperatorModal on_close=Callback::new(move |()| adding.set(false)) on_saved=on_saved/>
            </Show>
            {move || {
                editing
                    .get()
                    .map(|account| {
                        view! {
                            <EditOperatorModal
                                account=account
                                on_close=Callback::new(move |()| editing.set(None))
                                on_saved=on_saved
                            />
                        }
                    })
            }}
        </section>
    }
}
