//! Scanner settings page: sub-categories per alert category.

use contracts::AlertCategory;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::category_table::{CategorySelect, CategoryTable};
use crate::net::api::Api;
use crate::state::session::SessionState;
use crate::state::settings::CategoryListState;

/// Fetch sub-categories for the current selection into `list`.
pub(crate) fn install_category_fetch(session: RwSignal<SessionState>, list: RwSignal<CategoryListState>) {
    let query = Memo::new(move |_| list.with(CategoryListState::query));
    Effect::new(move || {
        query.track();
        let Some((seq, query)) = list.try_update(CategoryListState::begin_fetch) else {
            return;
        };
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            match api.sub_categories(&query).await {
                Ok(rows) => list.update(|state| {
                    state.finish_fetch(seq, rows);
                }),
                Err(e) => {
                    leptos::logging::warn!("sub-category fetch failed: {e}");
                    list.update(|state| {
                        state.fail_fetch(seq);
                    });
                }
            }
        });
    });
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let list = RwSignal::new(CategoryListState::default());
    install_category_fetch(session, list);

    let scanner_id = move || params.read().get("id").and_then(|id| id.parse::<i64>().ok());
    let on_category = Callback::new(move |category: AlertCategory| list.update(|state| state.category = category));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Settings"</h1>
                <CategorySelect value=Signal::derive(move || list.with(|s| s.category)) on_change=on_category/>
            </header>
            {move || {
                view! {
                    <CategoryTable
                        rows=Signal::derive(move || list.with(|s| s.rows.clone()))
                        scanner_id=scanner_id()
                    />
                }
            }}
        </section>
    }
}
