//! Keyword filter page: searchable sub-category listing, sorted by id.

use contracts::AlertCategory;
use leptos::prelude::*;

use super::settings::install_category_fetch;
use crate::components::category_table::{CategorySelect, CategoryTable};
use crate::state::session::SessionState;
use crate::state::settings::CategoryListState;

#[component]
pub fn FilterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let list = RwSignal::new(CategoryListState::sorted());
    install_category_fetch(session, list);

    let on_category = Callback::new(move |category: AlertCategory| list.update(|state| state.category = category));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Keyword Filter"</h1>
                <input
                    class="alert-filters__input"
                    type="search"
                    placeholder="Search keywords"
                    prop:value=move || list.with(|s| s.search.clone())
                    on:input=move |ev| list.update(|state| state.search = event_target_value(&ev))
                />
                <CategorySelect value=Signal::derive(move || list.with(|s| s.category)) on_change=on_category/>
            </header>
            <CategoryTable rows=Signal::derive(move || list.with(|s| s.rows.clone()))/>
        </section>
    }
}
