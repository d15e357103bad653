//! Alert list page: filters, table, pagination and CSV export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves both `/dashboard/alerts` and the scanner/sub-category scoped route.
//! The outgoing query is a memo over the list state; every change to it
//! issues one fetch, and only the newest fetch may update the table.

use contracts::export::alerts_csv;
use contracts::settings::county_names;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::alert_filters::AlertFilters;
use crate::components::alert_table::AlertTable;
use crate::components::pagination_bar::PaginationBar;
use crate::net::api::Api;
use crate::state::alert_list::{AlertListState, AlertScope, FilterEdit, PAGE_SIZE_OPTIONS};
use crate::state::session::SessionState;
use crate::util::download::download_text;
use crate::util::maps::decode_route_param;

#[component]
pub fn AlertsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let list = RwSignal::new(AlertListState::default());
    let counties = RwSignal::new(Vec::<String>::new());

    Effect::new(move || {
        let params = params.read();
        let scope = AlertScope {
            scanner_id: params.get("id").and_then(|id| id.parse().ok()),
            sub_category: params.get("sub_category").map(|s| decode_route_param(&s)).filter(|s| !s.is_empty()),
        };
        list.update(|state| state.set_scope(scope));
    });

    let query = Memo::new(move |_| list.with(AlertListState::query));
    Effect::new(move || {
        query.track();
        let Some(fetch) = list.try_update(AlertListState::begin_fetch) else {
            return;
        };
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            match api.alerts_by_filter(&fetch.query).await {
                Ok(page) => list.update(|state| {
                    state.finish_fetch(fetch.seq, page);
                }),
                Err(e) => {
                    leptos::logging::warn!("alerts fetch failed: {e}");
                    list.update(|state| {
                        state.fail_fetch(fetch.seq);
                    });
                }
            }
        });
    });

    Effect::new(move || {
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            match api.state_list().await {
                Ok(states) => counties.set(county_names(&states)),
                Err(e) => leptos::logging::warn!("state list fetch failed: {e}"),
            }
        });
    });

    let on_edit = Callback::new(move |edit: FilterEdit| {
        list.update(|state| {
            state.edit(edit);
        });
    });
    let on_page = Callback::new(move |page: usize| {
        list.update(|state| state.set_page(u32::try_from(page).unwrap_or(u32::MAX)));
    });
    let on_rows = Callback::new(move |rows: usize| {
        list.update(|state| state.set_limit(u32::try_from(rows).unwrap_or(u32::MAX)));
    });
    let on_export = move |_| {
        let csv = list.with_untracked(|state| alerts_csv(&state.alerts));
        download_text("alerts.csv", "text/csv", &csv);
    };

    let heading = move || {
        list.with(|state| match &state.scope.sub_category {
            Some(sub) => format!("Alerts · {sub}"),
            None => "Alerts".to_owned(),
        })
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{heading}</h1>
                <button class="btn btn--ghost" on:click=on_export>
                    "Export CSV"
                </button>
            </header>
            <AlertFilters
                filter=Signal::derive(move || list.with(|state| state.filter.clone()))
                counties=counties
                on_edit=on_edit
            />
            <AlertTable
                alerts=Signal::derive(move || list.with(|state| state.alerts.clone()))
                loading=Signal::derive(move || list.with(|state| state.loading))
            />
            <PaginationBar
                page=Signal::derive(move || list.with(|state| state.page as usize))
                rows=Signal::derive(move || list.with(|state| state.limit as usize))
                options=PAGE_SIZE_OPTIONS.iter().map(|n| *n as usize).collect()
                label=Signal::derive(move || list.with(AlertListState::range_label))
                has_next=Signal::derive(move || list.with(AlertListState::has_next))
                on_page=on_page
                on_rows=on_rows
            />
        </section>
    }
}
