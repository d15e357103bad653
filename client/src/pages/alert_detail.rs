//! Single-alert page: transcript, audio playback and candidate addresses.

use contracts::{AlertDetail, AlertDetailQuery, Grantee, UnlockContactRequest};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::address_table::AddressTable;
use crate::components::toast_host::notify;
use crate::config;
use crate::net::api::Api;
use crate::state::address_rows::ExpandedRows;
use crate::state::fetch_seq::{FetchSeq, still_current};
use crate::state::session::SessionState;
use crate::state::toast::{Severity, ToastState};
use crate::util::maps::decode_route_param;

const PLAYBACK_RATES: [f64; 3] = [0.25, 0.5, 1.0];

#[component]
pub fn AlertDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let detail = RwSignal::new(None::<AlertDetail>);
    let expanded = RwSignal::new(ExpandedRows::default());
    let grantees = RwSignal::new(None::<Vec<Grantee>>);
    let seq = RwSignal::new(FetchSeq::default());
    let reload = RwSignal::new(0_u32);
    let audio_ref = NodeRef::<leptos::html::Audio>::new();
    let playback_rate = RwSignal::new(1.0_f64);

    let query = Memo::new(move |_| {
        let params = params.read();
        AlertDetailQuery {
            alert_id: params.get("aid").and_then(|id| id.parse().ok()),
            scanner_id: params.get("id").and_then(|id| id.parse().ok()),
            sub_category: params.get("sub_category").map(|s| decode_route_param(&s)).filter(|s| !s.is_empty()),
        }
    });

    Effect::new(move || {
        let query = query.get();
        reload.track();
        let Some(ticket) = seq.try_update(FetchSeq::issue) else {
            return;
        };
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let result = api.alert_by_id(&query).await;
            if !still_current(seq, ticket) {
                return;
            }
            match result {
                Ok(loaded) => {
                    expanded.update(ExpandedRows::clear);
                    detail.set(Some(loaded));
                }
                Err(e) => leptos::logging::warn!("alert detail fetch failed: {e}"),
            }
        });
    });

    let on_unlock = Callback::new(move |address_id: i64| {
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let request = UnlockContactRequest { address_id: Some(address_id) };
            match api.unlock_contact_info(&request).await {
                Ok(ack) => {
                    let severity = if ack.status { Severity::Success } else { Severity::Error };
                    let message = if ack.message.is_empty() { "Contact info requested".to_owned() } else { ack.message };
                    notify(toasts, message, severity);
                    reload.update(|n| *n += 1);
                }
                Err(e) => notify(toasts, e.user_message("Failed to unlock contact info"), Severity::Error),
            }
        });
    });

    let on_grantees = Callback::new(move |address_id: i64| {
        let api = Api::for_session(&session.get_untracked());
        leptos::task::spawn_local(async move {
            let request = UnlockContactRequest { address_id: Some(address_id) };
            match api.grantee_info(&request).await {
                Ok(response) if response.status || !response.grantees.is_empty() => {
                    grantees.set(Some(response.grantees));
                }
                Ok(response) => notify(toasts, response.message, Severity::Error),
                Err(e) => notify(toasts, e.user_message("Failed to load grantees"), Severity::Error),
            }
        });
    });

    let set_rate = move |rate: f64| {
        playback_rate.set(rate);
        #[cfg(feature = "hydrate")]
        if let Some(audio) = audio_ref.get() {
            audio.set_playback_rate(rate);
        }
    };

    let alert = move || detail.with(|d| d.as_ref().map(|d| d.alert.clone()));
    let audio_url = move || {
        detail.with(|d| d.as_ref().and_then(|d| d.audio.as_ref()).and_then(|a| a.url(config::audio_base_url())))
    };
    let transcript = move || {
        detail.with(|d| {
            d.as_ref()
                .and_then(|d| d.audio.as_ref())
                .and_then(|a| a.transcript().map(str::to_owned))
                .unwrap_or_default()
        })
    };
    let scanner_label = move || {
        detail.with(|d| d.as_ref().and_then(|d| d.scanner.as_ref()).map(contracts::Scanner::label).unwrap_or_default())
    };

    view! {
        <section class="page page--detail">
            <Show when=move || detail.with(Option::is_some) fallback=|| view! { <p class="page-loading">"Loading alert..."</p> }>
                <header class="page__header">
                    <h1>{move || alert().map(|a| a.headline).unwrap_or_default()}</h1>
                    <span class="muted">{scanner_label}</span>
                </header>
                <dl class="detail-grid">
                    <dt>"Description"</dt>
                    <dd>{move || alert().map(|a| a.description).unwrap_or_default()}</dd>
                    <dt>"Recorded"</dt>
                    <dd>{move || alert().map(|a| a.date_time).unwrap_or_default()}</dd>
                    <dt>"Known address"</dt>
                    <dd>{move || alert().map(|a| a.address).unwrap_or_default()}</dd>
                    <dt>"Rating"</dt>
                    <dd>{move || alert().map(|a| a.rating.stars()).unwrap_or_default()}</dd>
                    <dt>"Transcript"</dt>
                    <dd class="detail-grid__transcript">{transcript}</dd>
                </dl>
                <Show when=move || audio_url().is_some()>
                    <div class="audio-player">
                        <audio node_ref=audio_ref controls=true src=move || audio_url().unwrap_or_default()></audio>
                        <div class="audio-player__rates">
                            {PLAYBACK_RATES
                                .into_iter()
                                .map(|rate| {
                                    view! {
                                        <button
                                            class="btn btn--ghost"
                                            class:btn--active=move || (playback_rate.get() - rate).abs() < f64::EPSILON
                                            on:click=move |_| set_rate(rate)
                                        >
                                            {format!("{rate}x")}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
                <h2>"Candidate addresses"</h2>
                <AddressTable
                    addresses=Signal::derive(move || detail.with(|d| d.as_ref().map(|d| d.addresses.clone()).unwrap_or_default()))
                    expanded=expanded
                    on_unlock=on_unlock
                    on_grantees=on_grantees
                />
                <Show when=move || grantees.with(Option::is_some)>
                    <div class="dialog-backdrop" on:click=move |_| grantees.set(None)>
                        <div class="dialog" on:click=|ev| ev.stop_propagation()>
                            <h2>"Grantees"</h2>
                            <ul class="grantee-list">
                                {move || {
                                    grantees
                                        .get()
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|g| {
                                            view! {
                                                <li>
                                                    <strong>{g.name}</strong>
                                                    " · "
                                                    {g.address}
                                                    " "
                                                    <span class="muted">{g.recorded_at.unwrap_or_default()}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                            <button class="btn btn--primary" on:click=move |_| grantees.set(None)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </Show>
            </Show>
        </section>
    }
}
