//! Filter bar for the alert list.
//!
//! Every input reports a single [`FilterEdit`]; the owning page decides what
//! happens next (page reset, re-fetch).

use contracts::dates::{format_date_input, parse_date_input};
use contracts::{AlertCategory, StarRating};
use leptos::prelude::*;

use crate::state::alert_list::{AlertFilter, FilterEdit};

#[component]
pub fn AlertFilters(
    #[prop(into)] filter: Signal<AlertFilter>,
    #[prop(into)] counties: Signal<Vec<String>>,
    on_edit: Callback<FilterEdit>,
) -> impl IntoView {
    let on_date = move |raw: String, to: bool| {
        let Ok(date) = parse_date_input(&raw) else {
            return;
        };
        on_edit.run(if to { FilterEdit::DateTo(date) } else { FilterEdit::DateFrom(date) });
    };

    view! {
        <div class="alert-filters">
            <input
                class="alert-filters__input"
                type="search"
                placeholder="Search headline"
                prop:value=move || filter.get().headline
                on:input=move |ev| on_edit.run(FilterEdit::Headline(event_target_value(&ev)))
            />
            <input
                class="alert-filters__input"
                type="search"
                placeholder="Search description"
                prop:value=move || filter.get().description
                on:input=move |ev| on_edit.run(FilterEdit::Description(event_target_value(&ev)))
            />
            <input
                class="alert-filters__input alert-filters__input--narrow"
                type="text"
                inputmode="numeric"
                placeholder="Alert ID"
                prop:value=move || filter.get().alert_id
                on:input=move |ev| on_edit.run(FilterEdit::AlertId(event_target_value(&ev)))
            />
            <select
                class="alert-filters__select"
                on:change=move |ev| {
                    if let Ok(category) = event_target_value(&ev).parse::<AlertCategory>() {
                        on_edit.run(FilterEdit::Category(category));
                    }
                }
            >
                {AlertCategory::CHOICES
                    .into_iter()
                    .map(|category| {
                        view! {
                            <option value=category.key() selected=move || filter.get().category == category>
                                {category.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <label class="alert-filters__date">
                "From"
                <input
                    type="date"
                    prop:value=move || format_date_input(filter.get().date_from)
                    on:change=move |ev| on_date(event_target_value(&ev), false)
                />
            </label>
            <label class="alert-filters__date">
                "To"
                <input
                    type="date"
                    prop:value=move || format_date_input(filter.get().date_to)
                    on:change=move |ev| on_date(event_target_value(&ev), true)
                />
            </label>
            <input
                class="alert-filters__input"
                type="text"
                list="county-options"
                placeholder="County"
                prop:value=move || filter.get().county
                on:input=move |ev| on_edit.run(FilterEdit::County(event_target_value(&ev)))
            />
            <datalist id="county-options">
                <For each=move || counties.get() key=|name| name.clone() let:name>
                    <option value=name></option>
                </For>
            </datalist>
            <select
                class="alert-filters__select"
                on:change=move |ev| {
                    let rating = event_target_value(&ev).parse::<u8>().ok().and_then(|v| StarRating::new(v).ok());
                    if let Some(rating) = rating {
                        on_edit.run(FilterEdit::Stars(rating));
                    }
                }
            >
                {(0..=StarRating::MAX)
                    .map(|value| {
                        let label = if value == 0 { "Any rating".to_owned() } else { "★".repeat(usize::from(value)) };
                        view! {
                            <option value=value.to_string() selected=move || filter.get().stars.value() == value>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
