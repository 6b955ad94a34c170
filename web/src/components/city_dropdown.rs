use leptos::prelude::*;
use shared_types::City;

use crate::calendar::positioning::LIST_POPOVER_HEIGHT;
use crate::calendar::PlacementPolicy;
use crate::components::popover::Popover;

#[component]
pub fn CityDropdown(
    cities: Vec<City>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(optional)] policy: PlacementPolicy,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let cities = StoredValue::new(cities);

    view! {
        <Popover
            is_open=is_open
            policy=policy
            height=LIST_POPOVER_HEIGHT
            on_dismiss=on_close
            trigger=Box::new(move || {
                view! {
                    <button
                        type="button"
                        class="city-dropdown-trigger"
                        on:click=move |_| on_toggle.run(())
                    >
                        <span class="date-picker-label">"Destination"</span>
                        <span class="date-picker-value">
                            {move || selected.get().unwrap_or_else(|| "Where to?".to_string())}
                        </span>
                    </button>
                }
                    .into_any()
            })
        >
            <ul class="city-dropdown-list">
                {move || {
                    let current = selected.get();
                    cities
                        .get_value()
                        .into_iter()
                        .map(|city| {
                            let is_selected = current.as_deref() == Some(city.name.as_str());
                            let name = city.name.clone();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="city-option"
                                        class:selected=is_selected
                                        on:click=move |_| on_select.run(name.clone())
                                    >
                                        <span class="city-name">{city.name}</span>
                                        <span class="city-country">{city.country}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Popover>
    }
}
