use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::booking::{SearchForm, SearchPopover};
use crate::calendar::date::today;
use crate::calendar::{PlacementPolicy, StayField};
use crate::components::city_dropdown::CityDropdown;
use crate::components::date_picker::{DatePicker, PickerEvent};
use crate::components::guests_picker::GuestsPicker;
use crate::content;

/// City, stay dates and guests in one bar. Submitting navigates to the
/// booking page with the choices in the query string.
#[component]
pub fn SearchBar(#[prop(optional)] policy: PlacementPolicy) -> impl IntoView {
    let form = RwSignal::new(SearchForm::new());
    let navigate = use_navigate();

    let date_event = move |field: StayField| {
        move |event: PickerEvent| {
            let today = today();
            form.update(|f| match event {
                PickerEvent::Toggle => {
                    f.toggle(field.into(), today);
                }
                PickerEvent::Dismiss => f.close(field.into()),
                PickerEvent::PrevMonth => f.prev_month(field),
                PickerEvent::NextMonth => f.next_month(field),
                PickerEvent::Pick(date) => {
                    f.select_day(field, date, today);
                }
            });
        }
    };

    let stay_picker = move |field: StayField| {
        Signal::derive(move || form.with(|f| *f.stay().picker(field)))
    };
    let stay_value = move |field: StayField| {
        Signal::derive(move || form.with(|f| f.stay().value(field)))
    };
    // recomputed from the current check-in on every read
    let stay_min = move |field: StayField| {
        Signal::derive(move || form.with(|f| f.stay().min_date(field, today())))
    };
    let popover_open =
        move |popover: SearchPopover| Signal::derive(move || form.with(|f| f.is_open(popover)));

    view! {
        <div class="search-bar">
            <CityDropdown
                cities=content::cities()
                selected=Signal::derive(move || form.with(|f| f.city().map(str::to_string)))
                is_open=popover_open(SearchPopover::City)
                policy=policy
                on_toggle=move || {
                    form.update(|f| {
                        f.toggle(SearchPopover::City, today());
                    })
                }
                on_close=move || form.update(|f| f.close(SearchPopover::City))
                on_select=Callback::new(move |city: String| form.update(|f| f.select_city(city)))
            />
            <DatePicker
                label="Check-in"
                picker=stay_picker(StayField::CheckIn)
                value=stay_value(StayField::CheckIn)
                min_date=stay_min(StayField::CheckIn)
                policy=policy
                on_event=Callback::new(date_event(StayField::CheckIn))
            />
            <DatePicker
                label="Check-out"
                picker=stay_picker(StayField::CheckOut)
                value=stay_value(StayField::CheckOut)
                min_date=stay_min(StayField::CheckOut)
                inert=Signal::derive(move || form.with(|f| f.stay().check_in().is_none()))
                policy=policy
                on_event=Callback::new(date_event(StayField::CheckOut))
            />
            <GuestsPicker
                guests=Signal::derive(move || form.with(|f| f.guests()))
                is_open=popover_open(SearchPopover::Guests)
                policy=policy
                on_toggle=move || {
                    form.update(|f| {
                        f.toggle(SearchPopover::Guests, today());
                    })
                }
                on_close=move || form.update(|f| f.close(SearchPopover::Guests))
                on_add=move || form.update(|f| f.add_guest())
                on_remove=move || form.update(|f| f.remove_guest())
            />
            <button
                type="button"
                class="search-submit"
                on:click=move |_| {
                    let url = form.with_untracked(|f| f.to_query().booking_url());
                    form.update(|f| f.close_all());
                    navigate(&url, Default::default());
                }
            >
                "Check availability"
            </button>
        </div>
    }
}
