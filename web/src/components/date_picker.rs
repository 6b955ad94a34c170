use chrono::NaiveDate;
use leptos::prelude::*;

use crate::calendar::date::format_display_date;
use crate::calendar::{PlacementPolicy, SingleDatePicker};
use crate::components::calendar_month::CalendarMonth;
use crate::components::popover::Popover;

/// What the user did to a single-date picker. The owner applies it to its
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Toggle,
    Dismiss,
    PrevMonth,
    NextMonth,
    Pick(NaiveDate),
}

#[component]
pub fn DatePicker(
    label: &'static str,
    #[prop(into)] picker: Signal<SingleDatePicker>,
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    #[prop(into)] min_date: Signal<NaiveDate>,
    /// Trigger does nothing while inert (e.g. check-out before check-in).
    #[prop(optional, into)]
    inert: Signal<bool>,
    #[prop(optional)] policy: PlacementPolicy,
    #[prop(into)] on_event: Callback<PickerEvent>,
) -> impl IntoView {
    let is_open = Signal::derive(move || picker.get().is_open());

    view! {
        <Popover
            is_open=is_open
            policy=policy
            on_dismiss=move || on_event.run(PickerEvent::Dismiss)
            trigger=Box::new(move || {
                view! {
                    <button
                        type="button"
                        class="date-picker-trigger"
                        class:inert=move || inert.get()
                        aria-disabled=move || inert.get().to_string()
                        on:click=move |_| {
                            if !inert.get_untracked() {
                                on_event.run(PickerEvent::Toggle);
                            }
                        }
                    >
                        <span class="date-picker-label">{label}</span>
                        <span class="date-picker-value">
                            {move || {
                                value
                                    .get()
                                    .map(format_display_date)
                                    .unwrap_or_else(|| "Add date".to_string())
                            }}
                        </span>
                    </button>
                }
                    .into_any()
            })
        >
            <div class="date-picker">
                <div class="date-picker-header">
                    <button
                        type="button"
                        class="month-nav"
                        on:click=move |_| on_event.run(PickerEvent::PrevMonth)
                    >
                        "←"
                    </button>
                    <button
                        type="button"
                        class="month-nav"
                        on:click=move |_| on_event.run(PickerEvent::NextMonth)
                    >
                        "→"
                    </button>
                </div>
                {move || {
                    let state = picker.get();
                    state
                        .cursor()
                        .map(|cursor| {
                            view! {
                                <CalendarMonth
                                    title=cursor.title()
                                    cells=state.grid(min_date.get(), value.get())
                                    on_pick=Callback::new(move |date| on_event.run(PickerEvent::Pick(date)))
                                />
                            }
                        })
                }}
            </div>
        </Popover>
    }
}
