use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use crate::calendar::date::format_display_date;
use crate::calendar::{RangeDatePicker, RangePickerOptions, RangeSelection};
use crate::components::calendar_month::CalendarMonth;
use crate::components::popover::Popover;

/// The picker is usually placed inside a form; its own actions must never
/// submit it.
const FOOTER_BUTTON_TYPE: ButtonType = ButtonType::Button;

fn range_label(selection: RangeSelection) -> String {
    match (selection.start(), selection.end()) {
        (Some(start), Some(end)) => format!(
            "{} → {}",
            format_display_date(start),
            format_display_date(end)
        ),
        (Some(start), None) => format!("{} → …", format_display_date(start)),
        _ => "Select your dates".to_string(),
    }
}

/// Two-month check-in/check-out calendar. The selection in progress stays
/// inside the picker until "Apply" hands it to `on_confirm`.
#[component]
pub fn StayRangePicker(
    #[prop(into)] value: Signal<RangeSelection>,
    #[prop(into)] min_date: Signal<NaiveDate>,
    #[prop(optional)] options: RangePickerOptions,
    #[prop(into)] on_confirm: Callback<RangeSelection>,
) -> impl IntoView {
    let picker = RwSignal::new(RangeDatePicker::new(min_date.get_untracked(), options));
    let is_open = Signal::derive(move || picker.get().is_open());

    let confirm = move || {
        if let Some(selection) = picker.try_update(|p| p.confirm()).flatten() {
            on_confirm.run(selection);
        }
    };

    view! {
        <Popover
            is_open=is_open
            policy=picker.get_untracked().options().placement
            on_dismiss=move || picker.update(|p| p.close())
            trigger=Box::new(move || {
                view! {
                    <button
                        type="button"
                        class="range-picker-trigger"
                        on:click=move |_| {
                            if picker.get_untracked().is_open() {
                                picker.update(|p| p.close());
                            } else {
                                picker.update(|p| p.open(value.get_untracked(), min_date.get_untracked()));
                            }
                        }
                    >
                        {move || range_label(value.get())}
                    </button>
                }
                    .into_any()
            })
        >
            <div class="range-picker">
                <div class="date-picker-header">
                    <button type="button" class="month-nav" on:click=move |_| picker.update(|p| p.prev_month())>
                        "←"
                    </button>
                    <button type="button" class="month-nav" on:click=move |_| picker.update(|p| p.next_month())>
                        "→"
                    </button>
                </div>
                <div class="range-picker-panels">
                    {move || {
                        let state = picker.get();
                        let (left_cursor, right_cursor) = state.panels();
                        let (left, right) = state.grids();
                        let pick = Callback::new(move |date: NaiveDate| {
                            picker.update(|p| {
                                p.select_day(date);
                            })
                        });
                        view! {
                            <CalendarMonth title=left_cursor.title() cells=left on_pick=pick />
                            <CalendarMonth title=right_cursor.title() cells=right on_pick=pick />
                        }
                    }}
                </div>
                <div class="range-picker-footer">
                    <span class="range-picker-nights">
                        {move || {
                            picker
                                .get()
                                .selection()
                                .nights()
                                .map(|n| format!("{} night{}", n, if n == 1 { "" } else { "s" }))
                                .unwrap_or_default()
                        }}
                    </span>
                    <Button
                        button_type=FOOTER_BUTTON_TYPE
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| picker.update(|p| p.reset())
                    >
                        "Clear"
                    </Button>
                    <Button
                        button_type=FOOTER_BUTTON_TYPE
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        on_click=move |_| confirm()
                    >
                        "Apply"
                    </Button>
                </div>
            </div>
        </Popover>
    }
}
