use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::calendar::date::WEEKDAY_LABELS;
use crate::calendar::{DayCell, GridCell};

fn day_class(cell: &DayCell) -> String {
    let mut classes = vec!["calendar-day"];

    if cell.disabled {
        classes.push("past");
    }
    if cell.is_selected() {
        classes.push("selected");
    }
    if cell.is_in_range() {
        classes.push("in-range");
    }

    classes.join(" ")
}

/// One month of day buttons. Disabled days render but never report a pick.
#[component]
pub fn CalendarMonth(
    title: String,
    cells: Vec<GridCell>,
    #[prop(into)] on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    view! {
        <div class="calendar-month">
            <div class="month-label">{title}</div>
            <div class="weekday-headers">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="weekday-header">{*label}</div> })
                    .collect_view()}
            </div>
            <div class="calendar-days">
                {cells
                    .into_iter()
                    .map(|cell| match cell {
                        GridCell::Blank => view! { <div class="calendar-day empty"></div> }.into_any(),
                        GridCell::Day(day) => {
                            let date = day.date;
                            view! {
                                <button
                                    type="button"
                                    class=day_class(&day)
                                    disabled=day.disabled
                                    on:click=move |_| {
                                        if !day.disabled {
                                            on_pick.run(date);
                                        }
                                    }
                                >
                                    {date.day()}
                                </button>
                            }
                                .into_any()
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
