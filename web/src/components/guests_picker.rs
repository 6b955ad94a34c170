use leptos::prelude::*;

use crate::booking::search::{MAX_GUESTS, MIN_GUESTS};
use crate::calendar::positioning::LIST_POPOVER_HEIGHT;
use crate::calendar::PlacementPolicy;
use crate::components::popover::Popover;

fn guests_label(guests: u8) -> String {
    if guests == 1 {
        "1 guest".to_string()
    } else {
        format!("{} guests", guests)
    }
}

#[component]
pub fn GuestsPicker(
    #[prop(into)] guests: Signal<u8>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(optional)] policy: PlacementPolicy,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <Popover
            is_open=is_open
            policy=policy
            height=LIST_POPOVER_HEIGHT
            on_dismiss=on_close
            trigger=Box::new(move || {
                view! {
                    <button type="button" class="guests-trigger" on:click=move |_| on_toggle.run(())>
                        <span class="date-picker-label">"Guests"</span>
                        <span class="date-picker-value">{move || guests_label(guests.get())}</span>
                    </button>
                }
                    .into_any()
            })
        >
            <div class="guests-stepper">
                <button
                    type="button"
                    disabled=move || guests.get() <= MIN_GUESTS
                    on:click=move |_| on_remove.run(())
                >
                    "−"
                </button>
                <span class="guests-count">{move || guests.get()}</span>
                <button
                    type="button"
                    disabled=move || guests.get() >= MAX_GUESTS
                    on:click=move |_| on_add.run(())
                >
                    "+"
                </button>
            </div>
        </Popover>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guests_label() {
        assert_eq!(guests_label(1), "1 guest");
        assert_eq!(guests_label(4), "4 guests");
    }
}
