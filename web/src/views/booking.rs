use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_query_map;
use shared_types::InquiryReceipt;
use thaw::*;

use crate::booking::search::{DEFAULT_GUESTS, MAX_GUESTS, MIN_GUESTS};
use crate::booking::{compose_inquiry, BookingQuery};
use crate::calendar::date::today;
use crate::calendar::{PlacementPolicy, RangePickerOptions, RangeSelection, StayDates};
use crate::components::status::{ErrorView, Notice};
use crate::components::range_picker::StayRangePicker;
use crate::content;
use crate::server::submit_booking_inquiry;
use crate::utils::server_error::server_error_message;

/// Turns the stay from the query string into a range, keeping only dates
/// that are still bookable.
fn initial_selection(query: &BookingQuery) -> RangeSelection {
    let stay = StayDates::prefilled(query.check_in, query.check_out, today());
    let mut selection = RangeSelection::new();
    if let Some(check_in) = stay.check_in() {
        selection.click(check_in);
        if let Some(check_out) = stay.check_out() {
            selection.click(check_out);
        }
    }
    selection
}

fn receipt_message(receipt: &InquiryReceipt) -> String {
    format!(
        "Thanks! Request {} for {} night{} is on its way to our reservations team.",
        receipt.reference,
        receipt.nights,
        if receipt.nights == 1 { "" } else { "s" },
    )
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = query_map.with_untracked(|q| {
        BookingQuery::from_params(
            q.get("city"),
            q.get("check_in"),
            q.get("check_out"),
            q.get("guests"),
        )
    });
    let initial_room = query_map
        .with_untracked(|q| q.get("room"))
        .filter(|slug| content::find_room(slug).is_some());

    let city = RwSignal::new(query.city.clone().unwrap_or_default());
    let room = RwSignal::new(initial_room.unwrap_or_default());
    let selection = RwSignal::new(initial_selection(&query));
    let guests = RwSignal::new(query.guests.unwrap_or(DEFAULT_GUESTS));
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let receipt = RwSignal::new(Option::<InquiryReceipt>::None);

    let submit = move || {
        error_message.set(None);
        let room_slug = Some(room.get_untracked()).filter(|slug| !slug.is_empty());
        let inquiry = match compose_inquiry(
            &city.get_untracked(),
            room_slug,
            selection.get_untracked(),
            guests.get_untracked(),
            &name.get_untracked(),
            &email.get_untracked(),
        ) {
            Ok(inquiry) => inquiry,
            Err(e) => {
                error_message.set(Some(e.to_string()));
                return;
            }
        };

        loading.set(true);
        spawn_local(async move {
            match submit_booking_inquiry(inquiry).await {
                Ok(confirmed) => receipt.set(Some(confirmed)),
                Err(e) => {
                    leptos::logging::error!("Booking inquiry failed: {}", e);
                    error_message.set(Some(format!(
                        "Could not send your request: {}",
                        server_error_message(&e.to_string())
                    )));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="booking-page">
            <h1>"Plan your stay"</h1>
            {move || match receipt.get() {
                Some(confirmed) => view! {
                    <Notice intent=MessageBarIntent::Success text=receipt_message(&confirmed)/>
                }.into_any(),
                None => view! {
                    <form class="booking-form" on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }>
                        <label class="booking-field">
                            <span>"City"</span>
                            <select
                                prop:value=move || city.get()
                                on:change=move |ev| city.set(event_target_value(&ev))
                            >
                                <option value="">"Choose a city"</option>
                                {content::cities()
                                    .into_iter()
                                    .map(|c| { let value = c.name.clone(); view! { <option value=value>{c.name}</option> } })
                                    .collect_view()}
                            </select>
                        </label>

                        <label class="booking-field">
                            <span>"Room"</span>
                            <select
                                prop:value=move || room.get()
                                on:change=move |ev| room.set(event_target_value(&ev))
                            >
                                <option value="">"Any room"</option>
                                {content::rooms()
                                    .into_iter()
                                    .map(|r| view! { <option value=r.slug>{r.name}</option> })
                                    .collect_view()}
                            </select>
                        </label>

                        <div class="booking-field">
                            <span>"Dates"</span>
                            // inline form: the calendar always drops down like a bottom sheet
                            <StayRangePicker
                                value=selection
                                min_date=Signal::derive(today)
                                options=RangePickerOptions { placement: PlacementPolicy::AlwaysBelow }
                                on_confirm=Callback::new(move |picked| selection.set(picked))
                            />
                        </div>

                        <label class="booking-field">
                            <span>"Guests"</span>
                            <input
                                type="number"
                                min=MIN_GUESTS
                                max=MAX_GUESTS
                                prop:value=move || guests.get().to_string()
                                on:change=move |ev| {
                                    if let Ok(count) = event_target_value(&ev).parse::<u8>() {
                                        guests.set(count.clamp(MIN_GUESTS, MAX_GUESTS));
                                    }
                                }
                            />
                        </label>

                        <Input placeholder="Full name" value=name/>
                        <Input placeholder="Email" input_type=InputType::Email value=email/>

                        {move || error_message.get().map(|msg| view! {
                            <ErrorView message=Some(msg)/>
                        })}

                        <Button
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                            loading=Signal::from(loading)
                        >
                            "Request booking"
                        </Button>
                    </form>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query(check_in: &str, check_out: &str) -> BookingQuery {
        BookingQuery::from_params(
            None,
            Some(check_in.to_string()),
            Some(check_out.to_string()),
            None,
        )
    }

    #[test]
    fn test_receipt_message_pluralizes_nights() {
        let mut receipt = InquiryReceipt {
            reference: "SH-20250601-000042".to_string(),
            nights: 1,
        };
        assert!(receipt_message(&receipt).contains("for 1 night is"));

        receipt.nights = 3;
        assert!(receipt_message(&receipt).contains("for 3 nights is"));
    }

    #[test]
    fn test_initial_selection_from_query() {
        let check_in = today() + chrono::Duration::days(3);
        let check_out = check_in + chrono::Duration::days(2);
        let selection = initial_selection(&query(
            &check_in.format("%Y-%m-%d").to_string(),
            &check_out.format("%Y-%m-%d").to_string(),
        ));
        assert_eq!(selection.start(), Some(check_in));
        assert_eq!(selection.end(), Some(check_out));
    }

    #[test]
    fn test_initial_selection_drops_past_stay() {
        let selection = initial_selection(&query("2001-01-01", "2001-01-05"));
        assert_eq!(selection, RangeSelection::new());
        assert!(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap() < today());
    }
}
