use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent, Spinner, SpinnerSize};

/// Tinted one-line notice for form feedback.
#[component]
pub fn Notice(intent: MessageBarIntent, #[prop(into)] text: String) -> impl IntoView {
    view! { <MessageBar intent=intent>{text}</MessageBar> }
}

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    let text = message.unwrap_or_else(|| "We couldn't complete that. Please try again.".to_string());
    view! { <Notice intent=MessageBarIntent::Error text=text/> }
}

#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Medium/>
            {message.map(|msg| view! { <p class="loading-message">{msg}</p> })}
        </div>
    }
}
