use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found-code">"404"</div>
            <h1>"Page Not Found"</h1>
            <p>"This room doesn't exist, or it has been moved."</p>
            <div class="not-found-actions">
                <button
                    type="button"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/", Default::default())
                    }
                >
                    "Go Home"
                </button>
                <button
                    type="button"
                    on:click=move |_| navigate("/booking", Default::default())
                >
                    "Book a stay"
                </button>
            </div>
        </div>
    }
}
