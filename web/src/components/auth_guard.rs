use chrono::Utc;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

use crate::components::status::LoadingView;
use crate::server::verify_admin_token;
use crate::utils::auth::{clear_admin_token, read_admin_token, token_looks_live};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Checking,
    Allowed,
    Denied,
}

/// Checks the stored admin token: locally for shape and expiry, then with
/// the server for the signature.
fn use_admin_auth() -> ReadSignal<GuardState> {
    let (state, set_state) = signal(GuardState::Checking);

    Effect::new(move |_| {
        let Some(token) = read_admin_token() else {
            set_state.set(GuardState::Denied);
            return;
        };
        if !token_looks_live(&token, Utc::now().timestamp()) {
            clear_admin_token();
            set_state.set(GuardState::Denied);
            return;
        }

        spawn_local(async move {
            match verify_admin_token(token).await {
                Ok(true) => set_state.set(GuardState::Allowed),
                Ok(false) => {
                    clear_admin_token();
                    set_state.set(GuardState::Denied);
                }
                Err(e) => {
                    leptos::logging::error!("Failed to verify admin session: {}", e);
                    set_state.set(GuardState::Denied);
                }
            }
        });
    });

    state
}

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <LoadingView message=Some("Verifying access...".to_string())/>
        </div>
    }
}

#[component]
pub fn AccessDeniedState() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        navigate("/admin/login", Default::default());
    });

    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-denied-title">"Access Denied"</div>
                <div class="auth-guard-denied-subtitle">"Redirecting to login..."</div>
            </div>
        </div>
    }
}

#[component]
pub fn AdminAuthGuard(children: ChildrenFn) -> impl IntoView {
    let state = use_admin_auth();

    view! {
        <Show
            when=move || state.get() != GuardState::Checking
            fallback=move || view! { <LoadingState/> }
        >
            <Show
                when=move || state.get() == GuardState::Allowed
                fallback=move || view! { <AccessDeniedState/> }
                clone:children
            >
                {children()}
            </Show>
        </Show>
    }
}
