use crate::server::admin_login;
use crate::utils::auth::store_admin_token;
use crate::utils::server_error::server_error_message;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use shared_types::AdminCredentials;
use thaw::*;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let signed_in = RwSignal::new(false);

    let is_button_disabled =
        Memo::new(move |_| email.get().is_empty() || password.get().is_empty());

    // Redirect once the token is stored
    Effect::new(move |_| {
        if signed_in.get() {
            navigate("/admin", Default::default());
        }
    });

    let submit_login = move |_| {
        loading.set(true);
        error_message.set(None);

        let credentials = AdminCredentials {
            email: email.get(),
            password: password.get(),
        };

        spawn_local(async move {
            match admin_login(credentials).await {
                Ok(auth_token) => {
                    store_admin_token(&auth_token.token);
                    signed_in.set(true);
                }
                Err(e) => error_message.set(Some(server_error_message(&e.to_string()))),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Admin Login"</h1>
                    <p>"Sign in to manage the Stayhaven site"</p>
                </div>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_login(());
                }>
                    <div class="auth-form-group">
                        <Input
                            class="auth-input"
                            placeholder="Email"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>

                    <div class="auth-form-group">
                        <div class="auth-input-wrapper">
                            <Input
                                class="auth-input"
                                placeholder="Password"
                                input_type=Signal::derive(move || if password_visible.get() { InputType::Text } else { InputType::Password })
                                value=password
                            />
                            <button
                                type="button"
                                class="auth-password-toggle"
                                on:click=move |_| password_visible.set(!password_visible.get())
                            >
                                {move || if password_visible.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    {move || error_message.get().map(|msg| view! {
                        <div class="auth-error-message">{msg}</div>
                    })}

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        loading=Signal::from(loading)
                        disabled=Signal::from(is_button_disabled)
                    >
                        "Sign In"
                    </Button>
                </form>
            </div>
        </div>
    }
}

