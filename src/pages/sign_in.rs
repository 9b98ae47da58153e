//! Sign-in page with email + password.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::net::error::ApiError;

pub const MISSING_CREDENTIALS: &str = "Please enter email and password.";

/// Trim the email and require both fields. The password is sent as typed.
pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Alert text for a failed sign-in.
pub(crate) fn sign_in_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => err.server_message().unwrap_or("Login failed.").to_owned(),
        _ => "Could not sign in. Is the backend running?".to_owned(),
    }
}

/// `type` attribute for a password input with visibility `shown`.
pub(crate) fn password_input_type(shown: bool) -> &'static str {
    if shown { "text" } else { "password" }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_in_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(fields) => fields,
                Err(message) => {
                    crate::util::browser::alert(message);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let base = crate::config::BackendConfig::from_build_env().auth_url;
                match crate::net::api::login(&base, &email_value, &password_value).await {
                    Ok(user) => {
                        auth.update(|a| a.sign_in(&crate::util::storage::BrowserStorage, user));
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("sign in failed: {e}");
                        crate::util::browser::alert(&sign_in_failure_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to compare prices"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="password-field">
                        <input
                            class="auth-input"
                            type=move || password_input_type(show_password.get())
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="password-toggle"
                            type="button"
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="btn auth-submit" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "New here? "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
