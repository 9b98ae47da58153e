//! Account creation page.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;

use super::sign_in::password_input_type;
use crate::net::error::ApiError;

pub const MISSING_SIGN_UP_FIELDS: &str = "Please fill in name, email, and password.";

/// Fields ready to submit: name and email trimmed, password as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_sign_up_input(name: &str, email: &str, password: &str) -> Result<SignUpInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_SIGN_UP_FIELDS);
    }
    Ok(SignUpInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

pub(crate) fn sign_up_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => err.server_message().unwrap_or("Sign up failed.").to_owned(),
        _ => "Could not sign up. Is the backend running?".to_owned(),
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
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
        let input = match validate_sign_up_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked())
        {
            Ok(input) => input,
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
                match crate::net::api::signup(&base, &input.name, &input.email, &input.password).await {
                    Ok(user) => {
                        auth.update(|a| a.sign_in(&crate::util::storage::BrowserStorage, user));
                        navigate("/signin", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("sign up failed: {e}");
                        crate::util::browser::alert(&sign_up_failure_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <p class="auth-card__subtitle">"Start saving on every order"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Sign up"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/signin">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
