//! Profile button and dropdown with sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let profile = Memo::new(move |_| auth.get().profile(&BrowserStorage));

    let on_sign_out = move |_| {
        auth.update(|a| a.sign_out(&BrowserStorage));
        ui.update(|u| u.profile_open = false);
        navigate("/signin", NavigateOptions::default());
    };

    view! {
        <div class="profile" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
            <button class="profile-btn" title="Profile" on:click=move |_| ui.update(UiState::toggle_profile)>
                <span class="avatar">{move || profile.get().initial}</span>
            </button>
            <div class="profile-dropdown" class:active=move || ui.get().profile_open>
                <div class="profile-dropdown__header">
                    <span class="avatar avatar--large">{move || profile.get().initial}</span>
                    <div>
                        <p class="profile-dropdown__name">{move || profile.get().name}</p>
                        <p class="profile-dropdown__since">
                            {move || profile.get().member_since.unwrap_or_default()}
                        </p>
                    </div>
                </div>
                <p class="profile-dropdown__saved">
                    {move || format!("Saved items: {}", profile.get().saved_items)}
                </p>
                <a class="profile-dropdown__link" href="/history">"Search history"</a>
                <button class="btn profile-dropdown__signout" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
