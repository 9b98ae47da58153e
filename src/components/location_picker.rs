//! Delivery-location pill with current-location lookup and manual address dropdown.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::address::{
    DETECTING_LABEL, GEOLOCATION_UNSUPPORTED_MESSAGE, coordinates_label, format_address, location_error_message,
};
use crate::util::browser;

#[component]
pub fn LocationPicker() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let area = RwSignal::new(String::new());
    let pin = RwSignal::new(String::new());
    let road = RwSignal::new(String::new());

    let on_save = move |_| match format_address(&area.get_untracked(), &pin.get_untracked(), &road.get_untracked()) {
        Ok(label) => ui.update(|u| {
            u.location_label = label;
            u.location_open = false;
        }),
        Err(message) => browser::alert(message),
    };

    let on_current = move |_| {
        let asked = browser::current_position(
            move |latitude, longitude| {
                ui.try_update(|u| {
                    u.location_label = coordinates_label(latitude, longitude);
                    u.location_open = false;
                });
            },
            move |code| {
                ui.try_update(|u| u.location_label = location_error_message(code).to_owned());
            },
        );
        if asked {
            ui.update(|u| u.location_label = DETECTING_LABEL.to_owned());
        } else {
            browser::alert(GEOLOCATION_UNSUPPORTED_MESSAGE);
        }
    };

    view! {
        <div class="location" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
            <button class="location-pill" on:click=move |_| ui.update(UiState::toggle_location)>
                <span class="location-pill__icon">"📍"</span>
                <span class="location-pill__text">{move || ui.get().location_label}</span>
            </button>
            <div class="location-dropdown" class:active=move || ui.get().location_open>
                <button class="btn current-location" on:click=on_current>
                    "📍 Use current location"
                </button>
                <p class="location-dropdown__title">"Enter delivery address"</p>
                <input
                    class="addr-input"
                    type="text"
                    placeholder="Area / Locality"
                    prop:value=move || area.get()
                    on:input=move |ev| area.set(event_target_value(&ev))
                />
                <input
                    class="addr-input"
                    type="text"
                    inputmode="numeric"
                    placeholder="Pincode"
                    prop:value=move || pin.get()
                    on:input=move |ev| pin.set(event_target_value(&ev))
                />
                <input
                    class="addr-input"
                    type="text"
                    placeholder="Road / Street (optional)"
                    prop:value=move || road.get()
                    on:input=move |ev| road.set(event_target_value(&ev))
                />
                <button class="btn addr-save" on:click=on_save>
                    "Save address"
                </button>
            </div>
        </div>
    }
}
