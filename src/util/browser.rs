//! Thin wrappers over browser globals used by pages and components.
//!
//! Outside the browser every helper is a no-op so components still build
//! natively.

#[cfg(feature = "csr")]
use std::time::Duration;

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                leptos::logging::warn!("could not open {url}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Current time as an ISO-8601 string; empty outside the browser.
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

const GEOLOCATION_TIMEOUT_MS: u32 = 5000;

/// Ask the browser for the current position.
///
/// Exactly one callback runs later: `on_success` with latitude and longitude,
/// or `on_error` with the `GeolocationPositionError` code. Returns `false`
/// when geolocation is unavailable, in which case neither runs.
pub fn current_position(on_success: impl FnOnce(f64, f64) + 'static, on_error: impl FnOnce(u16) + 'static) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
            return false;
        };
        let success = Closure::once_into_js(move |position: web_sys::GeolocationPosition| {
            let coords = position.coords();
            on_success(coords.latitude(), coords.longitude());
        });
        let failure = Closure::once_into_js(move |error: web_sys::GeolocationPositionError| {
            leptos::logging::warn!("location lookup failed: {}", error.message());
            on_error(error.code());
        });
        let options = web_sys::PositionOptions::new();
        options.set_enable_high_accuracy(true);
        options.set_timeout(GEOLOCATION_TIMEOUT_MS);
        options.set_maximum_age(0);
        geolocation
            .get_current_position_with_error_callback_and_options(
                success.unchecked_ref(),
                Some(failure.unchecked_ref()),
                &options,
            )
            .is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (on_success, on_error);
        false
    }
}

/// Run `f` on the event loop after `delay_ms`.
pub fn after_ms(delay_ms: u64, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(delay_ms)).await;
        f();
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay_ms, f);
    }
}
