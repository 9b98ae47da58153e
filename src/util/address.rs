//! Delivery-location labels for the manual address form and the
//! current-location lookup.

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

pub const MISSING_ADDRESS_MESSAGE: &str = "Please enter at least Area and Pincode";
pub const GEOLOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser.";
pub const DETECTING_LABEL: &str = "Detecting...";

/// Label shown when a position lookup fails with the given
/// `GeolocationPositionError` code.
pub fn location_error_message(code: u16) -> &'static str {
    match code {
        1 => "Permission denied.",
        2 => "Position unavailable.",
        3 => "Request timed out.",
        _ => "Location error.",
    }
}

pub fn coordinates_label(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.4}, {longitude:.4}")
}

/// Uppercase the first character of every word (`[A-Za-z0-9_]` run).
pub fn capitalize_words(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for ch in raw.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !in_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        in_word = is_word;
    }
    out
}

/// Build the location label from the manual address fields.
///
/// # Errors
///
/// Returns [`MISSING_ADDRESS_MESSAGE`] when area or pincode is blank.
pub fn format_address(area: &str, pin: &str, road: &str) -> Result<String, &'static str> {
    let area = area.trim();
    let pin = pin.trim();
    let road = road.trim();
    if area.is_empty() || pin.is_empty() {
        return Err(MISSING_ADDRESS_MESSAGE);
    }
    let area = capitalize_words(area);
    if road.is_empty() {
        Ok(format!("{area}, {pin}"))
    } else {
        Ok(format!("{area}, {}", capitalize_words(road)))
    }
}
