use super::*;

#[test]
fn capitalize_words_uppercases_each_word_start() {
    assert_eq!(capitalize_words("indiranagar"), "Indiranagar");
    assert_eq!(capitalize_words("100 feet road"), "100 Feet Road");
    assert_eq!(capitalize_words("hsr-layout sector_2"), "Hsr-Layout Sector_2");
}

#[test]
fn format_address_prefers_road_over_pin() {
    assert_eq!(format_address(" koramangala ", "560034", "80 feet road"), Ok("Koramangala, 80 Feet Road".to_owned()));
}

#[test]
fn format_address_falls_back_to_pin_without_road() {
    assert_eq!(format_address("koramangala", " 560034 ", "  "), Ok("Koramangala, 560034".to_owned()));
}

#[test]
fn format_address_requires_area_and_pin() {
    assert_eq!(format_address("", "560034", "road"), Err(MISSING_ADDRESS_MESSAGE));
    assert_eq!(format_address("area", "   ", "road"), Err(MISSING_ADDRESS_MESSAGE));
}

#[test]
fn location_errors_map_to_messages() {
    assert_eq!(location_error_message(1), "Permission denied.");
    assert_eq!(location_error_message(2), "Position unavailable.");
    assert_eq!(location_error_message(3), "Request timed out.");
    assert_eq!(location_error_message(0), "Location error.");
}

#[test]
fn coordinates_label_rounds_to_four_places() {
    assert_eq!(coordinates_label(12.971_598_7, 77.594_562_6), "12.9716, 77.5946");
}
