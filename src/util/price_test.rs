use super::*;

#[test]
fn parse_price_reads_plain_and_symbol_prefixed_values() {
    assert_eq!(parse_price("10"), Some(10));
    assert_eq!(parse_price("₹45"), Some(45));
    assert_eq!(parse_price(" ₹ 1,299 "), Some(1299));
}

#[test]
fn parse_price_stops_at_decimal_point() {
    assert_eq!(parse_price("₹45.50"), Some(45));
}

#[test]
fn parse_price_rejects_text_without_digits() {
    assert_eq!(parse_price("—"), None);
    assert_eq!(parse_price(""), None);
}

#[test]
fn rupee_amount_reads_digits_after_symbol() {
    assert_eq!(rupee_amount("Saved ₹14"), Some(14));
    assert_eq!(rupee_amount("Saved ₹0"), Some(0));
}

#[test]
fn rupee_amount_skips_symbol_without_digits() {
    assert_eq!(rupee_amount("₹ then ₹7"), Some(7));
    assert_eq!(rupee_amount("Saved 14"), None);
    assert_eq!(rupee_amount("Saved ₹"), None);
}

#[test]
fn savings_is_difference_floored_at_zero() {
    assert_eq!(savings(Some(10), Some(12)), 2);
    assert_eq!(savings(Some(12), Some(10)), 0);
    assert_eq!(savings(Some(10), None), 0);
    assert_eq!(savings(None, Some(10)), 0);
}

#[test]
fn saved_label_formats_amount() {
    assert_eq!(saved_label(14), "Saved ₹14");
}

#[test]
fn format_rupees_groups_thousands() {
    assert_eq!(format_rupees(0), "₹0");
    assert_eq!(format_rupees(999), "₹999");
    assert_eq!(format_rupees(1000), "₹1,000");
    assert_eq!(format_rupees(1_234_567), "₹1,234,567");
}
