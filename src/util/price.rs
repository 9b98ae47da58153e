//! Rupee price extraction and display helpers.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

/// Parse the first digit run of a scraped price (`"₹1,299"` → `1299`).
///
/// Commas inside the run are skipped; anything after it (paise, units) is ignored.
pub fn parse_price(raw: &str) -> Option<u64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Integer directly following the first `₹` that is followed by a digit.
pub fn rupee_amount(text: &str) -> Option<u64> {
    text.match_indices('₹').find_map(|(idx, sym)| {
        let digits: String = text[idx + sym.len()..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    })
}

/// Amount saved by choosing `chosen` over `other`, floored at zero.
pub fn savings(chosen: Option<u64>, other: Option<u64>) -> u64 {
    match (chosen, other) {
        (Some(chosen), Some(other)) => other.saturating_sub(chosen),
        _ => 0,
    }
}

pub fn saved_label(amount: u64) -> String {
    format!("Saved ₹{amount}")
}

/// `₹` plus the amount with comma thousands separators.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₹');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
