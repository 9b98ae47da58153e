//! Retailer badge classification by platform keyword.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

/// Badge letter and CSS modifier for a retailer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformBadge {
    pub label: String,
    pub class: &'static str,
}

/// Classify a platform name by case-insensitive keyword.
pub fn platform_badge(platform: &str) -> PlatformBadge {
    let Some(first) = platform.chars().next() else {
        return PlatformBadge { label: "•".to_owned(), class: "offline" };
    };
    let p = platform.to_lowercase();
    let known = [
        ("blink", "B", "blinkit"),
        ("zept", "Z", "zepto"),
        ("insta", "I", "instamart"),
        ("amazon", "A", "amazon"),
        ("flip", "F", "flipkart"),
    ];
    for (needle, label, class) in known {
        if p.contains(needle) {
            return PlatformBadge { label: label.to_owned(), class };
        }
    }
    PlatformBadge { label: first.to_uppercase().collect(), class: "offline" }
}
