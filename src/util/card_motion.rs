//! Product card entrance stagger and hover tilt.

#[cfg(test)]
#[path = "card_motion_test.rs"]
mod card_motion_test;

pub const STAGGER_STEP_MS: u64 = 80;
const MAX_TILT_DEG: f64 = 5.0;

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)";

/// Inline style delaying the entrance animation of the card at `index`.
pub fn stagger_style(index: usize) -> String {
    let delay = STAGGER_STEP_MS.saturating_mul(u64::try_from(index).unwrap_or(u64::MAX));
    format!("animation-delay: {delay}ms")
}

/// CSS transform tilting a card toward a pointer at (`x`, `y`) within it.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return TILT_RESET.to_owned();
    }
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = ((y - center_y) / center_y) * -MAX_TILT_DEG;
    let rotate_y = ((x - center_x) / center_x) * MAX_TILT_DEG;
    format!("perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) scale(1.02)")
}
