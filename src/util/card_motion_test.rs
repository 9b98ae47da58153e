use super::*;

#[test]
fn stagger_style_scales_with_index() {
    assert_eq!(stagger_style(0), "animation-delay: 0ms");
    assert_eq!(stagger_style(3), "animation-delay: 240ms");
}

#[test]
fn tilt_transform_only_tilts_vertically_on_center_column() {
    assert_eq!(
        tilt_transform(100.0, 0.0, 200.0, 100.0),
        "perspective(1000px) rotateX(5.00deg) rotateY(0.00deg) scale(1.02)"
    );
}

#[test]
fn tilt_transform_reaches_max_at_corner() {
    assert_eq!(
        tilt_transform(200.0, 0.0, 200.0, 100.0),
        "perspective(1000px) rotateX(5.00deg) rotateY(5.00deg) scale(1.02)"
    );
}

#[test]
fn tilt_transform_resets_for_degenerate_box() {
    assert_eq!(tilt_transform(1.0, 1.0, 0.0, 10.0), TILT_RESET);
}

#[test]
fn stagger_style_saturates_for_huge_index() {
    assert_eq!(stagger_style(usize::MAX), format!("animation-delay: {}ms", u64::MAX));
}
