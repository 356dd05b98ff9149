use crate::{
    foundation::core::{Size, Vec2},
    layout::anchor::AnchorFlags,
};

/// Offsets that shrink a stretched child rect by `value` on all four sides.
///
/// Returns `(offset_min, offset_max)`: min is the left/bottom edge, max the right/top edge.
pub fn inset(value: f64) -> (Vec2, Vec2) {
    (Vec2::new(value, value), Vec2::new(-value, -value))
}

/// Vertical anchored position of the content box.
///
/// Only `y` is derived from the anchor; the horizontal position is left to the host.
pub fn content_vertical_position(flags: AnchorFlags, width_scaler: f64) -> f64 {
    if flags.contains(AnchorFlags::TOP) {
        width_scaler
    } else if flags.contains(AnchorFlags::BOTTOM) {
        0.0
    } else {
        width_scaler / 2.0
    }
}

/// Anchored position of the name tag relative to the content box it is nested in.
///
/// The tag sits outside the content box on the anchored edge; on a centred axis it
/// is aligned with the content's leading edge (x) or stacked above it (y).
pub fn name_tag_position(flags: AnchorFlags, content: Size, name_tag: Size) -> Vec2 {
    let x = if flags.contains(AnchorFlags::RIGHT) {
        content.width / 2.0
    } else if flags.contains(AnchorFlags::LEFT) {
        -content.width / 2.0
    } else {
        -content.width / 2.0 + name_tag.width / 2.0
    };

    let y = if flags.contains(AnchorFlags::TOP) {
        -content.height / 2.0
    } else if flags.contains(AnchorFlags::BOTTOM) {
        content.height / 2.0
    } else {
        content.height / 2.0 + name_tag.height / 2.0
    };

    Vec2::new(x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
