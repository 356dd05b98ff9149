use super::*;
use crate::layout::anchor::{Anchor, anchor_to_flags};

const CONTENT: Size = Size::new(600.0, 200.0);
const NAME_TAG: Size = Size::new(160.0, 40.0);

#[test]
fn inset_is_symmetric() {
    let (min, max) = inset(12.5);
    assert_eq!(min, Vec2::new(12.5, 12.5));
    assert_eq!(max, Vec2::new(-12.5, -12.5));
    assert_eq!(inset(0.0), (Vec2::ZERO, Vec2::ZERO));
}

#[test]
fn content_y_follows_vertical_flag() {
    let top = anchor_to_flags(Anchor::TopCenter);
    let bottom = anchor_to_flags(Anchor::BottomRight);
    let middle = anchor_to_flags(Anchor::CenterLeft);
    assert_eq!(content_vertical_position(top, 540.0), 540.0);
    assert_eq!(content_vertical_position(bottom, 540.0), 0.0);
    assert_eq!(content_vertical_position(middle, 540.0), 270.0);
}

#[test]
fn name_tag_sits_on_anchored_edges() {
    let p = name_tag_position(anchor_to_flags(Anchor::BottomLeft), CONTENT, NAME_TAG);
    assert_eq!(p, Vec2::new(-300.0, 100.0));

    let p = name_tag_position(anchor_to_flags(Anchor::TopRight), CONTENT, NAME_TAG);
    assert_eq!(p, Vec2::new(300.0, -100.0));
}

#[test]
fn name_tag_centered_axes_use_own_half_size() {
    let p = name_tag_position(anchor_to_flags(Anchor::Center), CONTENT, NAME_TAG);
    assert_eq!(p, Vec2::new(-300.0 + 80.0, 100.0 + 20.0));
}
