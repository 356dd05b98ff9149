use crate::foundation::core::Vec2;

/// One of nine screen positions a dialog can be anchored to.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    BottomLeft,
    BottomCenter,
    BottomRight,
    Center,
    CenterLeft,
    CenterRight,
}

impl Anchor {
    /// All anchors in declaration order.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
        Anchor::Center,
        Anchor::CenterLeft,
        Anchor::CenterRight,
    ];

    fn is_any_of(self, group: &[Anchor]) -> bool {
        group.contains(&self)
    }
}

const LEFT_GROUP: [Anchor; 3] = [Anchor::TopLeft, Anchor::BottomLeft, Anchor::CenterLeft];
const RIGHT_GROUP: [Anchor; 3] = [Anchor::TopRight, Anchor::BottomRight, Anchor::CenterRight];
const TOP_GROUP: [Anchor; 3] = [Anchor::TopCenter, Anchor::TopLeft, Anchor::TopRight];
const BOTTOM_GROUP: [Anchor; 3] = [
    Anchor::BottomCenter,
    Anchor::BottomLeft,
    Anchor::BottomRight,
];

bitflags::bitflags! {
    /// Directional flags derived from an [`Anchor`]: one horizontal and one vertical bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AnchorFlags: u8 {
        const LEFT     = 0b10_0000;
        const RIGHT    = 0b01_0000;
        const H_CENTER = 0b00_1000;
        const TOP      = 0b00_0100;
        const BOTTOM   = 0b00_0010;
        const V_CENTER = 0b00_0001;
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits() | Self::H_CENTER.bits();
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits() | Self::V_CENTER.bits();
    }
}

/// Map an anchor to its horizontal and vertical direction flags.
pub fn anchor_to_flags(anchor: Anchor) -> AnchorFlags {
    let horizontal = if anchor.is_any_of(&LEFT_GROUP) {
        AnchorFlags::LEFT
    } else if anchor.is_any_of(&RIGHT_GROUP) {
        AnchorFlags::RIGHT
    } else {
        AnchorFlags::H_CENTER
    };

    let vertical = if anchor.is_any_of(&TOP_GROUP) {
        AnchorFlags::TOP
    } else if anchor.is_any_of(&BOTTOM_GROUP) {
        AnchorFlags::BOTTOM
    } else {
        AnchorFlags::V_CENTER
    };

    horizontal | vertical
}

/// Pivot in normalized rect space (`y` up) for a set of anchor flags.
pub fn pivot_for_flags(flags: AnchorFlags) -> Vec2 {
    let x = if flags.contains(AnchorFlags::LEFT) {
        0.0
    } else if flags.contains(AnchorFlags::RIGHT) {
        1.0
    } else {
        0.5
    };

    let y = if flags.contains(AnchorFlags::TOP) {
        1.0
    } else if flags.contains(AnchorFlags::BOTTOM) {
        0.0
    } else {
        0.5
    };

    Vec2::new(x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anchor.rs"]
mod tests;
