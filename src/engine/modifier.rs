use crate::{
    dialog::modification::Modification,
    foundation::error::DialogResult,
    layout::{
        anchor::{anchor_to_flags, pivot_for_flags},
        placement::{content_vertical_position, inset, name_tag_position},
        scaler::CanvasScaler,
    },
    scene::surface::{NodeId, RectSurface, RenderRoot, VisualHandle},
};

/// Engine-wide switches that shape how a modification is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutSettings {
    pub canvas: CanvasScaler,
    /// Inset the name tag's padding marker too (otherwise it is reset to 0).
    pub apply_padding_to_name_tag: bool,
    /// Inset the name tag's margin marker too (otherwise it is reset to 0).
    pub apply_margin_to_name_tag: bool,
}

/// The dialog currently on screen: a content box with its name tag nested inside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveDialog {
    pub content: VisualHandle,
    pub name_tag: VisualHandle,
}

impl ActiveDialog {
    /// Every roundness marker in the dialog subtree, content first.
    pub fn roundness_markers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.content
            .roundness_markers
            .iter()
            .chain(&self.name_tag.roundness_markers)
            .copied()
    }
}

fn apply_inset<H: RenderRoot>(host: &mut H, node: NodeId, value: f64) -> DialogResult<()> {
    let (min, max) = inset(value);
    let rect = host.rect_mut(node)?;
    rect.set_offset_min(min);
    rect.set_offset_max(max);
    Ok(())
}

/// Apply `modification` to the active dialog in place.
///
/// Sets pivots, padding and margin insets, roundness, then the anchored positions of
/// the content box (vertical only) and the name tag. Re-applying the same
/// modification to unchanged geometry is a no-op.
pub fn apply_modification<H: RenderRoot>(
    host: &mut H,
    active: &ActiveDialog,
    modification: &Modification,
    settings: &LayoutSettings,
) -> DialogResult<()> {
    let content = &active.content;
    let name_tag = &active.name_tag;
    let flags = anchor_to_flags(modification.anchor());

    let pivot = pivot_for_flags(flags);
    host.rect_mut(name_tag.root)?.set_pivot(pivot);
    host.rect_mut(content.root)?.set_pivot(pivot);

    let padding = modification.padding();
    let name_tag_padding = if settings.apply_padding_to_name_tag {
        padding
    } else {
        0.0
    };
    apply_inset(host, name_tag.padding_marker, name_tag_padding)?;
    apply_inset(host, content.padding_marker, padding)?;

    let margin = modification.margin();
    let name_tag_margin = if settings.apply_margin_to_name_tag {
        margin
    } else {
        0.0
    };
    apply_inset(host, name_tag.margin_marker, name_tag_margin)?;
    apply_inset(host, content.margin_marker, margin)?;

    for marker in active.roundness_markers() {
        host.set_pixels_per_unit_multiplier(marker, modification.pixel_per_unit_multiplier())?;
    }

    let width_scaler = settings
        .canvas
        .width_matching_scaler(host.viewport_aspect());
    let content_rect = host.rect_mut(content.root)?;
    let mut pos = content_rect.anchored_position();
    pos.y = content_vertical_position(flags, width_scaler);
    content_rect.set_anchored_position(pos);
    let content_size = content_rect.size();

    let name_tag_rect = host.rect_mut(name_tag.root)?;
    let pos = name_tag_position(flags, content_size, name_tag_rect.size());
    name_tag_rect.set_anchored_position(pos);

    tracing::debug!(
        anchor = ?modification.anchor(),
        padding,
        margin,
        content_y = content_vertical_position(flags, width_scaler),
        name_tag_x = pos.x,
        name_tag_y = pos.y,
        "applied modification"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/engine/modifier.rs"]
mod tests;
