use smallvec::SmallVec;

use crate::{
    foundation::{
        core::{Rgba8, Size, Vec2},
        error::DialogResult,
    },
    scene::template::VisualTemplate,
};

/// Opaque handle to a node owned by a [`RenderRoot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Minimal 2D rectangle capability the layout engine mutates.
///
/// Coordinates follow the usual UI convention: `y` grows upward, pivots are
/// normalized to the rect (`(0, 0)` bottom-left, `(1, 1)` top-right), offsets are
/// relative to the parent's anchor rectangle.
pub trait RectSurface {
    fn pivot(&self) -> Vec2;
    fn set_pivot(&mut self, pivot: Vec2);

    fn anchored_position(&self) -> Vec2;
    fn set_anchored_position(&mut self, position: Vec2);

    /// Lower-left offset of the rect from its anchors.
    fn offset_min(&self) -> Vec2;
    fn set_offset_min(&mut self, offset: Vec2);

    /// Upper-right offset of the rect from its anchors.
    fn offset_max(&self) -> Vec2;
    fn set_offset_max(&mut self, offset: Vec2);

    fn size(&self) -> Size;
}

/// Plain-data rect used by [`crate::SceneTree`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RectTransform {
    pub pivot: Vec2,
    pub anchored_position: Vec2,
    pub offset_min: Vec2,
    pub offset_max: Vec2,
    pub size: Size,
}

impl Default for RectTransform {
    fn default() -> Self {
        Self {
            pivot: Vec2::new(0.5, 0.5),
            anchored_position: Vec2::ZERO,
            offset_min: Vec2::ZERO,
            offset_max: Vec2::ZERO,
            size: Size::ZERO,
        }
    }
}

impl RectTransform {
    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

impl RectSurface for RectTransform {
    fn pivot(&self) -> Vec2 {
        self.pivot
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    fn anchored_position(&self) -> Vec2 {
        self.anchored_position
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        self.anchored_position = position;
    }

    fn offset_min(&self) -> Vec2 {
        self.offset_min
    }

    fn set_offset_min(&mut self, offset: Vec2) {
        self.offset_min = offset;
    }

    fn offset_max(&self) -> Vec2 {
        self.offset_max
    }

    fn set_offset_max(&mut self, offset: Vec2) {
        self.offset_max = offset;
    }

    fn size(&self) -> Size {
        self.size
    }
}

/// How a text element handles content that does not fit its box.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum OverflowMode {
    Overflow,
    Ellipsis,
    Masking,
    #[default]
    Truncate,
    ScrollRect,
    Page,
    Linked,
}

/// Reference to a font asset by its host-side name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FontRef(pub String);

impl FontRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The single text element nested in every background visual.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TextDisplay {
    pub text: String,
    pub overflow: OverflowMode,
    pub color: Rgba8,
    pub font: Option<FontRef>,
}

/// An instantiated background visual with its role-tagged sub-nodes resolved.
///
/// Roles are resolved once when the template is instantiated, so the engine never
/// searches the tree by name afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualHandle {
    pub root: NodeId,
    pub text: NodeId,
    pub padding_marker: NodeId,
    pub margin_marker: NodeId,
    pub roundness_markers: SmallVec<[NodeId; 4]>,
}

/// Host surface the dialog engine renders into.
///
/// Implementations own the node storage; the engine only holds [`NodeId`]s.
pub trait RenderRoot {
    type Rect: RectSurface;

    /// Instantiate `template` under the render root and resolve its roles.
    ///
    /// Must not leave partially created nodes behind on error.
    fn instantiate(&mut self, template: &VisualTemplate) -> DialogResult<VisualHandle>;

    fn parent(&self, node: NodeId) -> DialogResult<Option<NodeId>>;

    fn set_parent(&mut self, child: NodeId, parent: NodeId) -> DialogResult<()>;

    fn rename(&mut self, node: NodeId, name: &str) -> DialogResult<()>;

    fn set_visible(&mut self, node: NodeId, visible: bool) -> DialogResult<()>;

    fn text_mut(&mut self, node: NodeId) -> DialogResult<&mut TextDisplay>;

    fn rect(&self, node: NodeId) -> DialogResult<&Self::Rect>;

    fn rect_mut(&mut self, node: NodeId) -> DialogResult<&mut Self::Rect>;

    /// Set the per-unit scale of a sliced image (controls corner roundness).
    fn set_pixels_per_unit_multiplier(&mut self, node: NodeId, value: f64) -> DialogResult<()>;

    /// Current viewport aspect ratio (width / height).
    fn viewport_aspect(&self) -> f64;
}
