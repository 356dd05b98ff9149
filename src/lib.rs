//! dialogbox lays out and sequences dialog boxes on a retained 2D surface.
//!
//! A dialog is a content box with a speaker name tag nested against it. Both are
//! drawn on background templates that are instantiated once per index and reused.
//!
//! # Pipeline overview
//!
//! 1. **Sequence**: pick the next dialog from the configured list (or one by index).
//! 2. **Resolve**: fetch or instantiate the name tag and content backgrounds from the
//!    [`InstanceCache`] and refresh their text.
//! 3. **Lay out**: apply a [`Modification`] (anchor, padding, margin, corner roundness),
//!    or the one-shot planned modification if one is pending.
//!
//! The host surface is abstracted behind [`RenderRoot`]; [`SceneTree`] is the
//! in-memory implementation used by the CLI and the tests.
//!
//! # Getting started
//!
//! ```
//! use dialogbox::{
//!     Anchor, BackgroundSet, Dialog, DialogConfig, DialogManager, ModificationBuilder,
//!     SceneTree, Size, VisualTemplate,
//! };
//!
//! let config = DialogConfig {
//!     backgrounds: BackgroundSet {
//!         name_tags: vec![VisualTemplate::background("Tag", Size::new(160.0, 40.0))],
//!         contents: vec![VisualTemplate::background("Box", Size::new(600.0, 200.0))],
//!     },
//!     dialogs: vec![Dialog::new("Ava", "Hello."), Dialog::new("Ben", "Hi.")],
//!     ..DialogConfig::default()
//! };
//!
//! let mut manager = DialogManager::new(SceneTree::new(16.0 / 9.0)?, config);
//! manager.plan_modification(ModificationBuilder::new().anchor(Anchor::TopCenter).build()?);
//! assert_eq!(manager.dispatch_next()?, 1);
//! assert_eq!(manager.dispatch_next()?, 2);
//! # Ok::<(), dialogbox::DialogError>(())
//! ```
#![forbid(unsafe_code)]

mod dialog;
mod engine;
mod foundation;
mod layout;
mod scene;

pub use dialog::builder::ModificationBuilder;
pub use dialog::config::{BackgroundSet, DialogConfig};
pub use dialog::model::{ContentSpec, Dialog, NameTagSpec};
pub use dialog::modification::{CurveKey, InterpolationCurve, InterpolationMode, Modification};
pub use engine::cache::{InstanceCache, PendingVisual, VisualCategory};
pub use engine::manager::DialogManager;
pub use engine::modifier::{ActiveDialog, LayoutSettings, apply_modification};
pub use engine::sequencer::DialogSequencer;
pub use foundation::core::{Rgba8, Size, Vec2, lerp};
pub use foundation::error::{DialogError, DialogResult};
pub use layout::anchor::{Anchor, AnchorFlags, anchor_to_flags, pivot_for_flags};
pub use layout::placement::{content_vertical_position, inset, name_tag_position};
pub use layout::scaler::CanvasScaler;
pub use scene::surface::{
    FontRef, NodeId, OverflowMode, RectSurface, RectTransform, RenderRoot, TextDisplay,
    VisualHandle,
};
pub use scene::template::{NodeRole, VisualTemplate};
pub use scene::tree::{NodeSnapshot, SceneTree};
