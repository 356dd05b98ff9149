use super::*;
use crate::{
    dialog::{builder::ModificationBuilder, config::BackgroundSet},
    engine::cache::VisualCategory,
    foundation::core::{Size, Vec2},
    layout::{anchor::Anchor, scaler::CanvasScaler},
    scene::{
        surface::{FontRef, NodeId, RectSurface, RectTransform, TextDisplay, VisualHandle},
        template::{NodeRole, VisualTemplate},
        tree::SceneTree,
    },
};

fn backgrounds() -> BackgroundSet {
    BackgroundSet {
        name_tags: vec![
            VisualTemplate::background("Tag", Size::new(160.0, 40.0)),
            VisualTemplate::background("TagAlt", Size::new(180.0, 44.0)),
        ],
        contents: vec![
            VisualTemplate::background("Box", Size::new(600.0, 200.0)),
            VisualTemplate::background("BoxAlt", Size::new(640.0, 220.0)),
        ],
    }
}

fn config(dialogs: Vec<Dialog>) -> DialogConfig {
    DialogConfig {
        canvas: CanvasScaler::new(Vec2::new(1920.0, 1080.0), 0.0).unwrap(),
        backgrounds: backgrounds(),
        dialogs,
        ..DialogConfig::default()
    }
}

fn three_dialogs() -> Vec<Dialog> {
    vec![
        Dialog::new("Ava", "A"),
        Dialog::new("Ben", "B"),
        Dialog::new("Cid", "C"),
    ]
}

fn manager(dialogs: Vec<Dialog>) -> DialogManager<SceneTree> {
    DialogManager::new(SceneTree::new(2.0).unwrap(), config(dialogs))
}

fn content_pivot(m: &DialogManager<SceneTree>) -> Vec2 {
    let active = m.active_dialog().unwrap();
    m.host().rect(active.content.root).unwrap().pivot()
}

#[test]
fn empty_list_reports_empty_sequence() {
    let mut m = manager(Vec::new());
    assert!(matches!(m.dispatch_next(), Err(DialogError::EmptySequence)));
    assert_eq!(m.next_index(), 0);
    assert!(m.active_dialog().is_none());
}

#[test]
fn dispatch_next_walks_then_stops_at_the_end() {
    let mut m = manager(three_dialogs());
    for expected in 1..=3 {
        assert_eq!(m.dispatch_next().unwrap(), expected);
    }
    let err = m.dispatch_next().unwrap_err();
    assert!(matches!(
        err,
        DialogError::IndexOutOfRange {
            index: 3,
            len: 3,
            ..
        }
    ));
    assert_eq!(m.next_index(), 3);

    m.reset();
    assert_eq!(m.dispatch_next().unwrap(), 1);
}

#[test]
fn negative_index_is_rejected_without_side_effects() {
    let mut m = manager(three_dialogs());
    assert!(matches!(
        m.dispatch_at(-1),
        Err(DialogError::InvalidArgument(_))
    ));
    assert!(m.active_dialog().is_none());
    assert!(m.cache().is_empty());

    assert!(matches!(
        m.dispatch_at(3),
        Err(DialogError::IndexOutOfRange { index: 3, .. })
    ));
    assert_eq!(m.next_index(), 0);
}

#[test]
fn planned_modification_applies_exactly_once() {
    let mut m = manager(three_dialogs());
    m.plan_modification(ModificationBuilder::new().anchor(Anchor::TopLeft).build().unwrap());

    m.dispatch_next().unwrap();
    assert_eq!(content_pivot(&m), Vec2::new(0.0, 1.0));
    assert!(m.planned_modification().is_none());

    // Default modification anchors bottom-left.
    m.dispatch_next().unwrap();
    assert_eq!(content_pivot(&m), Vec2::new(0.0, 0.0));
}

#[test]
fn later_plan_replaces_earlier_one() {
    let mut m = manager(three_dialogs());
    m.plan_modification(ModificationBuilder::new().anchor(Anchor::TopLeft).build().unwrap());
    m.plan_modification(ModificationBuilder::new().anchor(Anchor::CenterRight).build().unwrap());
    m.dispatch_at(0).unwrap();
    assert_eq!(content_pivot(&m), Vec2::new(1.0, 0.5));
}

#[test]
fn explicit_dispatch_reuses_cached_backgrounds() {
    let mut m = manager(three_dialogs());
    m.dispatch_at(0).unwrap();
    let first = m.active_dialog().unwrap().clone();
    let nodes = m.host().len();

    m.dispatch_at(1).unwrap();
    let second = m.active_dialog().unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(m.host().len(), nodes);
    assert_eq!(m.host().text(second.content.text).unwrap().text, "B");
    assert_eq!(m.host().text(second.name_tag.text).unwrap().text, "Ben");
    assert_eq!(m.cache().len(VisualCategory::Content), 1);
    assert_eq!(m.next_index(), 0);
}

#[test]
fn name_tag_is_nested_under_content_and_renamed() {
    let mut m = manager(three_dialogs());
    m.dispatch_next().unwrap();
    let active = m.active_dialog().unwrap();
    assert_eq!(
        m.host().parent(active.name_tag.root).unwrap(),
        Some(active.content.root)
    );
    assert_eq!(m.host().name(active.name_tag.root).unwrap(), "NameTag#0");
    assert_eq!(m.host().name(active.content.root).unwrap(), "Content#0");
}

#[test]
fn disabled_name_tag_is_hidden() {
    let mut hidden = Dialog::new("", "narration");
    hidden.name_tag.enabled = false;
    let mut m = manager(vec![hidden, Dialog::new("Ava", "hi")]);

    m.dispatch_next().unwrap();
    let tag = m.active_dialog().unwrap().name_tag.root;
    assert!(!m.host().is_visible(tag).unwrap());

    m.dispatch_next().unwrap();
    assert!(m.host().is_visible(tag).unwrap());
}

#[test]
fn repeated_dispatch_is_idempotent() {
    let mut m = manager(three_dialogs());
    m.dispatch_at(2).unwrap();
    let root = m.active_dialog().unwrap().content.root;
    let first = m.host().snapshot(root).unwrap();
    m.dispatch_at(2).unwrap();
    assert_eq!(m.host().snapshot(root).unwrap(), first);
}

#[test]
fn bad_background_index_leaves_cache_untouched() {
    let mut d = Dialog::new("Ava", "oops");
    d.content.background_index = 9;
    let mut m = manager(vec![d]);

    let err = m.dispatch_next().unwrap_err();
    assert!(matches!(
        err,
        DialogError::IndexOutOfRange {
            what: "content background",
            index: 9,
            len: 2,
        }
    ));
    assert!(m.cache().is_empty());
    assert!(m.active_dialog().is_none());
    assert_eq!(m.host().len(), 1);
    assert_eq!(m.next_index(), 0);
}

#[test]
fn missing_backgrounds_degrade_the_manager() {
    let mut cfg = config(three_dialogs());
    cfg.backgrounds.name_tags.clear();
    let mut m = DialogManager::new(SceneTree::new(2.0).unwrap(), cfg);

    assert!(m.is_degraded());
    assert!(matches!(m.dispatch_next(), Err(DialogError::Degraded(_))));
    assert!(matches!(m.dispatch_at(0), Err(DialogError::Degraded(_))));
    assert_eq!(m.next_index(), 0);
}

#[test]
fn default_font_fills_only_missing_fonts() {
    let mut styled = Dialog::new("Ava", "hi");
    styled.content.font = Some(FontRef::new("Serif"));
    let mut cfg = config(vec![styled]);
    cfg.default_font = Some(FontRef::new("Sans"));
    let mut m = DialogManager::new(SceneTree::new(2.0).unwrap(), cfg);

    assert_eq!(m.dialogs()[0].name_tag.font, Some(FontRef::new("Sans")));
    assert_eq!(m.dialogs()[0].content.font, Some(FontRef::new("Serif")));

    m.dispatch_next().unwrap();
    let active = m.active_dialog().unwrap();
    assert_eq!(
        m.host().text(active.content.text).unwrap().font,
        Some(FontRef::new("Serif"))
    );
}

#[test]
fn modifying_without_active_dialog_is_a_structure_error() {
    let mut m = manager(three_dialogs());
    assert!(matches!(
        m.apply_modification(&Modification::default()),
        Err(DialogError::Structure(_))
    ));

    m.plan_modification(Modification::default());
    assert!(m.consume_planned_if_present().is_err());
    assert!(m.planned_modification().is_some());
}

#[test]
fn consume_planned_relays_active_dialog() {
    let mut m = manager(three_dialogs());
    assert!(!m.consume_planned_if_present().unwrap());

    m.dispatch_next().unwrap();
    m.plan_modification(ModificationBuilder::new().anchor(Anchor::TopCenter).build().unwrap());
    assert!(m.consume_planned_if_present().unwrap());
    assert_eq!(content_pivot(&m), Vec2::new(0.5, 1.0));
    assert!(m.planned_modification().is_none());
}

#[test]
fn strict_constructor_rejects_empty_list() {
    let err =
        DialogManager::try_new(SceneTree::new(2.0).unwrap(), config(Vec::new())).unwrap_err();
    assert!(matches!(err, DialogError::EmptySequence));
}

fn dialog_on(name: &str, name_tag: usize, content: usize) -> Dialog {
    let mut d = Dialog::new(name, name.to_lowercase());
    d.name_tag.background_index = name_tag;
    d.content.background_index = content;
    d
}

#[test]
fn malformed_template_leaves_shown_dialog_untouched() {
    let mut cfg = config(vec![
        dialog_on("Ava", 0, 0),
        dialog_on("Ben", 0, 1),
        dialog_on("Cid", 1, 1),
    ]);
    // No text element.
    cfg.backgrounds.contents[1] =
        VisualTemplate::new("Broken", NodeRole::Frame, Size::new(600.0, 200.0)).child(
            VisualTemplate::new("Margin", NodeRole::MarginMarker, Size::ZERO)
                .child(VisualTemplate::new("Padding", NodeRole::PaddingMarker, Size::ZERO)),
        );
    let mut m = DialogManager::new(SceneTree::new(2.0).unwrap(), cfg);

    m.dispatch_next().unwrap();
    let shown = m.active_dialog().unwrap().clone();
    let nodes = m.host().len();

    // Cached name tag, broken content.
    assert!(matches!(m.dispatch_next(), Err(DialogError::Structure(_))));
    // Uncached name tag, broken content.
    assert!(matches!(m.dispatch_at(2), Err(DialogError::Structure(_))));

    assert_eq!(m.active_dialog(), Some(&shown));
    assert_eq!(m.host().text(shown.name_tag.text).unwrap().text, "Ava");
    assert_eq!(m.host().text(shown.content.text).unwrap().text, "ava");
    assert_eq!(m.host().len(), nodes);
    assert_eq!(m.cache().len(VisualCategory::NameTag), 1);
    assert_eq!(m.cache().len(VisualCategory::Content), 1);
    assert_eq!(m.next_index(), 1);
}

/// Scene tree whose rects can be locked to make layout fail.
#[derive(Debug)]
struct LockableScene {
    scene: SceneTree,
    locked: bool,
}

impl RenderRoot for LockableScene {
    type Rect = RectTransform;

    fn instantiate(&mut self, template: &VisualTemplate) -> DialogResult<VisualHandle> {
        self.scene.instantiate(template)
    }

    fn parent(&self, node: NodeId) -> DialogResult<Option<NodeId>> {
        self.scene.parent(node)
    }

    fn set_parent(&mut self, child: NodeId, parent: NodeId) -> DialogResult<()> {
        self.scene.set_parent(child, parent)
    }

    fn rename(&mut self, node: NodeId, name: &str) -> DialogResult<()> {
        self.scene.rename(node, name)
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) -> DialogResult<()> {
        self.scene.set_visible(node, visible)
    }

    fn text_mut(&mut self, node: NodeId) -> DialogResult<&mut TextDisplay> {
        self.scene.text_mut(node)
    }

    fn rect(&self, node: NodeId) -> DialogResult<&RectTransform> {
        self.scene.rect(node)
    }

    fn rect_mut(&mut self, node: NodeId) -> DialogResult<&mut RectTransform> {
        if self.locked {
            return Err(DialogError::structure("rect is locked"));
        }
        self.scene.rect_mut(node)
    }

    fn set_pixels_per_unit_multiplier(&mut self, node: NodeId, value: f64) -> DialogResult<()> {
        self.scene.set_pixels_per_unit_multiplier(node, value)
    }

    fn viewport_aspect(&self) -> f64 {
        self.scene.viewport_aspect()
    }
}

#[test]
fn failed_layout_keeps_previous_dialog_on_screen() {
    let host = LockableScene {
        scene: SceneTree::new(2.0).unwrap(),
        locked: false,
    };
    let mut m = DialogManager::new(
        host,
        config(vec![dialog_on("Ava", 0, 0), dialog_on("Ben", 0, 1)]),
    );
    m.dispatch_next().unwrap();
    let shown = m.active_dialog().unwrap().clone();
    m.plan_modification(ModificationBuilder::new().anchor(Anchor::TopLeft).build().unwrap());

    m.host_mut().locked = true;
    assert!(matches!(m.dispatch_next(), Err(DialogError::Structure(_))));
    assert_eq!(m.next_index(), 1);
    assert_eq!(m.active_dialog(), Some(&shown));
    assert!(m.planned_modification().is_some());
    assert_eq!(m.cache().len(VisualCategory::Content), 1);
    let scene = &m.host().scene;
    assert_eq!(
        scene.parent(shown.name_tag.root).unwrap(),
        Some(shown.content.root)
    );
    assert_eq!(scene.text(shown.name_tag.text).unwrap().text, "Ava");

    m.host_mut().locked = false;
    assert_eq!(m.dispatch_next().unwrap(), 2);
    let active = m.active_dialog().unwrap().clone();
    assert_ne!(active.content.root, shown.content.root);
    assert_eq!(
        m.host().rect(active.content.root).unwrap().pivot(),
        Vec2::new(0.0, 1.0)
    );
    assert!(m.planned_modification().is_none());
    assert_eq!(m.host().scene.text(active.content.text).unwrap().text, "ben");
}
