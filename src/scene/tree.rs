use smallvec::SmallVec;

use crate::{
    foundation::{
        core::Size,
        error::{DialogError, DialogResult},
    },
    scene::{
        surface::{NodeId, RectTransform, RenderRoot, TextDisplay, VisualHandle},
        template::{NodeRole, VisualTemplate},
    },
};

#[derive(Clone, Debug)]
struct SceneNode {
    name: String,
    role: NodeRole,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: RectTransform,
    visible: bool,
    text: Option<TextDisplay>,
    pixels_per_unit_multiplier: f64,
}

impl SceneNode {
    fn new(name: String, role: NodeRole, size: Size, parent: Option<NodeId>) -> Self {
        Self {
            name,
            role,
            parent,
            children: Vec::new(),
            rect: RectTransform::with_size(size),
            visible: true,
            text: (role == NodeRole::Text).then(TextDisplay::default),
            pixels_per_unit_multiplier: 1.0,
        }
    }
}

/// Arena-backed retained node tree implementing [`RenderRoot`].
///
/// Node `0` is the canvas; instantiated templates are parented under it.
#[derive(Clone, Debug)]
pub struct SceneTree {
    nodes: Vec<SceneNode>,
    viewport_aspect: f64,
}

/// Serializable view of a subtree, for debugging and snapshot tests.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeSnapshot {
    pub name: String,
    pub role: NodeRole,
    pub visible: bool,
    pub rect: RectTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextDisplay>,
    pub pixels_per_unit_multiplier: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl SceneTree {
    pub fn new(viewport_aspect: f64) -> DialogResult<Self> {
        let mut tree = Self {
            nodes: vec![SceneNode::new(
                "Canvas".to_string(),
                NodeRole::Frame,
                Size::ZERO,
                None,
            )],
            viewport_aspect: 1.0,
        };
        tree.set_viewport_aspect(viewport_aspect)?;
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_viewport_aspect(&mut self, aspect: f64) -> DialogResult<()> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(DialogError::validation(format!(
                "viewport aspect must be finite and > 0, got {aspect}"
            )));
        }
        self.viewport_aspect = aspect;
        Ok(())
    }

    fn node(&self, id: NodeId) -> DialogResult<&SceneNode> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| DialogError::out_of_range("node", id.0, self.nodes.len()))
    }

    fn node_mut(&mut self, id: NodeId) -> DialogResult<&mut SceneNode> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| DialogError::out_of_range("node", id.0, len))
    }

    pub fn name(&self, id: NodeId) -> DialogResult<&str> {
        Ok(&self.node(id)?.name)
    }

    pub fn role(&self, id: NodeId) -> DialogResult<NodeRole> {
        Ok(self.node(id)?.role)
    }

    pub fn children(&self, id: NodeId) -> DialogResult<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    pub fn is_visible(&self, id: NodeId) -> DialogResult<bool> {
        Ok(self.node(id)?.visible)
    }

    pub fn text(&self, id: NodeId) -> DialogResult<&TextDisplay> {
        let node = self.node(id)?;
        node.text
            .as_ref()
            .ok_or_else(|| DialogError::structure(format!("node '{}' has no text", node.name)))
    }

    pub fn pixels_per_unit_multiplier(&self, id: NodeId) -> DialogResult<f64> {
        Ok(self.node(id)?.pixels_per_unit_multiplier)
    }

    fn is_ancestor(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.nodes.get(id.0).and_then(|n| n.parent) {
                Some(p) => id = p,
                None => return false,
            }
        }
    }

    fn push_subtree(&mut self, template: &VisualTemplate, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode::new(
            template.name.clone(),
            template.role,
            template.size,
            Some(parent),
        ));
        self.nodes[parent.0].children.push(id);
        for child in &template.children {
            self.push_subtree(child, id);
        }
        id
    }

    fn collect_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &child in &self.nodes[id.0].children {
            self.collect_subtree(child, out);
        }
    }

    /// Snapshot the subtree rooted at `id`.
    pub fn snapshot(&self, id: NodeId) -> DialogResult<NodeSnapshot> {
        let node = self.node(id)?;
        let children = node
            .children
            .iter()
            .map(|&c| self.snapshot(c))
            .collect::<DialogResult<Vec<_>>>()?;
        Ok(NodeSnapshot {
            name: node.name.clone(),
            role: node.role,
            visible: node.visible,
            rect: node.rect,
            text: node.text.clone(),
            pixels_per_unit_multiplier: node.pixels_per_unit_multiplier,
            children,
        })
    }
}

impl RenderRoot for SceneTree {
    type Rect = RectTransform;

    fn instantiate(&mut self, template: &VisualTemplate) -> DialogResult<VisualHandle> {
        template.validate()?;

        let root = self.push_subtree(template, self.root());
        let mut ids = Vec::new();
        self.collect_subtree(root, &mut ids);

        // Template validation guarantees the required roles are present.
        let first = |role: NodeRole| ids.iter().copied().find(|id| self.nodes[id.0].role == role);
        let (Some(text), Some(padding_marker), Some(margin_marker)) = (
            first(NodeRole::Text),
            first(NodeRole::PaddingMarker),
            first(NodeRole::MarginMarker),
        ) else {
            return Err(DialogError::structure(format!(
                "template '{}' lost its marker roles",
                template.name
            )));
        };
        let roundness_markers = ids
            .iter()
            .copied()
            .filter(|id| self.nodes[id.0].role == NodeRole::RoundnessMarker)
            .collect::<SmallVec<_>>();

        Ok(VisualHandle {
            root,
            text,
            padding_marker,
            margin_marker,
            roundness_markers,
        })
    }

    fn parent(&self, node: NodeId) -> DialogResult<Option<NodeId>> {
        Ok(self.node(node)?.parent)
    }

    fn set_parent(&mut self, child: NodeId, parent: NodeId) -> DialogResult<()> {
        self.node(child)?;
        self.node(parent)?;
        if child == self.root() {
            return Err(DialogError::structure("the canvas cannot be re-parented"));
        }
        if self.is_ancestor(child, parent) {
            return Err(DialogError::structure(format!(
                "cannot parent '{}' under its own descendant '{}'",
                self.nodes[child.0].name, self.nodes[parent.0].name
            )));
        }
        if self.nodes[child.0].parent == Some(parent) {
            return Ok(());
        }
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    fn rename(&mut self, node: NodeId, name: &str) -> DialogResult<()> {
        let node = self.node_mut(node)?;
        if node.name != name {
            node.name = name.to_string();
        }
        Ok(())
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) -> DialogResult<()> {
        self.node_mut(node)?.visible = visible;
        Ok(())
    }

    fn text_mut(&mut self, node: NodeId) -> DialogResult<&mut TextDisplay> {
        let node = self.node_mut(node)?;
        match node.text.as_mut() {
            Some(text) => Ok(text),
            None => Err(DialogError::structure(format!(
                "node '{}' has no text",
                node.name
            ))),
        }
    }

    fn rect(&self, node: NodeId) -> DialogResult<&RectTransform> {
        Ok(&self.node(node)?.rect)
    }

    fn rect_mut(&mut self, node: NodeId) -> DialogResult<&mut RectTransform> {
        Ok(&mut self.node_mut(node)?.rect)
    }

    fn set_pixels_per_unit_multiplier(&mut self, node: NodeId, value: f64) -> DialogResult<()> {
        self.node_mut(node)?.pixels_per_unit_multiplier = value;
        Ok(())
    }

    fn viewport_aspect(&self) -> f64 {
        self.viewport_aspect
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
