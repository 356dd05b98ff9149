use crate::foundation::{
    core::Size,
    error::{DialogError, DialogResult},
};

/// Role a node plays inside a background visual.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum NodeRole {
    /// Plain container / background image.
    #[default]
    Frame,
    /// The text element that displays the dialog line.
    Text,
    /// Stretched child inset by the modification's padding.
    PaddingMarker,
    /// Stretched child inset by the modification's margin.
    MarginMarker,
    /// Sliced image whose per-unit multiplier controls corner roundness.
    RoundnessMarker,
}

/// Authoring-time description of a background visual subtree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualTemplate {
    pub name: String,
    #[serde(default)]
    pub role: NodeRole,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub children: Vec<VisualTemplate>,
}

impl VisualTemplate {
    pub fn new(name: impl Into<String>, role: NodeRole, size: Size) -> Self {
        Self {
            name: name.into(),
            role,
            size,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: VisualTemplate) -> Self {
        self.children.push(child);
        self
    }

    /// A background of `size` with the usual marker layout:
    /// margin marker > roundness image > padding marker > text.
    pub fn background(name: impl Into<String>, size: Size) -> Self {
        let text = Self::new("Text", NodeRole::Text, Size::ZERO);
        let padding = Self::new("Padding", NodeRole::PaddingMarker, Size::ZERO).child(text);
        let image = Self::new("Image", NodeRole::RoundnessMarker, Size::ZERO).child(padding);
        let margin = Self::new("Margin", NodeRole::MarginMarker, Size::ZERO).child(image);
        Self::new(name, NodeRole::Frame, size).child(margin)
    }

    /// Visit nodes depth-first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a VisualTemplate)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    fn count_role(&self, role: NodeRole) -> usize {
        let mut n = 0usize;
        self.walk(&mut |t| {
            if t.role == role {
                n += 1;
            }
        });
        n
    }

    /// Check the role layout the engine relies on.
    ///
    /// Exactly one text element, at least one padding and one margin marker.
    pub fn validate(&self) -> DialogResult<()> {
        let texts = self.count_role(NodeRole::Text);
        if texts != 1 {
            return Err(DialogError::structure(format!(
                "template '{}' must contain exactly one text element, found {texts}",
                self.name
            )));
        }
        for role in [NodeRole::PaddingMarker, NodeRole::MarginMarker] {
            if self.count_role(role) == 0 {
                return Err(DialogError::structure(format!(
                    "template '{}' has no {role:?}",
                    self.name
                )));
            }
        }
        let mut bad_size = false;
        self.walk(&mut |t| {
            if !(t.size.width.is_finite() && t.size.height.is_finite())
                || t.size.width < 0.0
                || t.size.height < 0.0
            {
                bad_size = true;
            }
        });
        if bad_size {
            return Err(DialogError::validation(format!(
                "template '{}' has a non-finite or negative size",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/template.rs"]
mod tests;
