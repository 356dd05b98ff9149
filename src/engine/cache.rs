use std::collections::HashMap;

use crate::{
    foundation::error::{DialogError, DialogResult},
    scene::{
        surface::{RenderRoot, TextDisplay, VisualHandle},
        template::VisualTemplate,
    },
};

/// Which background list a cached visual comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum VisualCategory {
    NameTag,
    Content,
}

impl VisualCategory {
    /// Node-name prefix; instances are renamed to `"<prefix>#<index>"`.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::NameTag => "NameTag",
            Self::Content => "Content",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::NameTag => "name tag background",
            Self::Content => "content background",
        }
    }
}

/// A background handle obtained by [`InstanceCache::prepare`] but not yet stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingVisual {
    pub category: VisualCategory,
    pub index: usize,
    pub handle: VisualHandle,
    /// `true` when the handle was instantiated by this call rather than cached.
    pub fresh: bool,
}

/// Background instances keyed by template index, one map per category.
///
/// An instance is created the first time its index is used and reused for the
/// rest of the session; the cache never destroys nodes.
#[derive(Clone, Debug, Default)]
pub struct InstanceCache {
    name_tags: HashMap<usize, VisualHandle>,
    contents: HashMap<usize, VisualHandle>,
}

impl InstanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, category: VisualCategory) -> &HashMap<usize, VisualHandle> {
        match category {
            VisualCategory::NameTag => &self.name_tags,
            VisualCategory::Content => &self.contents,
        }
    }

    fn map_mut(&mut self, category: VisualCategory) -> &mut HashMap<usize, VisualHandle> {
        match category {
            VisualCategory::NameTag => &mut self.name_tags,
            VisualCategory::Content => &mut self.contents,
        }
    }

    pub fn get(&self, category: VisualCategory, index: usize) -> Option<&VisualHandle> {
        self.map(category).get(&index)
    }

    pub fn len(&self, category: VisualCategory) -> usize {
        self.map(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_tags.is_empty() && self.contents.is_empty()
    }

    /// Check that `(category, index)` can be resolved without touching the host.
    ///
    /// Cached entries always pass; otherwise the index must be in range and the
    /// template well-formed.
    pub fn check(
        &self,
        category: VisualCategory,
        index: usize,
        templates: &[VisualTemplate],
    ) -> DialogResult<()> {
        if self.get(category, index).is_some() {
            return Ok(());
        }
        templates
            .get(index)
            .ok_or_else(|| DialogError::out_of_range(category.label(), index, templates.len()))?
            .validate()
    }

    /// Fetch the cached instance for `(category, index)` or instantiate a new one.
    ///
    /// Nothing is stored and no text is written; pass the result to
    /// [`Self::commit`] once every part of the dialog has been prepared.
    pub fn prepare<H: RenderRoot>(
        &self,
        host: &mut H,
        category: VisualCategory,
        index: usize,
        templates: &[VisualTemplate],
    ) -> DialogResult<PendingVisual> {
        if let Some(handle) = self.get(category, index) {
            tracing::debug!(?category, index, "reusing cached background");
            return Ok(PendingVisual {
                category,
                index,
                handle: handle.clone(),
                fresh: false,
            });
        }
        let template = templates
            .get(index)
            .ok_or_else(|| DialogError::out_of_range(category.label(), index, templates.len()))?;
        let handle = host.instantiate(template)?;
        tracing::debug!(?category, index, root = ?handle.root, "instantiated background");
        Ok(PendingVisual {
            category,
            index,
            handle,
            fresh: true,
        })
    }

    /// Store a prepared instance, rename its node to `"<prefix>#<index>"` and refresh
    /// its text from `display`. Geometry is left alone.
    pub fn commit<H: RenderRoot>(
        &mut self,
        host: &mut H,
        pending: PendingVisual,
        display: &TextDisplay,
    ) -> DialogResult<VisualHandle> {
        let PendingVisual {
            category,
            index,
            handle,
            fresh,
        } = pending;

        host.rename(handle.root, &format!("{}#{index}", category.prefix()))?;
        let text = host.text_mut(handle.text)?;
        text.text.clone_from(&display.text);
        text.overflow = display.overflow;
        text.color = display.color;
        text.font.clone_from(&display.font);

        if fresh {
            self.map_mut(category).insert(index, handle.clone());
        }
        Ok(handle)
    }

    /// [`Self::prepare`] followed by [`Self::commit`].
    pub fn resolve<H: RenderRoot>(
        &mut self,
        host: &mut H,
        category: VisualCategory,
        index: usize,
        templates: &[VisualTemplate],
        display: &TextDisplay,
    ) -> DialogResult<VisualHandle> {
        let pending = self.prepare(host, category, index, templates)?;
        self.commit(host, pending, display)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/cache.rs"]
mod tests;
