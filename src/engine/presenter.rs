use crate::{
    dialog::{config::BackgroundSet, model::Dialog, modification::Modification},
    engine::{
        cache::{InstanceCache, VisualCategory},
        modifier::{ActiveDialog, LayoutSettings, apply_modification},
    },
    foundation::error::{DialogError, DialogResult},
    scene::surface::RenderRoot,
};

/// Puts dialogs on the host surface: resolves backgrounds through the cache, nests
/// the name tag under the content box and lays both out.
#[derive(Debug)]
pub(crate) struct Presenter<H: RenderRoot> {
    pub(crate) host: H,
    pub(crate) settings: LayoutSettings,
    pub(crate) backgrounds: BackgroundSet,
    pub(crate) cache: InstanceCache,
    pub(crate) active: Option<ActiveDialog>,
    pub(crate) planned: Option<Modification>,
}

impl<H: RenderRoot> Presenter<H> {
    pub(crate) fn new(host: H, settings: LayoutSettings, backgrounds: BackgroundSet) -> Self {
        Self {
            host,
            settings,
            backgrounds,
            cache: InstanceCache::new(),
            active: None,
            planned: None,
        }
    }

    /// Show `dialog`, then lay it out with the planned modification if one is
    /// pending, else with the dialog's own.
    ///
    /// Both backgrounds are checked and resolved and the layout is applied before
    /// anything is committed. On error the cache, the active dialog, the planned
    /// modification and every text display are left as they were, and the name
    /// tag goes back to its previous parent.
    pub(crate) fn prepare_and_display(&mut self, dialog: &Dialog) -> DialogResult<()> {
        let (nt, ct) = (
            dialog.name_tag.background_index,
            dialog.content.background_index,
        );
        self.cache
            .check(VisualCategory::NameTag, nt, &self.backgrounds.name_tags)?;
        self.cache
            .check(VisualCategory::Content, ct, &self.backgrounds.contents)?;

        let name_tag = self.cache.prepare(
            &mut self.host,
            VisualCategory::NameTag,
            nt,
            &self.backgrounds.name_tags,
        )?;
        let content = self.cache.prepare(
            &mut self.host,
            VisualCategory::Content,
            ct,
            &self.backgrounds.contents,
        )?;
        let candidate = ActiveDialog {
            content: content.handle.clone(),
            name_tag: name_tag.handle.clone(),
        };

        let previous_parent = self.host.parent(candidate.name_tag.root)?;
        self.host
            .set_parent(candidate.name_tag.root, candidate.content.root)?;

        let planned = self.planned.take();
        let layout = planned.as_ref().unwrap_or(&dialog.modification);
        if let Err(e) = apply_modification(&mut self.host, &candidate, layout, &self.settings) {
            tracing::warn!(error = %e, "layout failed, dialog not shown");
            self.planned = planned;
            if let Some(parent) = previous_parent {
                self.host.set_parent(candidate.name_tag.root, parent)?;
            }
            return Err(e);
        }
        if planned.is_some() {
            tracing::debug!("consumed planned modification");
        }

        self.cache
            .commit(&mut self.host, name_tag, &dialog.name_tag.display())?;
        self.cache
            .commit(&mut self.host, content, &dialog.content.display())?;
        self.host
            .set_visible(candidate.name_tag.root, dialog.name_tag.enabled)?;
        self.host.set_visible(candidate.content.root, true)?;
        self.active = Some(candidate);
        Ok(())
    }

    pub(crate) fn apply_modification(&mut self, modification: &Modification) -> DialogResult<()> {
        let active = self
            .active
            .as_ref()
            .ok_or_else(|| DialogError::structure("no dialog is active"))?;
        apply_modification(&mut self.host, active, modification, &self.settings)
    }

    /// Apply and clear the planned modification. `Ok(false)` when nothing was planned.
    ///
    /// On failure the plan is kept for the next attempt.
    pub(crate) fn consume_planned_if_present(&mut self) -> DialogResult<bool> {
        let Some(planned) = self.planned.take() else {
            return Ok(false);
        };
        if let Err(e) = self.apply_modification(&planned) {
            self.planned = Some(planned);
            return Err(e);
        }
        tracing::debug!("consumed planned modification");
        Ok(true)
    }
}
