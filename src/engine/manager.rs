use crate::{
    dialog::{config::DialogConfig, model::Dialog, modification::Modification},
    engine::{
        cache::InstanceCache,
        modifier::{ActiveDialog, LayoutSettings},
        presenter::Presenter,
        sequencer::DialogSequencer,
    },
    foundation::error::{DialogError, DialogResult},
    scene::surface::RenderRoot,
};

/// Owns one dialog session on a host surface.
///
/// Dialogs are shown either in order ([`DialogManager::dispatch_next`]) or by index
/// ([`DialogManager::dispatch_at`]). A modification planned with
/// [`DialogManager::plan_modification`] overrides the layout of exactly one
/// subsequent dispatch.
///
/// A manager built from a configuration without name tag or content backgrounds
/// is degraded: it keeps the host but every dispatch fails with
/// [`DialogError::Degraded`].
#[derive(Debug)]
pub struct DialogManager<H: RenderRoot> {
    presenter: Presenter<H>,
    sequencer: DialogSequencer,
    degraded: Option<String>,
}

impl<H: RenderRoot> DialogManager<H> {
    pub fn new(host: H, mut config: DialogConfig) -> Self {
        let degraded = match config.canvas.validate() {
            Err(e) => Some(e.to_string()),
            Ok(()) => config.backgrounds.readiness_problem().map(str::to_owned),
        };
        match &degraded {
            Some(reason) => tracing::warn!(%reason, "dialog engine is degraded"),
            None => config.assign_default_font(),
        }
        if config.dialogs.is_empty() {
            tracing::warn!("no dialog has been set");
        }

        let settings = LayoutSettings {
            canvas: config.canvas,
            apply_padding_to_name_tag: config.apply_padding_to_name_tag,
            apply_margin_to_name_tag: config.apply_margin_to_name_tag,
        };
        Self {
            presenter: Presenter::new(host, settings, config.backgrounds),
            sequencer: DialogSequencer::new(config.dialogs),
            degraded,
        }
    }

    /// Like [`DialogManager::new`], but rejects anything [`DialogConfig::validate`] rejects.
    pub fn try_new(host: H, config: DialogConfig) -> DialogResult<Self> {
        config.validate()?;
        Ok(Self::new(host, config))
    }

    fn ensure_ready(&self) -> DialogResult<()> {
        match &self.degraded {
            Some(reason) => Err(DialogError::degraded(reason.clone())),
            None => Ok(()),
        }
    }

    /// Show the dialog under the cursor and advance it. Returns the new cursor.
    ///
    /// The cursor only moves when the dialog was displayed.
    #[tracing::instrument(skip(self))]
    pub fn dispatch_next(&mut self) -> DialogResult<usize> {
        self.ensure_ready()?;
        let dialog = self
            .sequencer
            .peek_next()
            .inspect_err(|e| tracing::warn!(error = %e, "dispatch rejected"))?;
        self.presenter.prepare_and_display(dialog)?;
        Ok(self.sequencer.advance())
    }

    /// Show the dialog at `index` without touching the cursor.
    #[tracing::instrument(skip(self))]
    pub fn dispatch_at(&mut self, index: i64) -> DialogResult<()> {
        self.ensure_ready()?;
        let dialog = self
            .sequencer
            .get(index)
            .inspect_err(|e| tracing::warn!(error = %e, "dispatch rejected"))?;
        self.presenter.prepare_and_display(dialog)
    }

    /// Show a dialog that is not part of the configured list.
    pub fn dispatch_dialog(&mut self, dialog: &Dialog) -> DialogResult<()> {
        self.ensure_ready()?;
        self.presenter.prepare_and_display(dialog)
    }

    /// Use `modification` instead of the dialog's own for the next dispatch only.
    ///
    /// Replaces any modification planned earlier.
    pub fn plan_modification(&mut self, modification: Modification) {
        if self.presenter.planned.replace(modification).is_some() {
            tracing::debug!("replaced pending planned modification");
        }
    }

    pub fn planned_modification(&self) -> Option<&Modification> {
        self.presenter.planned.as_ref()
    }

    /// Apply the planned modification to the active dialog now, if one is pending.
    pub fn consume_planned_if_present(&mut self) -> DialogResult<bool> {
        self.presenter.consume_planned_if_present()
    }

    /// Re-lay the active dialog with `modification`.
    pub fn apply_modification(&mut self, modification: &Modification) -> DialogResult<()> {
        self.presenter.apply_modification(modification)
    }

    /// Rewind the auto-dispatch cursor. Cached backgrounds stay alive.
    pub fn reset(&mut self) {
        self.sequencer.reset();
    }

    pub fn next_index(&self) -> usize {
        self.sequencer.next_index()
    }

    pub fn dialogs(&self) -> &[Dialog] {
        self.sequencer.dialogs()
    }

    pub fn active_dialog(&self) -> Option<&ActiveDialog> {
        self.presenter.active.as_ref()
    }

    pub fn cache(&self) -> &InstanceCache {
        &self.presenter.cache
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.presenter.settings
    }

    pub fn host(&self) -> &H {
        &self.presenter.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.presenter.host
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    pub fn into_host(self) -> H {
        self.presenter.host
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/manager.rs"]
mod tests;
