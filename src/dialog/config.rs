use crate::{
    dialog::model::Dialog,
    foundation::error::{DialogError, DialogResult},
    layout::scaler::CanvasScaler,
    scene::{surface::FontRef, template::VisualTemplate},
};

/// Background templates shared by all dialogs, addressed by index.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundSet {
    #[serde(default)]
    pub name_tags: Vec<VisualTemplate>,
    #[serde(default)]
    pub contents: Vec<VisualTemplate>,
}

impl BackgroundSet {
    /// Why the set cannot be used, if it cannot.
    pub fn readiness_problem(&self) -> Option<&'static str> {
        if self.name_tags.is_empty() {
            Some("there is no background assigned for a name tag")
        } else if self.contents.is_empty() {
            Some("there is no background assigned for content")
        } else {
            None
        }
    }
}

/// Everything the host hands the dialog engine at startup.
///
/// Usually loaded from JSON via [`DialogConfig::from_json_str`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DialogConfig {
    #[serde(default)]
    pub canvas: CanvasScaler,
    /// Font used by text blocks that do not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_font: Option<FontRef>,
    #[serde(default)]
    pub apply_padding_to_name_tag: bool,
    #[serde(default)]
    pub apply_margin_to_name_tag: bool,
    #[serde(default)]
    pub backgrounds: BackgroundSet,
    #[serde(default)]
    pub dialogs: Vec<Dialog>,
}

impl DialogConfig {
    pub fn from_json_str(s: &str) -> DialogResult<Self> {
        serde_json::from_str(s).map_err(|e| DialogError::serde(e.to_string()))
    }

    pub fn to_json_string_pretty(&self) -> DialogResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DialogError::serde(e.to_string()))
    }

    /// Strict check of the whole configuration.
    ///
    /// [`crate::DialogManager::new`] tolerates an empty dialog list or background set
    /// (it degrades instead); this method reports them.
    pub fn validate(&self) -> DialogResult<()> {
        self.canvas.validate()?;
        if self.dialogs.is_empty() {
            return Err(DialogError::EmptySequence);
        }
        if let Some(problem) = self.backgrounds.readiness_problem() {
            return Err(DialogError::validation(problem));
        }
        for t in self
            .backgrounds
            .name_tags
            .iter()
            .chain(&self.backgrounds.contents)
        {
            t.validate()?;
        }
        for dialog in &self.dialogs {
            dialog.modification.validate()?;
            let nt = dialog.name_tag.background_index;
            if nt >= self.backgrounds.name_tags.len() {
                return Err(DialogError::out_of_range(
                    "name tag background",
                    nt,
                    self.backgrounds.name_tags.len(),
                ));
            }
            let ct = dialog.content.background_index;
            if ct >= self.backgrounds.contents.len() {
                return Err(DialogError::out_of_range(
                    "content background",
                    ct,
                    self.backgrounds.contents.len(),
                ));
            }
        }
        Ok(())
    }

    /// Fill every missing font with [`DialogConfig::default_font`].
    pub(crate) fn assign_default_font(&mut self) {
        if let Some(font) = &self.default_font {
            for dialog in &mut self.dialogs {
                dialog.assign_default_font(font);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dialog/config.rs"]
mod tests;
