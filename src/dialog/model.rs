use crate::{
    dialog::modification::Modification,
    foundation::core::Rgba8,
    scene::surface::{FontRef, OverflowMode, TextDisplay},
};

/// One authored dialog line: who speaks, what they say, and where the box goes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dialog {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub name_tag: NameTagSpec,
    #[serde(default)]
    pub content: ContentSpec,
    #[serde(default)]
    pub modification: Modification,
}

impl Default for Dialog {
    fn default() -> Self {
        Self {
            enabled: true,
            name_tag: NameTagSpec::default(),
            content: ContentSpec::default(),
            modification: Modification::default(),
        }
    }
}

impl Dialog {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut dialog = Self::default();
        dialog.name_tag.text = name.into();
        dialog.content.text = content.into();
        dialog
    }

    pub fn with_modification(mut self, modification: Modification) -> Self {
        self.modification = modification;
        self
    }

    pub(crate) fn assign_default_font(&mut self, font: &FontRef) {
        if self.name_tag.font.is_none() {
            self.name_tag.font = Some(font.clone());
        }
        if self.content.font.is_none() {
            self.content.font = Some(font.clone());
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

/// Speaker label drawn on its own background, nested against the content box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NameTagSpec {
    /// Hidden on the host when `false`.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub overflow: OverflowMode,
    /// Index into [`crate::BackgroundSet::name_tags`].
    #[serde(default)]
    pub background_index: usize,
    #[serde(default)]
    pub font_color: Rgba8,
    /// `None` resolves to the configured default font at load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontRef>,
}

impl Default for NameTagSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            text: String::new(),
            overflow: OverflowMode::Truncate,
            background_index: 0,
            font_color: Rgba8::BLACK,
            font: None,
        }
    }
}

impl NameTagSpec {
    pub fn display(&self) -> TextDisplay {
        TextDisplay {
            text: self.text.clone(),
            overflow: self.overflow,
            color: self.font_color,
            font: self.font.clone(),
        }
    }
}

/// Body text of a dialog.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentSpec {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub overflow: OverflowMode,
    /// Index into [`crate::BackgroundSet::contents`].
    #[serde(default)]
    pub background_index: usize,
    #[serde(default)]
    pub font_color: Rgba8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontRef>,
}

impl Default for ContentSpec {
    fn default() -> Self {
        Self {
            text: String::new(),
            overflow: OverflowMode::Truncate,
            background_index: 0,
            font_color: Rgba8::BLACK,
            font: None,
        }
    }
}

impl ContentSpec {
    pub fn display(&self) -> TextDisplay {
        TextDisplay {
            text: self.text.clone(),
            overflow: self.overflow,
            color: self.font_color,
            font: self.font.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dialog/model.rs"]
mod tests;
