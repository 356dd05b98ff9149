use crate::{
    dialog::modification::{InterpolationCurve, InterpolationMode, Modification},
    foundation::error::DialogResult,
    layout::anchor::Anchor,
};

/// Fluent builder for [`Modification`].
///
/// Starts from the defaults: bottom-left anchor, no padding, a margin of 10,
/// a zero per-unit multiplier and instant interpolation.
#[derive(Clone, Debug, Default)]
pub struct ModificationBuilder {
    modification: Modification,
}

impl ModificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.modification.anchor = anchor;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.modification.padding = padding;
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.modification.margin = margin;
        self
    }

    pub fn pixel_per_unit_multiplier(mut self, multiplier: f64) -> Self {
        self.modification.pixel_per_unit_multiplier = multiplier;
        self
    }

    pub fn interpolation_mode(mut self, mode: InterpolationMode) -> Self {
        self.modification.interpolation_mode = mode;
        self
    }

    pub fn interpolation_curve(mut self, curve: InterpolationCurve) -> Self {
        self.modification.interpolation_curve = curve;
        self
    }

    pub fn build(self) -> DialogResult<Modification> {
        self.modification.validate()?;
        Ok(self.modification)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dialog/builder.rs"]
mod tests;
