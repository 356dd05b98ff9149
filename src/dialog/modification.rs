use crate::{
    foundation::error::{DialogError, DialogResult},
    layout::anchor::Anchor,
};

/// How a modification is meant to be blended in by a host animator.
///
/// The engine itself always places instantly; the mode is carried as data.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum InterpolationMode {
    #[default]
    Instant,
    Linear,
    EaseIn,
    EaseOut,
    EaseInAndOut,
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveKey {
    pub time: f64,
    pub value: f64,
}

/// Keyframed curve used when `InterpolationMode::Custom` is selected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolationCurve {
    pub keys: Vec<CurveKey>, // sorted by time
}

impl InterpolationCurve {
    /// Flat curve holding `value` from `time_start` to `time_end`.
    pub fn constant(time_start: f64, time_end: f64, value: f64) -> Self {
        Self {
            keys: vec![
                CurveKey {
                    time: time_start,
                    value,
                },
                CurveKey {
                    time: time_end,
                    value,
                },
            ],
        }
    }

    pub fn validate(&self) -> DialogResult<()> {
        if self.keys.is_empty() {
            return Err(DialogError::validation(
                "interpolation curve must have at least one key",
            ));
        }
        if self
            .keys
            .iter()
            .any(|k| !k.time.is_finite() || !k.value.is_finite())
        {
            return Err(DialogError::validation(
                "interpolation curve keys must be finite",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(DialogError::validation(
                "interpolation curve keys must be sorted by time",
            ));
        }
        Ok(())
    }
}

impl Default for InterpolationCurve {
    fn default() -> Self {
        Self::constant(0.0, 1.0, 1.0)
    }
}

/// Placement of a dialog: anchor, insets and corner roundness.
///
/// Built with [`crate::ModificationBuilder`]; read-only afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Modification {
    pub(crate) anchor: Anchor,
    pub(crate) padding: f64,
    pub(crate) margin: f64,
    pub(crate) pixel_per_unit_multiplier: f64,
    pub(crate) interpolation_mode: InterpolationMode,
    pub(crate) interpolation_curve: InterpolationCurve,
}

impl Default for Modification {
    fn default() -> Self {
        Self {
            anchor: Anchor::BottomLeft,
            padding: 0.0,
            margin: 10.0,
            pixel_per_unit_multiplier: 0.0,
            interpolation_mode: InterpolationMode::Instant,
            interpolation_curve: InterpolationCurve::default(),
        }
    }
}

impl Modification {
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn pixel_per_unit_multiplier(&self) -> f64 {
        self.pixel_per_unit_multiplier
    }

    pub fn interpolation_mode(&self) -> InterpolationMode {
        self.interpolation_mode
    }

    pub fn interpolation_curve(&self) -> &InterpolationCurve {
        &self.interpolation_curve
    }

    pub fn validate(&self) -> DialogResult<()> {
        for (name, v) in [
            ("padding", self.padding),
            ("margin", self.margin),
            ("pixel_per_unit_multiplier", self.pixel_per_unit_multiplier),
        ] {
            if !v.is_finite() {
                return Err(DialogError::validation(format!(
                    "modification {name} must be finite"
                )));
            }
        }
        self.interpolation_curve.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dialog/modification.rs"]
mod tests;
