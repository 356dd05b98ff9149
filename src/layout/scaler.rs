use crate::foundation::{
    core::{Vec2, is_finite_vec, lerp},
    error::{DialogError, DialogResult},
};

/// Canvas scaling parameters in "match width or height" mode.
///
/// `match_width_or_height` blends between matching the reference width (`0`)
/// and the reference height (`1`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasScaler {
    /// Reference resolution the UI was authored against.
    pub reference_resolution: Vec2,
    /// Blend factor in `[0, 1]`.
    #[serde(default)]
    pub match_width_or_height: f64,
}

impl Default for CanvasScaler {
    fn default() -> Self {
        Self {
            reference_resolution: Vec2::new(800.0, 600.0),
            match_width_or_height: 0.0,
        }
    }
}

impl CanvasScaler {
    pub fn new(reference_resolution: Vec2, match_width_or_height: f64) -> DialogResult<Self> {
        let scaler = Self {
            reference_resolution,
            match_width_or_height,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn validate(&self) -> DialogResult<()> {
        let r = self.reference_resolution;
        if !is_finite_vec(r) || r.x <= 0.0 || r.y <= 0.0 {
            return Err(DialogError::validation(
                "canvas reference resolution must be finite and > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.match_width_or_height) {
            return Err(DialogError::validation(
                "canvas match_width_or_height must be in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Effective canvas width for a viewport of aspect ratio `aspect` (width / height).
    ///
    /// At `match_width_or_height == 1` the height is pinned to the reference and the
    /// width follows the aspect.
    pub fn height_matching_scaler(&self, aspect: f64) -> f64 {
        lerp(
            self.reference_resolution.x,
            self.reference_resolution.y * aspect,
            self.match_width_or_height,
        )
    }

    /// Effective canvas height for a viewport of aspect ratio `aspect` (width / height).
    ///
    /// At `match_width_or_height == 0` the width is pinned to the reference and the
    /// height follows the aspect. Top-anchored content sits at this height.
    pub fn width_matching_scaler(&self, aspect: f64) -> f64 {
        lerp(
            self.reference_resolution.x / aspect,
            self.reference_resolution.y,
            self.match_width_or_height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scaler.rs"]
mod tests;
