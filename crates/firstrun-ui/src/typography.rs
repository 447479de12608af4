//! Dynamic type: point sizes follow the platform content-size scale.

use serde::{Deserialize, Serialize};

pub const MIN_TEXT_SCALE: f32 = 0.8;
pub const MAX_TEXT_SCALE: f32 = 2.0;
/// Nothing is rendered smaller than this, whatever the scale.
pub const MIN_LEGIBLE_PT: f32 = 11.0;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Typography {
    pub title: f32,
    pub body: f32,
    pub button: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: 28.0,
            body: 17.0,
            button: 17.0,
        }
    }
}

impl Typography {
    /// Sizes for a content-size `scale`; `None` for non-finite or non-positive scales.
    pub fn scaled(&self, scale: f32) -> Option<Typography> {
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        let s = scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
        let pt = |base: f32| (base * s).max(MIN_LEGIBLE_PT);
        Some(Typography {
            title: pt(self.title),
            body: pt(self.body),
            button: pt(self.button),
        })
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        for (name, v) in [("title", self.title), ("body", self.body), ("button", self.button)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(format!("typography.{name} must be positive, got {v}"));
            }
        }
        Ok(())
    }
}
