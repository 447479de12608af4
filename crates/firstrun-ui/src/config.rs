//! Carousel configuration, deserializable from JSON (or any serde format).

use std::time::Duration;

use firstrun_core::{AnimationSpec, Color, Easing};
use serde::{Deserialize, Serialize};

use crate::CarouselError;
use crate::typography::Typography;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Background at page 0.
    pub start_color: Color,
    /// Background once the first page has been fully scrolled away.
    pub end_color: Color,
    pub text_color: Color,
    pub fade_ms: u64,
    pub skip_label: String,
    pub done_label: String,
    pub typography: Typography,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            start_color: Color::from_rgb(0x90, 0x59, 0xFF),
            end_color: Color::from_rgb(0x02, 0x50, 0xBB),
            text_color: Color::WHITE,
            fade_ms: 250,
            skip_label: "Skip".to_string(),
            done_label: "Done".to_string(),
            typography: Typography::default(),
        }
    }
}

impl CarouselConfig {
    pub fn fade_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(Duration::from_millis(self.fade_ms), Easing::EaseInOut)
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.fade_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "fade_ms must be greater than zero".into(),
            ));
        }
        if self.skip_label.trim().is_empty() || self.done_label.trim().is_empty() {
            return Err(CarouselError::InvalidConfig(
                "skip_label and done_label must not be empty".into(),
            ));
        }
        self.typography
            .validate()
            .map_err(CarouselError::InvalidConfig)
    }
}
