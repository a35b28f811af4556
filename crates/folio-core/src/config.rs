use serde::{Deserialize, Serialize};

use crate::anchor::{portfolio_sections, SectionAnchor, SectionRegistry};
use crate::consts::{
    BOTTOM_MARGIN, DEFAULT_SMOOTH_SCROLL_SPEED, HYSTERESIS_THRESHOLD, MIN_SMOOTH_SCROLL_SPEED,
    SCROLLED_THRESHOLD, SECTION_MARGIN, TOP_REVEAL_OFFSET,
};
use crate::error::{FolioError, Result};

/// Thresholds driving the navbar state machine and the section resolver.
/// All distances are in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub hysteresis_threshold: f32,
    pub scrolled_threshold: f32,
    pub top_reveal_offset: f32,
    pub section_margin: f32,
    pub bottom_margin: f32,
    /// Fraction of the remaining distance covered per smooth-scroll tick
    /// (`MIN_SMOOTH_SCROLL_SPEED..=1.0`).
    pub smooth_scroll_speed: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hysteresis_threshold: HYSTERESIS_THRESHOLD,
            scrolled_threshold: SCROLLED_THRESHOLD,
            top_reveal_offset: TOP_REVEAL_OFFSET,
            section_margin: SECTION_MARGIN,
            bottom_margin: BOTTOM_MARGIN,
            smooth_scroll_speed: DEFAULT_SMOOTH_SCROLL_SPEED,
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> Result<()> {
        let distances = [
            ("hysteresis_threshold", self.hysteresis_threshold),
            ("scrolled_threshold", self.scrolled_threshold),
            ("top_reveal_offset", self.top_reveal_offset),
            ("section_margin", self.section_margin),
            ("bottom_margin", self.bottom_margin),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !(MIN_SMOOTH_SCROLL_SPEED..=1.0).contains(&self.smooth_scroll_speed) {
            return Err(FolioError::InvalidConfig(format!(
                "smooth_scroll_speed must be in [{MIN_SMOOTH_SCROLL_SPEED}, 1], got {}",
                self.smooth_scroll_speed
            )));
        }
        Ok(())
    }
}

/// Top-level configuration: tracker thresholds plus the section list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub nav: NavConfig,
    pub sections: Vec<SectionAnchor>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            sections: portfolio_sections(),
        }
    }
}

impl FolioConfig {
    pub fn validate(&self) -> Result<()> {
        self.nav.validate()?;
        SectionRegistry::new(self.sections.clone()).map(|_| ())
    }

    /// Build the validated section registry described by this config.
    pub fn registry(&self) -> Result<SectionRegistry> {
        SectionRegistry::new(self.sections.clone())
    }
}
