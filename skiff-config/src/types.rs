//! Animation timing types shared by the tab strip engine.

use serde::{Deserialize, Serialize};

/// Easing curve for tab strip animations
///
/// Curves map onto the CSS timing functions the style layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity
    Linear,
    /// Browser default curve
    Ease,
    /// Slow start and finish
    EaseInOut,
    /// Fast start with a long settle; the strip's default positioning curve
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::Ease => "Ease",
            Easing::EaseInOut => "Ease In/Out",
            Easing::EaseOutCubic => "Ease Out (cubic)",
        }
    }

    /// All available curves for UI iteration
    pub fn all() -> &'static [Easing] {
        &[
            Easing::Linear,
            Easing::Ease,
            Easing::EaseInOut,
            Easing::EaseOutCubic,
        ]
    }

    /// CSS timing-function this curve renders as
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOutCubic => "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}

/// Timing for tab strip animations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of left/width positioning animations, in seconds
    pub positioning_duration: f32,
    /// Easing curve for positioning animations
    pub positioning_easing: Easing,
    /// Duration of the background-color transition, in seconds
    pub background_duration: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            positioning_duration: 0.3,
            positioning_easing: Easing::default(),
            background_duration: 0.2,
        }
    }
}
