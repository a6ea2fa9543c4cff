//! Per-tab composite transition declarations.
//!
//! A tab's style carries one composite `transition` declaration covering
//! up to three animated properties. Appending and removing named
//! transitions edits that declaration by property, leaving unrelated
//! entries untouched; appending an already-declared property never
//! duplicates it.

use skiff_config::{AnimationConfig, Easing};
use std::fmt;

/// Style property a tab can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProperty {
    /// Horizontal slot position
    Left,
    /// Tab body width
    Width,
    /// Background emphasis fade
    BackgroundColor,
}

impl TransitionProperty {
    /// CSS property name this transition animates
    pub fn css_name(&self) -> &'static str {
        match self {
            TransitionProperty::Left => "left",
            TransitionProperty::Width => "width",
            TransitionProperty::BackgroundColor => "background-color",
        }
    }
}

/// One named entry in a composite transition declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: TransitionProperty,
    /// Seconds
    pub duration: f32,
    /// None renders with the default curve
    pub easing: Option<Easing>,
}

impl Transition {
    /// Declaration entry for `property` with timings from `animation`.
    ///
    /// Positioning properties share a duration and easing; the background
    /// fade has its own duration and the default curve.
    pub fn for_property(property: TransitionProperty, animation: &AnimationConfig) -> Self {
        match property {
            TransitionProperty::Left | TransitionProperty::Width => Self {
                property,
                duration: animation.positioning_duration,
                easing: Some(animation.positioning_easing),
            },
            TransitionProperty::BackgroundColor => Self {
                property,
                duration: animation.background_duration,
                easing: None,
            },
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}s", self.property.css_name(), self.duration)?;
        if let Some(easing) = self.easing {
            write!(f, " {}", easing.css())?;
        }
        Ok(())
    }
}

/// The composite transition declaration attached to one tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionSet {
    entries: Vec<Transition>,
}

impl TransitionSet {
    /// Empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `transition`, keeping an existing declaration for the same
    /// property untouched.
    pub fn append(&mut self, transition: Transition) {
        if !self.contains(transition.property) {
            self.entries.push(transition);
        }
    }

    /// Remove the declaration for `property`, leaving others in place.
    pub fn remove(&mut self, property: TransitionProperty) {
        self.entries.retain(|t| t.property != property);
    }

    /// Whether `property` is currently declared.
    pub fn contains(&self, property: TransitionProperty) -> bool {
        self.entries.iter().any(|t| t.property == property)
    }

    /// Number of declared transitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the composite CSS-style declaration.
    pub fn declaration(&self) -> String {
        self.entries
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
