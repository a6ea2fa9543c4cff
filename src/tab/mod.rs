//! Tab management for the browser shell's tab strip
//!
//! This module provides the core tab infrastructure including:
//! - `Tab`: Represents a single open page with its visual state
//! - `TabStrip`: The ordered collection and its lifecycle state machine
//! - `TabId`: Unique identifier for each tab
//! - The drag session and pairwise reorder protocol

mod drag;
mod strip;

pub use drag::DragSession;
pub use strip::{ClosedTab, IdleTimer, SurfaceFactory, TabStrip, TabStripAction};

use crate::page::ContentSurface;
use crate::transitions::{Transition, TransitionProperty, TransitionSet};
use skiff_config::AnimationConfig;

/// Unique identifier for a tab.
pub type TabId = u64;

/// Z-order of an unselected tab body.
pub const TAB_Z_UNSELECTED: u8 = 3;
/// Z-order of the selected tab body, above its neighbours.
pub const TAB_Z_SELECTED: u8 = 4;

/// Mouse button pressed on a tab body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Background emphasis of the tab body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabBackground {
    /// Blends into the strip
    #[default]
    Default,
    /// Raised, opaque body of the selected tab
    Emphasis,
}

/// Edge border visibility for one tab.
///
/// Thin markers separate unselected neighbours; full-height borders frame
/// the selected tab. The strip owns the cross-tab rules (a selected tab
/// suppresses its predecessor's trailing marker so emphasised borders
/// never double up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBorders {
    /// Thin leading-edge marker
    pub left_small: bool,
    /// Thin trailing-edge marker
    pub right_small: bool,
    /// Full-height leading border
    pub left_full: bool,
    /// Full-height trailing border
    pub right_full: bool,
}

impl Default for TabBorders {
    fn default() -> Self {
        // a fresh tab shows only its thin trailing marker
        Self {
            left_small: false,
            right_small: true,
            left_full: false,
            right_full: false,
        }
    }
}

/// One open tab.
///
/// `width` and `left` are derived visual extents, recomputed from the
/// strip's order; the authoritative state is the order itself plus the
/// pinned flags.
pub struct Tab {
    /// Unique identifier for this tab
    pub id: TabId,
    /// Display title
    pub title: String,
    /// Pinned tabs keep a fixed width and opt out of drag reordering
    pub pinned: bool,
    /// Whether this tab is the strip's selected tab
    pub selected: bool,
    /// True while a position animation is in flight; a locked tab is not
    /// a valid drop target
    pub locked: bool,
    /// Current visual width
    pub width: f32,
    /// Current visual left offset
    pub left: f32,
    /// Suppresses the left transition until the construction settling tick
    pub block_left_animation: bool,
    /// Background emphasis
    pub background: TabBackground,
    /// Stacking order
    pub z_index: u8,
    /// Close affordance opacity (0 hidden, 1 opaque)
    pub close_opacity: f32,
    /// Whether the tab body accepts pointer input
    pub pointer_events: bool,
    /// Edge border visibility
    pub borders: TabBorders,
    /// Composite transition declaration
    pub transitions: TransitionSet,
    /// The content surface this tab owns (1:1 for the tab's lifetime)
    pub page: Box<dyn ContentSurface>,
}

impl Tab {
    pub(crate) fn new(id: TabId, page: Box<dyn ContentSurface>) -> Self {
        Self {
            id,
            title: "New tab".to_string(),
            pinned: false,
            selected: false,
            locked: false,
            width: 0.0,
            left: 0.0,
            block_left_animation: true,
            background: TabBackground::default(),
            z_index: TAB_Z_UNSELECTED,
            close_opacity: 0.0,
            pointer_events: true,
            borders: TabBorders::default(),
            transitions: TransitionSet::new(),
            page,
        }
    }

    /// Sets width of the tab body.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets left offset of the tab body.
    pub fn set_left(&mut self, left: f32) {
        self.left = left;
    }

    /// Declare a transition for `property` with timings from `animation`.
    pub fn append_transition(&mut self, property: TransitionProperty, animation: &AnimationConfig) {
        self.transitions
            .append(Transition::for_property(property, animation));
    }

    /// Remove the declared transition for `property`.
    pub fn remove_transition(&mut self, property: TransitionProperty) {
        self.transitions.remove(property);
    }

    /// Per-tab half of selection: emphasis, stacking, close affordance,
    /// page visibility, and this tab's own border flags. The strip applies
    /// the order-dependent rules on top.
    pub(crate) fn apply_selected_style(&mut self) {
        self.background = TabBackground::Emphasis;
        self.z_index = TAB_Z_SELECTED;
        self.close_opacity = 1.0;
        self.page.show();
        self.borders.right_small = false;
        self.borders.right_full = true;
        self.selected = true;
    }

    /// Inverse of `apply_selected_style`.
    pub(crate) fn apply_deselected_style(&mut self) {
        self.background = TabBackground::Default;
        self.z_index = TAB_Z_UNSELECTED;
        self.close_opacity = 0.0;
        self.page.hide();
        self.borders.right_small = true;
        self.borders.left_full = false;
        self.borders.right_full = false;
        self.selected = false;
    }
}
