//! Tab width and position computation.
//!
//! Collection order plus pinned flags are the authoritative state; widths
//! and left offsets are derived here and applied back to tabs by the
//! strip. Target widths depend on how many tabs must share the strip;
//! left offsets are prefix sums over the widths the tabs currently have,
//! so a mid-strip close can shift its neighbours left without forcing a
//! width recompute.

use skiff_config::Config;

/// Per-tab input to the width pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSpec {
    pub pinned: bool,
}

/// Left offsets derived for the current order, indexed by order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StripLayout {
    pub tab_positions: Vec<f32>,
}

/// Compute target widths for `tabs` in a strip `strip_width` wide.
///
/// Pinned tabs take the fixed pinned width. Unpinned tabs share what is
/// left after the new-tab button and the pinned total, clamped to the
/// stable tab width so a near-empty strip does not produce oversized tabs.
pub fn compute_widths(tabs: &[TabSpec], strip_width: f32, config: &Config) -> Vec<f32> {
    let pinned_count = tabs.iter().filter(|t| t.pinned).count();
    let unpinned_count = tabs.len() - pinned_count;

    let pinned_total = pinned_count as f32 * config.tab_pinned_width;
    let available = (strip_width - config.new_tab_button_width - pinned_total).max(0.0);
    let unpinned_width = if unpinned_count == 0 {
        0.0
    } else {
        (available / unpinned_count as f32).min(config.tab_normal_width)
    };

    tabs.iter()
        .map(|t| {
            if t.pinned {
                config.tab_pinned_width
            } else {
                unpinned_width
            }
        })
        .collect()
}

/// Compute left offsets as prefix sums over `widths`.
pub fn compute_positions(widths: &[f32]) -> StripLayout {
    let mut tab_positions = Vec::with_capacity(widths.len());
    let mut left = 0.0;
    for width in widths {
        tab_positions.push(left);
        left += width;
    }
    StripLayout { tab_positions }
}
