//! Tab strip lifecycle and ordering engine for the Skiff browser shell.
//!
//! The strip owns the ordered tab collection and everything needed to keep
//! it visually consistent while the user creates, selects, closes, pins,
//! and drag-reorders tabs:
//!
//! - [`tab`]: the `Tab` entity, the `TabStrip` collection and its state
//!   machine, and the drag/reorder protocol.
//! - [`geometry`]: width and left-offset computation from order + pinned
//!   flags (order is the single source of truth for layout).
//! - [`transitions`]: per-tab composite transition declarations.
//! - [`scheduler`]: deferred tasks (settle, unlock, drop-after-collapse)
//!   drained by `TabStrip::tick`.
//! - [`page`]: the content-surface seam each tab owns one of.
//! - [`snapshot`]: a serializable per-frame projection for the style layer.
//!
//! All mutation is single-threaded and event-driven: the embedding shell
//! forwards input and a per-frame `tick`, and the strip applies each
//! operation atomically before returning.

/// Application version (root crate version, for use by embedders).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod geometry;
pub mod page;
pub mod scheduler;
pub mod snapshot;
pub mod tab;
pub mod transitions;

pub mod config {
    //! Configuration re-exports from the `skiff-config` sub-crate.
    pub use skiff_config::{AnimationConfig, Config, ConfigError, Easing};
}

pub use tab::{PointerButton, Tab, TabId, TabStrip, TabStripAction};
