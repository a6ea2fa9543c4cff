//! Configuration system for the Skiff browser shell.
//!
//! This crate provides configuration loading, saving, and default values
//! for the tab strip engine. It includes:
//!
//! - Tab strip dimension settings (tab widths, strip height)
//! - Animation timing settings (positioning duration and easing)
//! - Behavior settings (idle auto-new-tab delay, closed-tab memory)

pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{AnimationConfig, Easing};
