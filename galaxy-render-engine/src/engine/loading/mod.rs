//! Asset loading for galaxy parameter presets.

/// JSON preset polling and application.
pub mod preset_loader;
