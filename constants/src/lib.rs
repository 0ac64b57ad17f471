//! Shared tuning constants for the galaxy render engine.
//!
//! Default generation parameters, tweak-control ranges, and render/camera
//! settings used by both the engine and its build script.

/// Default galaxy generation parameters and per-field tweak ranges.
pub mod galaxy;

/// Render surface, point sprite and camera settings.
pub mod render_settings;
