//! Interactive tools layered on the engine.

/// Keyboard-driven parameter tweak panel with commit-on-release regeneration.
pub mod tweak_panel;
