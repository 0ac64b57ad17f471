//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and the
//! loading-to-running state transition for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Application state machine and transition systems.
pub mod app_state;

/// Platform-specific window configuration and resize handling.
pub mod window_config;
