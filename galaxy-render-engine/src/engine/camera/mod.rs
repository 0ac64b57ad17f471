//! Camera control for scene navigation.
//!
//! Damped orbit controls around the galaxy centre with mouse drag and
//! scroll-wheel dolly.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
