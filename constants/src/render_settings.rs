/// Upper bound on the surface pixel-density scale. Resize handling clamps
/// the window scale factor here to bound per-frame fragment cost.
pub const MAX_PIXEL_DENSITY: f32 = 2.0;

/// Seed for the engine's deterministic scene generation
pub const GENERATION_SEED: u64 = 42;

/// Galaxy rotation speed in radians per second
pub const GALAXY_ROTATION_SPEED: f32 = 0.05;

/// Initial camera position
pub const CAMERA_START_POSITION: [f32; 3] = [3.0, 3.0, 3.0];

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Near clip plane distance
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip plane distance
pub const CAMERA_FAR: f32 = 100.0;

/// Exponential damping rate for camera smoothing, per second
pub const CAMERA_DAMPING: f32 = 12.0;

/// Minimum orbit distance from the focus point
pub const CAMERA_MIN_DISTANCE: f32 = 0.5;

/// Maximum orbit distance from the focus point
pub const CAMERA_MAX_DISTANCE: f32 = 50.0;
