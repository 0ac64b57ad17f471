/// Default number of generated points
pub const DEFAULT_COUNT: u32 = 100_000;

/// Default rendered point size in world units
pub const DEFAULT_SIZE: f32 = 0.01;

/// Default number of spiral arms
pub const DEFAULT_BRANCH_COUNT: u32 = 3;

/// Default maximum distance from the galaxy centre
pub const DEFAULT_RADIUS: f32 = 5.0;

/// Default additional rotation in radians per unit radius
pub const DEFAULT_SPIN: f32 = 1.1;

/// Default positional jitter magnitude, scaled by point radius
pub const DEFAULT_RANDOMNESS: f32 = 0.18;

/// Default exponent sharpening the jitter distribution toward zero
pub const DEFAULT_RANDOMNESS_POWER: f32 = 2.0;

/// Default colour at the galaxy centre (linear RGB)
pub const DEFAULT_INSIDE_COLOUR: [f32; 3] = [1.0, 0.376, 0.188];

/// Default colour at the outer radius (linear RGB)
pub const DEFAULT_OUTSIDE_COLOUR: [f32; 3] = [0.106, 0.224, 0.518];

/// Inclusive value range and adjustment step for one tweakable field.
pub struct TweakRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

pub const COUNT_RANGE: TweakRange = TweakRange {
    min: 1_000.0,
    max: 1_000_000.0,
    step: 100.0,
};

pub const SIZE_RANGE: TweakRange = TweakRange {
    min: 0.01,
    max: 1.0,
    step: 0.01,
};

pub const BRANCH_COUNT_RANGE: TweakRange = TweakRange {
    min: 1.0,
    max: 20.0,
    step: 1.0,
};

pub const RADIUS_RANGE: TweakRange = TweakRange {
    min: 0.1,
    max: 20.0,
    step: 0.1,
};

pub const SPIN_RANGE: TweakRange = TweakRange {
    min: -5.0,
    max: 5.0,
    step: 0.01,
};

pub const RANDOMNESS_RANGE: TweakRange = TweakRange {
    min: 0.0,
    max: 1.0,
    step: 0.01,
};

pub const RANDOMNESS_POWER_RANGE: TweakRange = TweakRange {
    min: 1.0,
    max: 10.0,
    step: 0.1,
};

/// Relative path of the default preset inside the engine's asset directory
pub const DEFAULT_PRESET_PATH: &str = "presets/default.galaxy.json";
