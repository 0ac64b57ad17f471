use std::f32::consts::TAU;

use rand::Rng;

use super::parameters::{GalaxyError, GalaxyParameters};

/// Uniform random draws in `[0, 1)`. Injected so generation is deterministic
/// under a seeded or scripted source; any `rand` generator qualifies through
/// the blanket impl.
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn next_f32(&mut self) -> f32 {
        self.random()
    }
}

/// Flat position/colour buffers for one generated galaxy.
///
/// Invariant: `positions.len() == colours.len() == count`, three floats per
/// entry, no aliasing between the two buffers. The buffers are plain data;
/// render-side resources built from them are owned and released by the scene.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointBuffer {
    pub positions: Vec<[f32; 3]>,
    pub colours: Vec<[f32; 3]>,
}

impl PointBuffer {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate a point buffer for the given parameters.
///
/// Purely functional over the random source; exactly four draws are consumed
/// per point, in order: radius, then one jitter draw per axis. Arm assignment
/// is `index % branch_count` and is not random.
pub fn generate<R: RandomSource + ?Sized>(
    params: &GalaxyParameters,
    rng: &mut R,
) -> Result<PointBuffer, GalaxyError> {
    params.validate()?;

    let count = params.count as usize;
    let mut positions = Vec::with_capacity(count);
    let mut colours = Vec::with_capacity(count);

    for index in 0..params.count {
        let radius = rng.next_f32() * params.radius;
        let branch_angle =
            (index % params.branch_count) as f32 / params.branch_count as f32 * TAU;
        let spin_angle = radius * params.spin;

        let jitter_x = axis_jitter(rng.next_f32(), params, radius);
        let jitter_y = axis_jitter(rng.next_f32(), params, radius);
        let jitter_z = axis_jitter(rng.next_f32(), params, radius);

        let arm_angle = branch_angle + spin_angle;
        positions.push([
            arm_angle.sin() * radius + jitter_x,
            jitter_y,
            arm_angle.cos() * radius + jitter_z,
        ]);

        colours.push(lerp_colour(
            params.inside_colour,
            params.outside_colour,
            radius / params.radius,
        ));
    }

    Ok(PointBuffer { positions, colours })
}

/// Produce a fresh buffer, consuming the previous one.
///
/// The previous buffer is dropped exactly once before the new one is
/// returned; safe to call rapidly from control-change handlers. Render-side
/// handles derived from the old buffer are the scene's responsibility.
pub fn regenerate<R: RandomSource + ?Sized>(
    previous: Option<PointBuffer>,
    params: &GalaxyParameters,
    rng: &mut R,
) -> Result<PointBuffer, GalaxyError> {
    drop(previous);
    generate(params, rng)
}

/// Power-biased jitter for one axis.
///
/// A single centred draw supplies both the sign (±1, probability ½ each) and
/// a uniform magnitude in `[0, 1)`, keeping to one draw per axis.
/// The exponent concentrates samples near the ideal arm curve while allowing
/// rare larger excursions. `signum` maps +0.0 to +1, so the sign stays in
/// {+1, -1} everywhere.
fn axis_jitter(draw: f32, params: &GalaxyParameters, radius: f32) -> f32 {
    let centred = 2.0 * draw - 1.0;
    centred.signum() * centred.abs().powf(params.randomness_power) * params.randomness * radius
}

fn lerp_colour(from: [f32; 3], to: [f32; 3], t: f32) -> [f32; 3] {
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}
