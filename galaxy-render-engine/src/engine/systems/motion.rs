use bevy::prelude::*;

use crate::engine::mesh::point_quad_mesh::GalaxyPointCloud;
use constants::render_settings::GALAXY_ROTATION_SPEED;

/// Slow spin about +Y.
/// Driven by elapsed time rather than accumulated deltas so the pose is a
/// pure function of the clock and survives regeneration swaps.
pub fn rotate_galaxy(time: Res<Time>, mut query: Query<&mut Transform, With<GalaxyPointCloud>>) {
    for mut transform in &mut query {
        transform.rotation = Quat::from_rotation_y(time.elapsed_secs() * GALAXY_ROTATION_SPEED);
    }
}
