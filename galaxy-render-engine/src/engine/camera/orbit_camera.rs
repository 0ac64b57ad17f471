use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::render_settings::{
    CAMERA_DAMPING, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_START_POSITION,
};

/// Orbit camera state around a fixed focus point.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Recover yaw/pitch from the configured start pose looking at the
        // origin, so the damped controller starts converged.
        let start = Vec3::from_array(CAMERA_START_POSITION);
        let distance = start.length();
        let direction = start / distance;
        Self {
            focus_point: Vec3::ZERO,
            distance,
            pitch: -direction.y.asin(),
            yaw: direction.x.atan2(direction.z),
        }
    }
}

/// Orbit controller: left-drag orbits, wheel dollies, pose eases toward the
/// target each frame.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse motion with left click (orbit)
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        orbit.yaw -= mouse_delta.x * yaw_sens;
        orbit.pitch -= mouse_delta.y * pitch_sens;
        orbit.pitch = orbit.pitch.clamp(-1.55, 1.55);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Dolly toward/away from the focus point, faster when further out
    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = (orbit.distance * 0.2).clamp(0.1, 5.0);
        orbit.distance = (orbit.distance - scroll_accum * dolly_speed)
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    // Damped approach to the target pose
    let target_rot = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
    let target_pos = orbit.focus_point + target_rot * (Vec3::Z * orbit.distance);

    let lerp_speed = (CAMERA_DAMPING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_matches_start_position() {
        let orbit = OrbitCamera::default();
        let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
        let position = orbit.focus_point + rotation * (Vec3::Z * orbit.distance);
        let start = Vec3::from_array(CAMERA_START_POSITION);
        assert!((position - start).length() < 1e-4);
    }

    #[test]
    fn default_pose_looks_at_the_focus_point() {
        let orbit = OrbitCamera::default();
        let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
        let position = orbit.focus_point + rotation * (Vec3::Z * orbit.distance);
        // The camera looks along its local -Z.
        let forward = rotation * Vec3::NEG_Z;
        let to_focus = (orbit.focus_point - position).normalize();
        assert!((forward - to_focus).length() < 1e-4);
    }
}
