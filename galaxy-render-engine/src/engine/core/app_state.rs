use bevy::prelude::*;

use crate::engine::scene::galaxy_scene::GalaxyScene;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Marker for the FPS readout text node.
#[derive(Component)]
pub struct FpsText;

// Transition to Running once the first galaxy is on screen
pub fn transition_to_running(
    scene: Res<GalaxyScene>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if scene.entity.is_some() {
        println!("→ Galaxy ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
