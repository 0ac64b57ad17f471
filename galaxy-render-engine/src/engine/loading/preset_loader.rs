use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::galaxy::parameters::GalaxyParameters;
use crate::engine::scene::galaxy_scene::RegenerateGalaxy;
use constants::galaxy::DEFAULT_PRESET_PATH;

/// Tracks the preset asset until it resolves.
#[derive(Resource, Default)]
pub struct PresetLoader {
    handle: Option<Handle<GalaxyParameters>>,
    applied: bool,
}

// Start the loading process
pub fn start_preset_loading(mut loader: ResMut<PresetLoader>, asset_server: Res<AssetServer>) {
    println!("Loading galaxy preset from: {DEFAULT_PRESET_PATH}");
    loader.handle = Some(asset_server.load(DEFAULT_PRESET_PATH));
}

/// Apply the preset once loaded and request the first generation.
///
/// A missing or malformed preset falls back to the built-in defaults rather
/// than leaving the scene empty; either path is validated before the first
/// generation is requested.
pub fn apply_loaded_preset(
    mut loader: ResMut<PresetLoader>,
    mut params: ResMut<GalaxyParameters>,
    mut regenerate: EventWriter<RegenerateGalaxy>,
    asset_server: Res<AssetServer>,
    presets: Res<Assets<GalaxyParameters>>,
) {
    if loader.applied {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    let resolved = if let Some(preset) = presets.get(&handle) {
        println!("✓ Galaxy preset loaded");
        Some(preset.clone())
    } else if matches!(
        asset_server.get_load_state(&handle),
        Some(LoadState::Failed(_))
    ) {
        warn!("Galaxy preset failed to load, using built-in defaults");
        Some(GalaxyParameters::default())
    } else {
        None
    };

    let Some(preset) = resolved else {
        return;
    };

    match preset.validate() {
        Ok(()) => *params = preset,
        Err(err) => {
            warn!("Galaxy preset rejected ({err}), using built-in defaults");
            *params = GalaxyParameters::default();
        }
    }

    loader.applied = true;
    regenerate.write(RegenerateGalaxy);
}
