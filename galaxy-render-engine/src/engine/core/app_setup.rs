use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::{create_window_config, handle_window_resize};
use crate::engine::galaxy::parameters::GalaxyParameters;
use crate::engine::loading::preset_loader::{
    PresetLoader, apply_loaded_preset, start_preset_loading,
};
use crate::engine::render::points_material::{GalaxyPointsMaterial, PointsMaterialDescriptor};
use crate::engine::scene::galaxy_scene::{
    GalaxyScene, RegenerateGalaxy, material_mode_system, regenerate_galaxy,
};
use crate::engine::systems::fps_tracking::fps_text_update_system;
use crate::engine::systems::motion::rotate_galaxy;
use crate::tools::tweak_panel::{
    PanelText, TweakPanel, sync_pending_parameters, tweak_panel_input, update_panel_text,
};

use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION,
};

/// Create the application with the point sprite material pipeline and the
/// galaxy generation systems.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<GalaxyPointsMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<GalaxyParameters>::new(&["galaxy.json"]));

    app.init_state::<AppState>()
        .add_event::<RegenerateGalaxy>()
        .init_resource::<GalaxyScene>()
        .init_resource::<PresetLoader>()
        .init_resource::<OrbitCamera>()
        .init_resource::<TweakPanel>()
        .insert_resource(GalaxyParameters::default())
        .insert_resource(PointsMaterialDescriptor::default())
        .add_systems(Startup, (setup, start_preset_loading))
        .add_systems(
            Update,
            (apply_loaded_preset, transition_to_running)
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (
                regenerate_galaxy,
                material_mode_system,
                orbit_camera_controller,
                handle_window_resize,
                sync_pending_parameters,
                tweak_panel_input,
                update_panel_text,
                fps_text_update_system,
                rotate_galaxy,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Spawn the camera and UI overlay
fn setup(mut commands: Commands) {
    println!("=== GALAXY POINT CLOUD RENDERER ===");

    spawn_camera(&mut commands);
    spawn_ui(&mut commands);
}

fn spawn_camera(commands: &mut Commands) {
    let start = Vec3::from_array(CAMERA_START_POSITION);
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(start).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_ui(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                PanelText,
            ));
        });
}
