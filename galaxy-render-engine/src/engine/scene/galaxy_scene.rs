use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::engine::galaxy::generator;
use crate::engine::galaxy::parameters::GalaxyParameters;
use crate::engine::mesh::point_quad_mesh::{GalaxyPointCloud, create_point_quad_mesh};
use crate::engine::render::points_material::{
    GalaxyPointsMaterial, PointsBlending, PointsMaterialDescriptor,
};
use constants::render_settings::GENERATION_SEED;

/// Scene context owning the live galaxy entity and its render resources.
///
/// All replacement paths release the previous entity, mesh and material
/// before installing new ones, so rapid regeneration cannot leak buffers.
#[derive(Resource)]
pub struct GalaxyScene {
    pub entity: Option<Entity>,
    pub mesh: Option<Handle<Mesh>>,
    pub material: Option<Handle<GalaxyPointsMaterial>>,
    /// Seed for the next generation pass. Bumped per regeneration so each
    /// tweak produces a fresh distribution while the sequence stays
    /// reproducible from the initial seed.
    pub seed: u64,
}

impl Default for GalaxyScene {
    fn default() -> Self {
        Self {
            entity: None,
            mesh: None,
            material: None,
            seed: GENERATION_SEED,
        }
    }
}

/// Request a full regeneration with the current parameters.
#[derive(Event, Default)]
pub struct RegenerateGalaxy;

/// Rebuild the point cloud when regeneration is requested.
///
/// Generation completes wholesale before the swap; the previous resources
/// are released exactly once on the same path.
pub fn regenerate_galaxy(
    mut events: EventReader<RegenerateGalaxy>,
    mut commands: Commands,
    mut scene: ResMut<GalaxyScene>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GalaxyPointsMaterial>>,
    mut descriptor: ResMut<PointsMaterialDescriptor>,
    params: Res<GalaxyParameters>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let mut rng = ChaCha8Rng::seed_from_u64(scene.seed);
    let buffer = match generator::generate(&params, &mut rng) {
        Ok(buffer) => buffer,
        Err(err) => {
            error!("Galaxy regeneration rejected: {err}");
            return;
        }
    };
    scene.seed = scene.seed.wrapping_add(1);

    release_previous(&mut commands, &mut scene, &mut meshes, &mut materials);

    descriptor.size = params.size;
    let mesh = meshes.add(create_point_quad_mesh(&buffer));
    let material = materials.add(descriptor.build());

    let entity = commands
        .spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::IDENTITY,
            Visibility::Visible,
            // Sprites are displaced in the shader, so culling against the
            // raw vertex bounds would drop visible points.
            NoFrustumCulling,
            GalaxyPointCloud,
        ))
        .id();

    scene.entity = Some(entity);
    scene.mesh = Some(mesh);
    scene.material = Some(material);

    info!("Galaxy point cloud spawned with {} points", buffer.len());
}

/// Release the previous entity and its render assets.
fn release_previous(
    commands: &mut Commands,
    scene: &mut GalaxyScene,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<GalaxyPointsMaterial>,
) {
    if let Some(entity) = scene.entity.take() {
        commands.entity(entity).despawn();
    }
    if let Some(mesh) = scene.mesh.take() {
        meshes.remove(&mesh);
    }
    if let Some(material) = scene.material.take() {
        materials.remove(&material);
    }
}

/// Handle blending mode switching via keyboard.
/// Swaps in an independent material instance and releases the old one on the
/// same path; the shared descriptor is the only state carried across swaps.
pub fn material_mode_system(
    mut commands: Commands,
    mut descriptor: ResMut<PointsMaterialDescriptor>,
    mut materials: ResMut<Assets<GalaxyPointsMaterial>>,
    mut scene: ResMut<GalaxyScene>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let mut mode_changed = false;
    let mut new_blending = descriptor.blending;

    if keyboard.just_pressed(KeyCode::KeyZ) {
        new_blending = PointsBlending::Additive;
        mode_changed = true;
        println!("Points blending: Additive");
    }

    if keyboard.just_pressed(KeyCode::KeyX) {
        new_blending = PointsBlending::Alpha;
        mode_changed = true;
        println!("Points blending: Alpha");
    }

    if keyboard.just_pressed(KeyCode::KeyC) {
        new_blending = PointsBlending::Opaque;
        mode_changed = true;
        println!("Points blending: Opaque");
    }

    if !mode_changed || new_blending == descriptor.blending {
        return;
    }
    descriptor.blending = new_blending;

    let Some(entity) = scene.entity else {
        return;
    };
    let replacement = materials.add(descriptor.build());
    if let Some(previous) = scene.material.take() {
        materials.remove(&previous);
    }
    scene.material = Some(replacement.clone());
    commands.entity(entity).insert(MeshMaterial3d(replacement));
}
