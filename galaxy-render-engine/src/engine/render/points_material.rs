use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

use constants::galaxy::DEFAULT_SIZE;

/// Blending behaviour for the point sprites. Tagged variants instead of
/// runtime string dispatch; each maps onto one renderer alpha mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointsBlending {
    /// Brightness accumulates where sprites overlap; depth writes stay off.
    #[default]
    Additive,
    /// Standard alpha blending; depth writes stay off.
    Alpha,
    /// Solid sprites with depth writes.
    Opaque,
}

impl PointsBlending {
    pub fn alpha_mode(self) -> AlphaMode {
        match self {
            Self::Additive => AlphaMode::Add,
            Self::Alpha => AlphaMode::Blend,
            Self::Opaque => AlphaMode::Opaque,
        }
    }
}

/// Descriptor for the points material: blending variant plus the sprite
/// parameters the renderer consumes unmodified. Vertex colours always come
/// from the mesh.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PointsMaterialDescriptor {
    pub blending: PointsBlending,
    /// Sprite size in world units.
    pub size: f32,
    /// Scale sprites with camera distance.
    pub size_attenuation: bool,
}

impl Default for PointsMaterialDescriptor {
    fn default() -> Self {
        Self {
            blending: PointsBlending::default(),
            size: DEFAULT_SIZE,
            size_attenuation: true,
        }
    }
}

impl PointsMaterialDescriptor {
    /// Build an independent material instance. Callers swap the returned
    /// instance in and release the previous handle; a shared instance is
    /// never mutated in place.
    pub fn build(&self) -> GalaxyPointsMaterial {
        GalaxyPointsMaterial {
            params: Vec4::new(
                self.size,
                if self.size_attenuation { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ),
            alpha_mode: self.blending.alpha_mode(),
        }
    }
}

/// Point sprite shader material.
/// The uniform packs [sprite size, size attenuation flag, 0, 0].
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GalaxyPointsMaterial {
    #[uniform(0)]
    pub params: Vec4,
    pub alpha_mode: AlphaMode,
}

impl Material for GalaxyPointsMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/galaxy_points.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/galaxy_points.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }
}
