//! Render-facing material definitions for the point cloud.

/// Point sprite material, blending descriptor and shader bindings.
pub mod points_material;
