use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};

use crate::engine::galaxy::generator::PointBuffer;

/// Marker for the live galaxy point cloud entity.
#[derive(Component)]
pub struct GalaxyPointCloud;

/// Corner offsets for the two triangles of one sprite, counter-clockwise.
const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Create the point sprite mesh for GPU-side quad expansion.
/// Generates 6 vertices per point (2 triangles forming a camera-aligned
/// quad); the point centre and colour are duplicated across the quad and the
/// corner offset rides in UV 0 for the vertex shader to displace.
pub fn create_point_quad_mesh(buffer: &PointBuffer) -> Mesh {
    let vertex_count = buffer.len() * 6;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut colours: Vec<[f32; 4]> = Vec::with_capacity(vertex_count);
    let mut corners: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    for (centre, colour) in buffer.positions.iter().zip(&buffer.colours) {
        for corner in QUAD_CORNERS {
            positions.push(*centre);
            colours.push([colour[0], colour[1], colour[2], 1.0]);
            corners.push(corner);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh
}

#[cfg(test)]
mod tests {
    use bevy::render::mesh::VertexAttributeValues;

    use super::*;

    fn two_point_buffer() -> PointBuffer {
        PointBuffer {
            positions: vec![[1.0, 2.0, 3.0], [-1.0, 0.0, 4.0]],
            colours: vec![[1.0, 0.5, 0.0], [0.0, 0.5, 1.0]],
        }
    }

    #[test]
    fn expands_six_vertices_per_point() {
        let mesh = create_point_quad_mesh(&two_point_buffer());
        assert_eq!(mesh.count_vertices(), 12);
    }

    #[test]
    fn duplicates_centre_and_colour_across_the_quad() {
        let mesh = create_point_quad_mesh(&two_point_buffer());

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("position attribute missing");
        };
        assert!(positions[..6].iter().all(|p| *p == [1.0, 2.0, 3.0]));
        assert!(positions[6..].iter().all(|p| *p == [-1.0, 0.0, 4.0]));

        let Some(VertexAttributeValues::Float32x4(colours)) =
            mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("colour attribute missing");
        };
        assert!(colours[..6].iter().all(|c| *c == [1.0, 0.5, 0.0, 1.0]));
        assert!(colours[6..].iter().all(|c| *c == [0.0, 0.5, 1.0, 1.0]));
    }

    #[test]
    fn corner_offsets_repeat_per_point() {
        let mesh = create_point_quad_mesh(&two_point_buffer());
        let Some(VertexAttributeValues::Float32x2(corners)) =
            mesh.attribute(Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("corner attribute missing");
        };
        assert_eq!(&corners[..6], &QUAD_CORNERS);
        assert_eq!(&corners[6..], &QUAD_CORNERS);
    }

    #[test]
    fn empty_buffer_yields_empty_mesh() {
        let mesh = create_point_quad_mesh(&PointBuffer::default());
        assert_eq!(mesh.count_vertices(), 0);
    }
}
