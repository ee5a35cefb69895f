use crate::prelude::*;
use bevy::color::ColorToComponents;
use bevy::prelude::*;
use bevy::render::{
    mesh::{Indices, PrimitiveTopology},
    render_asset::RenderAssetUsages,
};

const CORNERS: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];

/// One quad per particle: every corner carries the particle center as its
/// position, the corner offset as uv and the linear particle color.
pub fn build_particle_mesh(cloud: &PointCloud) -> Mesh {
    let vertex_count = cloud.len() * CORNERS.len();
    let mut positions = Vec::with_capacity(vertex_count);
    let mut corners = Vec::with_capacity(vertex_count);
    let mut colors = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(cloud.len() * 6);

    let points = cloud.positions_flat().chunks_exact(3);
    let point_colors = cloud.colors_flat().chunks_exact(3);
    for (i, (p, c)) in points.zip(point_colors).enumerate() {
        let linear = LinearRgba::from(Srgba::rgb(c[0], c[1], c[2])).to_f32_array();
        for corner in CORNERS {
            positions.push([p[0], p[1], p[2]]);
            corners.push(corner);
            colors.push(linear);
        }

        let base = (i * CORNERS.len()) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, corners)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
    .with_inserted_indices(Indices::U32(indices))
}
