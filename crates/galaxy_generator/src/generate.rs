use bevy::math::{Vec3, vec3};
use rayon::prelude::*;
use std::f32::consts::TAU;

use crate::{GalaxyError, GalaxyParameters, PointCloud, RandomSource};

const CHUNK_SIZE: usize = 4096;

/// Angle of the arm that particle `index` belongs to, arms are assigned round-robin.
pub fn branch_angle(index: usize, branches: u32) -> f32 {
    (index % branches as usize) as f32 / branches as f32 * TAU
}

/// Signed scatter for one axis, `|jitter| <= randomness`.
fn jitter<R: RandomSource + ?Sized>(params: &GalaxyParameters, rng: &mut R) -> f32 {
    let magnitude = rng.uniform().powf(params.randomness_power);
    let sign = if rng.uniform() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * params.randomness
}

/// Places one particle, consuming seven draws: radius, then magnitude and
/// sign for x, y and z.
fn place_particle<R: RandomSource + ?Sized>(
    params: &GalaxyParameters,
    index: usize,
    rng: &mut R,
) -> (Vec3, Vec3) {
    let radius = rng.uniform() * params.galaxy_radius;
    let angle = branch_angle(index, params.galaxy_branches) + radius * params.spin;

    let offset = vec3(jitter(params, rng), jitter(params, rng), jitter(params, rng));
    let position = vec3(angle.cos() * radius, 0.0, angle.sin() * radius) + offset;

    let inside = Vec3::from_array(params.inside_color);
    let outside = Vec3::from_array(params.outside_color);
    let color = inside + (outside - inside) * (radius / params.galaxy_radius);

    (position, color)
}

/// Generates a galaxy drawing from `rng`, particles are filled in index order.
///
/// Seeded sources give reproducible clouds.
pub fn generate<R: RandomSource + ?Sized>(
    params: &GalaxyParameters,
    rng: &mut R,
) -> Result<PointCloud, GalaxyError> {
    params.validate()?;

    let mut cloud = PointCloud::with_len(params.count as usize);
    for (index, (position, color)) in cloud
        .positions
        .iter_mut()
        .zip(cloud.colors.iter_mut())
        .enumerate()
    {
        (*position, *color) = place_particle(params, index, rng);
    }
    Ok(cloud)
}

/// Same layout as [`generate`], split across the rayon pool.
///
/// Each chunk draws from its worker's thread-local generator, so repeated calls
/// never produce the same cloud.
pub fn generate_parallel(params: &GalaxyParameters) -> Result<PointCloud, GalaxyError> {
    params.validate()?;

    let mut cloud = PointCloud::with_len(params.count as usize);
    cloud
        .positions
        .par_chunks_mut(CHUNK_SIZE)
        .zip(cloud.colors.par_chunks_mut(CHUNK_SIZE))
        .enumerate()
        .for_each(|(chunk, (positions, colors))| {
            let mut rng = rand::rng();
            let start = chunk * CHUNK_SIZE;
            for (offset, (position, color)) in
                positions.iter_mut().zip(colors.iter_mut()).enumerate()
            {
                (*position, *color) = place_particle(params, start + offset, &mut rng);
            }
        });
    Ok(cloud)
}
