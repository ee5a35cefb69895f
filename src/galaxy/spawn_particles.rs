use crate::graphics::{ParticleMaterial, build_particle_mesh};
use crate::prelude::*;
use bevy::platform::time::Instant;
use bevy::prelude::*;
use bevy::render::view::{NoFrustumCulling, VisibilitySystems};
use bevy::transform::TransformSystem;
use galaxy_generator::generate_parallel;

pub struct SpawnParticlesPlugin;

impl Plugin for SpawnParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(InstalledGalaxy::default()).add_systems(
            PostUpdate,
            regenerate_galaxy
                .before(TransformSystem::TransformPropagate)
                .before(VisibilitySystems::VisibilityPropagate),
        );
    }
}

#[derive(Component)]
pub struct GalaxyParticles;

/// Everything that has to be released when a cloud is replaced.
struct ParticleCloudHandle {
    entity: Entity,
    mesh: Handle<Mesh>,
    material: Handle<ParticleMaterial>,
}

impl ParticleCloudHandle {
    fn release(
        self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<ParticleMaterial>,
    ) {
        commands.entity(self.entity).despawn();
        meshes.remove(&self.mesh);
        materials.remove(&self.material);
    }
}

/// The single live point cloud.
#[derive(Resource)]
pub struct InstalledGalaxy {
    generation: i32,
    pub count: usize,
    live: Option<ParticleCloudHandle>,
}

impl Default for InstalledGalaxy {
    fn default() -> Self {
        Self {
            generation: -1,
            count: 0,
            live: None,
        }
    }
}

/// Rebuilds the particles when the config generation moves.
/// The new cloud is spawned before the old one is released.
fn regenerate_galaxy(
    mut commands: Commands,
    galaxy_config: Res<GalaxyConfig>,
    mut installed: ResMut<InstalledGalaxy>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ParticleMaterial>>,
) {
    if installed.generation == galaxy_config.generation {
        return;
    }
    installed.generation = galaxy_config.generation;

    let params = &galaxy_config.params;
    let started = Instant::now();
    let cloud = match generate_parallel(params) {
        Ok(cloud) => cloud,
        Err(err) => {
            warn!("Galaxy regeneration rejected, keeping the previous cloud: {err}");
            return;
        }
    };
    info!(
        "Generated galaxy: {} particles on {} branches in {:.2} ms",
        cloud.len(),
        params.galaxy_branches,
        started.elapsed().as_secs_f64() * 1000.0
    );

    let mesh = meshes.add(build_particle_mesh(&cloud));
    let material = materials.add(ParticleMaterial::new(params.particle_size));
    let entity = commands
        .spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::IDENTITY,
            Visibility::Inherited,
            GalaxyParticles,
            // billboard corners are expanded in the shader, the mesh aabb is too small
            NoFrustumCulling,
        ))
        .id();

    installed.count = cloud.len();
    let previous = installed.live.replace(ParticleCloudHandle {
        entity,
        mesh,
        material,
    });
    if let Some(previous) = previous {
        previous.release(&mut commands, &mut meshes, &mut materials);
    }
}
