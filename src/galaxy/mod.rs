mod galaxy_config;
mod spawn_particles;

pub use galaxy_config::{GalaxyConfig, GalaxyConfigPlugin};
pub use spawn_particles::{InstalledGalaxy, SpawnParticlesPlugin};
