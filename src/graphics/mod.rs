use bevy::prelude::*;
use bevy::window::WindowResized;

mod particle_material;
mod particle_mesh;

pub use particle_material::ParticleMaterial;
pub use particle_mesh::build_particle_mesh;

pub struct GraphicsPlugin;

impl Plugin for GraphicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<ParticleMaterial>::default())
            .add_systems(Update, log_window_resize);
    }
}

/// Camera projections follow the window on their own, this only reports it.
fn log_window_resize(mut resize_events: EventReader<WindowResized>) {
    for event in resize_events.read() {
        debug!("Viewport resized to {}x{}", event.width, event.height);
    }
}
