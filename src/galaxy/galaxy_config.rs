use crate::prelude::*;
use bevy::prelude::*;

/// Parameters of the galaxy currently on screen.
///
/// `generation` is bumped on every committed edit, the particle spawner
/// regenerates whenever it sees a generation it has not installed yet.
#[derive(Resource, Clone, PartialEq, Default)]
pub struct GalaxyConfig {
    pub generation: i32,
    pub params: GalaxyParameters,
}

impl GalaxyConfig {
    /// Replaces the parameters and requests a regeneration, even if nothing changed.
    pub fn commit(&mut self, params: GalaxyParameters) {
        self.params = params;
        self.generation += 1;
    }
}

pub struct GalaxyConfigPlugin;

impl Plugin for GalaxyConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GalaxyConfig::default())
            .add_systems(Update, log_committed_parameters);
    }
}

fn log_committed_parameters(galaxy_config: Res<GalaxyConfig>) {
    if galaxy_config.is_changed() {
        debug!(
            "Galaxy parameters committed (generation {}): {:?}",
            galaxy_config.generation, galaxy_config.params
        );
    }
}
