use crate::prelude::*;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use std::ops::RangeInclusive;

pub struct ConfigEguiPlugin;

impl Plugin for ConfigEguiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParameterDraft>()
            .add_systems(Startup, configure_visuals_system)
            .add_systems(Update, ui_system);
    }
}

fn configure_visuals_system(mut contexts: EguiContexts) {
    contexts.ctx_mut().set_visuals(egui::Visuals {
        window_corner_radius: 0.0.into(),
        ..Default::default()
    });
}

/// Parameters as shown in the panel. Edits are held back until the pointer is
/// released and no value is being typed, so each edit regenerates once.
#[derive(Resource)]
struct ParameterDraft {
    params: GalaxyParameters,
    pending: bool,
}

impl FromWorld for ParameterDraft {
    fn from_world(world: &mut World) -> Self {
        Self {
            params: world.resource::<GalaxyConfig>().params.clone(),
            pending: false,
        }
    }
}

impl ParameterDraft {
    fn take_commit(&mut self, input_busy: bool) -> Option<GalaxyParameters> {
        if self.pending && !input_busy {
            self.pending = false;
            Some(self.params.clone())
        } else {
            None
        }
    }
}

fn slider<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    value: &mut N,
    range: RangeInclusive<N>,
    step: N,
    text: &str,
) -> bool {
    ui.add(
        egui::Slider::new(value, range)
            .step_by(step.to_f64())
            .update_while_editing(false)
            .text(text),
    )
    .changed()
}

fn parameter_ui(params: &mut GalaxyParameters, ui: &mut egui::Ui) -> bool {
    let (min, max, step) = (
        GalaxyParameters::MIN,
        GalaxyParameters::MAX,
        GalaxyParameters::STEP,
    );
    let mut changed = false;

    changed |= slider(ui, &mut params.count, min.count..=max.count, step.count, "count");
    changed |= slider(
        ui,
        &mut params.particle_size,
        min.particle_size..=max.particle_size,
        step.particle_size,
        "particleSize",
    );
    changed |= slider(
        ui,
        &mut params.galaxy_radius,
        min.galaxy_radius..=max.galaxy_radius,
        step.galaxy_radius,
        "galaxyRadius",
    );
    changed |= slider(
        ui,
        &mut params.galaxy_branches,
        min.galaxy_branches..=max.galaxy_branches,
        step.galaxy_branches,
        "galaxyBranches",
    );
    changed |= slider(ui, &mut params.spin, min.spin..=max.spin, step.spin, "spin");
    changed |= slider(
        ui,
        &mut params.randomness,
        min.randomness..=max.randomness,
        step.randomness,
        "randomness",
    );
    changed |= slider(
        ui,
        &mut params.randomness_power,
        min.randomness_power..=max.randomness_power,
        step.randomness_power,
        "randomnessPower",
    );

    ui.horizontal(|ui| {
        changed |= egui::color_picker::color_edit_button_rgb(ui, &mut params.inside_color)
            .changed();
        ui.label("insideColor");
    });
    ui.horizontal(|ui| {
        changed |= egui::color_picker::color_edit_button_rgb(ui, &mut params.outside_color)
            .changed();
        ui.label("outsideColor");
    });

    changed
}

fn ui_system(
    mut contexts: EguiContexts,
    mut draft: ResMut<ParameterDraft>,
    mut galaxy_config: ResMut<GalaxyConfig>,
    installed: Res<InstalledGalaxy>,
) {
    let ctx = contexts.ctx_mut();

    egui::SidePanel::left("side_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Galaxy");
            if parameter_ui(&mut draft.params, ui) {
                draft.pending = true;
            }
            ui.separator();
            ui.label(format!("Particles: {}", installed.count));
        });

    let input_busy = ctx.is_using_pointer() || ctx.wants_keyboard_input();
    if let Some(params) = draft.take_commit(input_busy) {
        galaxy_config.commit(params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ParameterDraft {
        ParameterDraft {
            params: GalaxyParameters::default(),
            pending: false,
        }
    }

    #[test]
    fn test_nothing_to_commit_without_edits() {
        let mut draft = draft();
        assert!(draft.take_commit(false).is_none());
    }

    #[test]
    fn test_commit_waits_for_pointer_release() {
        let mut draft = draft();
        draft.params.count = 2000;
        draft.pending = true;

        assert!(draft.take_commit(true).is_none());
        draft.params.count = 2500;
        assert!(draft.take_commit(true).is_none());

        let committed = draft.take_commit(false).expect("released pointer commits");
        assert_eq!(committed.count, 2500);
        assert!(draft.take_commit(false).is_none());
    }

    #[test]
    fn test_typed_value_commits_once_after_editing() {
        let mut draft = draft();
        let mut commits = Vec::new();

        // one keystroke per frame while the text field holds keyboard focus
        for partial in [2, 20, 200, 2000, 20000] {
            draft.params.count = partial;
            draft.pending = true;
            commits.extend(draft.take_commit(true));
        }
        // focus lost
        commits.extend(draft.take_commit(false));
        commits.extend(draft.take_commit(false));

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].count, 20000);
    }

    #[test]
    fn test_draft_starts_from_config() {
        let mut world = World::new();
        let mut config = GalaxyConfig::default();
        config.params.galaxy_branches = 7;
        world.insert_resource(config);

        let draft = ParameterDraft::from_world(&mut world);
        assert_eq!(draft.params.galaxy_branches, 7);
        assert!(!draft.pending);
    }
}
