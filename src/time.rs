//! Frame driving for the simulation loop.
//!
//! Bevy owns frame scheduling; this plugin turns each `Update` into exactly one
//! [`SimulationLoop::on_frame`] call and stops scheduling once the loop stops.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::render::{sync_body_transforms, BodyVisual};
use crate::scene::SceneConfig;
use crate::simulation::{BodyRegistry, LoopState, SimulationLoop};
use crate::types::SimulationSet;

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Step,
                    SimulationSet::Overlay,
                )
                    .chain(),
            )
            .add_systems(PreStartup, init_simulation)
            .add_systems(
                Update,
                advance_simulation
                    .in_set(SimulationSet::Step)
                    .run_if(simulation_running),
            )
            .add_systems(Last, stop_on_window_close);
    }
}

/// Insert a [`SimulationLoop`] built from [`SceneConfig`] unless one exists.
///
/// An invalid configuration is logged and replaced by an empty registry so the
/// app still starts.
fn init_simulation(
    mut commands: Commands,
    config: Res<SceneConfig>,
    existing: Option<Res<SimulationLoop>>,
) {
    if existing.is_some() {
        return;
    }

    let registry = match config.build_registry() {
        Ok(registry) => registry,
        Err(err) => {
            error!("Invalid scene configuration: {}", err);
            BodyRegistry::default()
        }
    };
    commands.insert_resource(SimulationLoop::new(registry));
}

/// Run condition: the loop exists and has not been stopped.
pub fn simulation_running(sim: Option<Res<SimulationLoop>>) -> bool {
    sim.is_some_and(|sim| sim.state() != LoopState::Stopped)
}

/// One simulation frame: step every body, then sync transforms.
fn advance_simulation(
    mut sim: ResMut<SimulationLoop>,
    mut visuals: Query<(&BodyVisual, &mut Transform)>,
) {
    sim.on_frame(&mut |registry: &BodyRegistry| sync_body_transforms(registry, &mut visuals));
}

/// Stop the loop when the primary window goes away.
fn stop_on_window_close(
    mut removed: RemovedComponents<PrimaryWindow>,
    sim: Option<Res<SimulationLoop>>,
) {
    if removed.read().next().is_none() {
        return;
    }
    if let Some(sim) = sim {
        sim.stop_handle().stop();
    }
}
