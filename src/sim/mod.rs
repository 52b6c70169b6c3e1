//! Monte Carlo run: estimator state, Bevy resources, events and the per-tick systems.

pub mod estimator;
pub mod events;
pub mod resources;
pub mod state;
pub mod systems;

use crate::math::probability::{SeedChangedEvent, seed::plugin::seed_changed_event_handler};
use bevy::prelude::*;
use estimator::MonteCarloEstimator;
use events::{ExportRequestedEvent, RegionSubmittedEvent, ResetRequestedEvent};
use resources::{
    EstimateHistory, PlotSnapshot, PointBuffer, RegionPreview, SampleLog, SimulationParameters,
};
use state::SimulationState;
use systems::*;

/// Systeme der Simulation; die Oberfläche läuft davor.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Registriert Zustand, Ressourcen, Events und Systeme des Schätzers.
///
/// Requires the `SeedPlugin` for the random source.
pub struct MonteCarloPlugin;

impl Plugin for MonteCarloPlugin {
    fn build(&self, app: &mut App) {
        // SimulationParameters zuerst: die Puffer lesen ihre Kapazität daraus
        app.init_resource::<SimulationParameters>()
            .init_resource::<MonteCarloEstimator>()
            .init_resource::<RegionPreview>()
            .init_resource::<PointBuffer>()
            .init_resource::<SampleLog>()
            .init_resource::<EstimateHistory>()
            .init_resource::<PlotSnapshot>()
            .init_state::<SimulationState>()
            .add_event::<RegionSubmittedEvent>()
            .add_event::<ResetRequestedEvent>()
            .add_event::<ExportRequestedEvent>()
            .add_event::<SeedChangedEvent>()
            // Neuer Seed erst nach dem Reset des Laufs: der nächste Lauf beginnt am Stromanfang
            .configure_sets(Update, SimulationSet.before(seed_changed_event_handler))
            .add_systems(
                OnEnter(SimulationState::Running),
                || info!("Simulation is Running."),
            )
            .add_systems(
                OnEnter(SimulationState::Paused),
                |estimator: Res<MonteCarloEstimator>| {
                    info!(
                        "Simulation is Paused after {} samples.",
                        estimator.total_count()
                    );
                },
            )
            .add_systems(
                Update,
                (
                    // Sampling vor den Handlern: ein Reset im selben Frame hinterlässt keine Punkte
                    sample_batch_system
                        .run_if(in_state(SimulationState::Running).and_then(region_confirmed)),
                    handle_reset_requests_system,
                    handle_seed_changes_system,
                    handle_region_submissions_system,
                    refresh_plot_snapshot_system,
                    handle_export_requests_system,
                )
                    .chain()
                    .in_set(SimulationSet),
            );
    }
}
