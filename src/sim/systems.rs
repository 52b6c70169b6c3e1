use super::estimator::MonteCarloEstimator;
use super::events::{ExportRequestedEvent, RegionSubmittedEvent, ResetRequestedEvent};
use super::resources::{
    EstimateHistory, EstimatePoint, PlotSnapshot, PointBuffer, RegionPreview, SampleLog,
    SimulationParameters,
};
use super::state::SimulationState;
use crate::math::{
    probability::{SeedChangedEvent, SeedResource},
    region::Region,
};
use crate::ui::visualization::export::{RunSummary, export_run};
use bevy::prelude::*;

/// Run-Condition: nur mit gültiger, bestätigter Region wird gezogen.
pub fn region_confirmed(preview: Res<RegionPreview>) -> bool {
    preview.0.is_some()
}

/// Validiert die eingegebene Region.
///
/// Invalid input clears the three text fields and drops the preview; the
/// estimator keeps its counts. A valid, changed region resets the run.
#[allow(clippy::too_many_arguments)]
pub fn handle_region_submissions_system(
    mut events: EventReader<RegionSubmittedEvent>,
    mut sim_params: ResMut<SimulationParameters>,
    mut estimator: ResMut<MonteCarloEstimator>,
    mut preview: ResMut<RegionPreview>,
    mut points: ResMut<PointBuffer>,
    mut log: ResMut<SampleLog>,
    mut history: ResMut<EstimateHistory>,
    mut snapshot: ResMut<PlotSnapshot>,
    current_state: Res<State<SimulationState>>,
    mut next_state: ResMut<NextState<SimulationState>>,
) {
    for event in events.read() {
        if *current_state.get() == SimulationState::Running {
            warn!("Region cannot change while the simulation is running; pause first.");
            continue;
        }

        match Region::parse(&event.a, &event.b, &event.r) {
            Err(err) => {
                warn!("Rejected region input: {err}");
                sim_params.clear_region_inputs();
                preview.0 = None;
            }
            Ok(region) => {
                if estimator.set_region(region) {
                    info!("Region set to {}; running state reset.", region.formula());
                    points.clear();
                    log.clear();
                    history.clear();
                    next_state.set(SimulationState::Idle);
                } else {
                    info!("Region {} confirmed unchanged.", region.formula());
                }
                preview.0 = Some(region);
            }
        }
        snapshot.mark_dirty();
    }
}

/// Verwirft Zähler und Puffer des laufenden Laufs.
fn clear_run(
    estimator: &mut MonteCarloEstimator,
    points: &mut PointBuffer,
    log: &mut SampleLog,
    history: &mut EstimateHistory,
    snapshot: &mut PlotSnapshot,
) {
    estimator.reset();
    points.clear();
    log.clear();
    history.clear();
    snapshot.mark_dirty();
}

pub fn handle_reset_requests_system(
    mut events: EventReader<ResetRequestedEvent>,
    mut estimator: ResMut<MonteCarloEstimator>,
    mut points: ResMut<PointBuffer>,
    mut log: ResMut<SampleLog>,
    mut history: ResMut<EstimateHistory>,
    mut snapshot: ResMut<PlotSnapshot>,
    mut next_state: ResMut<NextState<SimulationState>>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    clear_run(&mut estimator, &mut points, &mut log, &mut history, &mut snapshot);
    next_state.set(SimulationState::Idle);
    info!("Reset requested. Counts cleared, simulation is Idle.");
}

/// Ein neuer Seed beginnt einen neuen Lauf.
///
/// The generator itself is reseeded by the seed plugin after this set runs,
/// so the next run starts at the beginning of the new stream.
pub fn handle_seed_changes_system(
    mut events: EventReader<SeedChangedEvent>,
    mut estimator: ResMut<MonteCarloEstimator>,
    mut points: ResMut<PointBuffer>,
    mut log: ResMut<SampleLog>,
    mut history: ResMut<EstimateHistory>,
    mut snapshot: ResMut<PlotSnapshot>,
    mut next_state: ResMut<NextState<SimulationState>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    clear_run(&mut estimator, &mut points, &mut log, &mut history, &mut snapshot);
    next_state.set(SimulationState::Idle);
    info!("Seed changed to {}. Counts cleared, simulation is Idle.", event.new_seed);
}

/// Ein Batch pro Tick.
pub fn sample_batch_system(
    sim_params: Res<SimulationParameters>,
    mut seed: ResMut<SeedResource>,
    mut estimator: ResMut<MonteCarloEstimator>,
    mut points: ResMut<PointBuffer>,
    mut log: ResMut<SampleLog>,
    mut history: ResMut<EstimateHistory>,
) {
    let outcome = estimator.sample_batch(&mut *seed, sim_params.batch_size.count());

    // Nur so viele Punkte übernehmen, wie die Puffer ohnehin behalten
    let skip_points = outcome.samples.len().saturating_sub(points.max_size());
    points.extend(outcome.samples.iter().skip(skip_points).copied());
    let skip_log = outcome.samples.len().saturating_sub(log.max_size());
    log.extend(outcome.samples.iter().skip(skip_log).copied());

    if let Some(estimate) = estimator.current_estimate() {
        history.push(EstimatePoint {
            total_count: estimator.total_count(),
            pi: estimate.pi,
        });
        debug!(
            "Batch: {} hits, {} misses. Total {} -> pi ~ {:.10}",
            outcome.hits,
            outcome.misses,
            estimator.total_count(),
            estimate.pi
        );
    }
}

/// Erneuert den gezeichneten Stand mit der Redraw-Rate oder sofort, wenn markiert.
pub fn refresh_plot_snapshot_system(
    time: Res<Time>,
    preview: Res<RegionPreview>,
    points: Res<PointBuffer>,
    mut snapshot: ResMut<PlotSnapshot>,
) {
    snapshot.timer.tick(time.delta());
    if snapshot.timer.just_finished() || snapshot.is_dirty() {
        snapshot.refresh(preview.0, &points);
    }
}

pub fn handle_export_requests_system(
    mut events: EventReader<ExportRequestedEvent>,
    sim_params: Res<SimulationParameters>,
    estimator: Res<MonteCarloEstimator>,
    seed: Res<SeedResource>,
    points: Res<PointBuffer>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let summary = RunSummary::capture(&estimator, sim_params.batch_size, seed.seed);
    if let Err(err) = export_run(&sim_params.export_dir, &summary, &points.to_vec()) {
        error!("Export failed: {err}");
    }
}
