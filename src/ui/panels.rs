// ./src/ui/panels.rs
use crate::math::probability::{SeedChangedEvent, SeedResource, seed::resource::text_to_seed};
use crate::math::types::ClassifiedSample;
use crate::sim::estimator::MonteCarloEstimator;
use crate::sim::events::{ExportRequestedEvent, RegionSubmittedEvent, ResetRequestedEvent};
use crate::sim::resources::{
    BatchSize, EstimateHistory, PlotSnapshot, RegionPreview, SampleLog, SimulationParameters,
};
use crate::sim::state::SimulationState;
use crate::ui::visualization::plot::{paint_convergence, paint_plot, sample_color};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Button, Grid, RichText, ScrollArea, TextEdit},
};

const LOG_HEIGHT: f32 = 120.0;
const FIELD_WIDTH: f32 = 140.0;

/// Schätzwerte mit 10 Nachkommastellen, "n/a" solange keine Stichprobe existiert.
pub fn format_estimate(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.10}"))
}

/// Log-Zeile einer Stichprobe, ohne Klassifikation.
pub fn format_sample(sample: &ClassifiedSample) -> String {
    format!("({:.6}, {:.6})", sample.x(), sample.y())
}

#[allow(clippy::too_many_arguments)]
pub fn simulation_control_ui_system(
    mut contexts: EguiContexts,
    mut sim_params: ResMut<SimulationParameters>,
    estimator: Res<MonteCarloEstimator>,
    seed: Res<SeedResource>,
    preview: Res<RegionPreview>,
    snapshot: Res<PlotSnapshot>,
    log: Res<SampleLog>,
    history: Res<EstimateHistory>,
    current_state: Res<State<SimulationState>>,
    mut next_state: ResMut<NextState<SimulationState>>,
    mut region_events: EventWriter<RegionSubmittedEvent>,
    mut seed_events: EventWriter<SeedChangedEvent>,
    mut reset_events: EventWriter<ResetRequestedEvent>,
    mut export_events: EventWriter<ExportRequestedEvent>,
) {
    let ctx = contexts.ctx_mut();
    let state = *current_state.get();
    let running = state == SimulationState::Running;
    let can_run = preview.0.is_some();

    egui::SidePanel::right("simulation_controls")
        .default_width(360.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Log");
            let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
            ScrollArea::vertical()
                .id_source("sample_log")
                .max_height(LOG_HEIGHT)
                .stick_to_bottom(true)
                .auto_shrink([false, true])
                .show_rows(ui, row_height, log.len(), |ui, rows| {
                    for sample in log.iter().skip(rows.start).take(rows.len()) {
                        ui.horizontal(|ui| {
                            ui.monospace(format_sample(sample));
                            let text = if sample.hit { "True" } else { "False" };
                            ui.label(
                                RichText::new(text)
                                    .monospace()
                                    .color(sample_color(sample.hit)),
                            );
                        });
                    }
                });

            ui.separator();
            ui.heading("Status");
            let estimate = estimator.current_estimate();
            Grid::new("status_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Equation Formula");
                    ui.monospace(estimator.region().formula());
                    ui.end_row();

                    ui.label("Total Dots");
                    ui.monospace(estimator.total_count().to_string());
                    ui.end_row();

                    ui.label("Hits / Misses");
                    ui.monospace(format!(
                        "{} / {}",
                        estimator.hit_count(),
                        estimator.miss_count()
                    ));
                    ui.end_row();

                    ui.label("Estimated π / 4");
                    ui.monospace(format_estimate(estimate.map(|e| e.pi_quarter)));
                    ui.end_row();

                    ui.label("Estimated π");
                    ui.monospace(format_estimate(estimate.map(|e| e.pi)));
                    ui.end_row();

                    ui.label("Absolute Error");
                    ui.monospace(format_estimate(estimate.map(|e| e.absolute_error())));
                    ui.end_row();
                });
            paint_convergence(ui, &history, egui::vec2(ui.available_width(), 80.0));

            ui.separator();
            ui.heading("Settings");
            ui.label("Dots per Action:");
            ui.horizontal(|ui| {
                for size in BatchSize::ALL {
                    ui.radio_value(&mut sim_params.batch_size, size, size.count().to_string());
                }
            });

            ui.add_space(4.0);
            ui.label("Area Criteria:");
            ui.add_enabled_ui(!running, |ui| {
                Grid::new("area_criteria_grid")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("a (X)");
                        ui.add(
                            TextEdit::singleline(&mut sim_params.a_input)
                                .desired_width(FIELD_WIDTH),
                        );
                        ui.end_row();

                        ui.label("b (Y)");
                        ui.add(
                            TextEdit::singleline(&mut sim_params.b_input)
                                .desired_width(FIELD_WIDTH),
                        );
                        ui.end_row();

                        ui.label("r (Scale)");
                        ui.add(
                            TextEdit::singleline(&mut sim_params.r_input)
                                .desired_width(FIELD_WIDTH),
                        );
                        ui.end_row();
                    });
                if ui.button("Confirm Region").clicked() {
                    region_events.send(RegionSubmittedEvent {
                        a: sim_params.a_input.clone(),
                        b: sim_params.b_input.clone(),
                        r: sim_params.r_input.clone(),
                    });
                }
            });

            ui.horizontal(|ui| {
                ui.label("Seed");
                ui.add(
                    TextEdit::singleline(&mut sim_params.seed_input)
                        .hint_text(seed.seed.to_string())
                        .desired_width(FIELD_WIDTH),
                );
                let has_seed = !sim_params.seed_input.trim().is_empty();
                if ui.add_enabled(has_seed, Button::new("Apply")).clicked() {
                    seed_events.send(SeedChangedEvent {
                        new_seed: text_to_seed(&sim_params.seed_input),
                    });
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                match state {
                    SimulationState::Idle => {
                        if ui
                            .add_enabled(can_run, Button::new("▶ Start Simulation"))
                            .clicked()
                        {
                            next_state.set(SimulationState::Running);
                        }
                    }
                    SimulationState::Running => {
                        if ui.button("⏸ Pause").clicked() {
                            next_state.set(SimulationState::Paused);
                        }
                    }
                    SimulationState::Paused => {
                        if ui.add_enabled(can_run, Button::new("▶ Resume")).clicked() {
                            next_state.set(SimulationState::Running);
                        }
                    }
                }
                if ui.button("↺ Reset").clicked() {
                    reset_events.send(ResetRequestedEvent);
                }
                if ui.button("Export").clicked() {
                    export_events.send(ExportRequestedEvent);
                }
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Graph");
        let size = ui.available_width().min(ui.available_height()).max(100.0);
        paint_plot(ui, &snapshot, size);
    });
}
