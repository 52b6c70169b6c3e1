// ./src/main.rs
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod math;
pub mod setup; // Kamera für die egui-Oberfläche
pub mod sim;
pub mod ui;

use math::probability::SeedPlugin;
use setup::setup_scene;
use sim::{MonteCarloPlugin, SimulationSet};
use ui::panels::simulation_control_ui_system;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Monte Carlo Simulation - Value of Pi".into(),
                        resolution: (1000.0, 680.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: Level::INFO,
                    filter: "wgpu=error,naga=warn,monte_carlo_pi=info".into(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin)
        .add_plugins((SeedPlugin, MonteCarloPlugin))
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            // Oberfläche zuerst: Events und Zustandswünsche werden im selben Frame verarbeitet
            simulation_control_ui_system.before(SimulationSet),
        )
        .run();
}
