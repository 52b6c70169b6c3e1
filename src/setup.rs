// ./src/setup.rs
use bevy::prelude::*;

pub fn setup_scene(mut commands: Commands) {
    // Kamera; gezeichnet wird ausschließlich über egui
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: bevy::render::camera::ClearColorConfig::Custom(Color::rgb(0.12, 0.12, 0.14)),
            ..default()
        },
        ..default()
    });
    info!("Scene ready. Confirm a region and start the simulation.");
}
