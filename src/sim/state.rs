use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum SimulationState {
    #[default] // Startzustand: Region einstellen, noch keine Stichproben
    Idle,
    Running,
    Paused,
}
