// src/math/types/mod.rs
pub mod bounds;
pub mod point;

pub use bounds::*;
pub use point::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::DVec2;

// Einheitlicher Punkttyp für Stichproben und Regionen (f64, die Schätzung soll nicht an f32 scheitern)
pub type Point2D = DVec2;
