use crate::math::{region::Region, types::ClassifiedSample};
use bevy::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

/// Punkte pro Tick, wie in der Auswahl der Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BatchSize {
    #[default]
    Single,
    Dots64,
    Dots256,
    Dots2048,
}

impl BatchSize {
    pub const ALL: [BatchSize; 4] = [
        BatchSize::Single,
        BatchSize::Dots64,
        BatchSize::Dots256,
        BatchSize::Dots2048,
    ];

    pub fn count(self) -> usize {
        match self {
            BatchSize::Single => 1,
            BatchSize::Dots64 => 64,
            BatchSize::Dots256 => 256,
            BatchSize::Dots2048 => 2048,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct SimulationParameters {
    // --- Eingaben ---
    pub batch_size: BatchSize,
    pub a_input: String,
    pub b_input: String,
    pub r_input: String,
    pub seed_input: String,

    // --- Puffergrößen ---
    pub point_buffer_capacity: usize,
    pub log_capacity: usize,
    pub history_capacity: usize,

    // --- Darstellung & Export ---
    pub redraw_hz: f64,
    pub export_dir: PathBuf,
}

impl SimulationParameters {
    /// Leert die drei Eingabefelder der Region (nach ungültiger Eingabe).
    pub fn clear_region_inputs(&mut self) {
        self.a_input.clear();
        self.b_input.clear();
        self.r_input.clear();
    }

    pub fn redraw_interval(&self) -> Duration {
        if self.redraw_hz.is_finite() && self.redraw_hz > 0.0 {
            Duration::from_secs_f64(1.0 / self.redraw_hz)
        } else {
            Duration::from_secs_f64(1.0 / 30.0)
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            // Eingaben
            batch_size: BatchSize::Single,
            a_input: "0".to_string(),
            b_input: "0".to_string(),
            r_input: "1".to_string(),
            seed_input: String::new(),

            // Puffer
            point_buffer_capacity: 20_000,
            log_capacity: 200,
            history_capacity: 1000,

            // Darstellung
            redraw_hz: 30.0,
            export_dir: PathBuf::from("shots"),
        }
    }
}

/// Die zuletzt bestätigte Region, wie sie im Graph angezeigt wird.
/// `None` nach einer ungültigen Eingabe: es gibt keine Vorschau und keinen Lauf.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RegionPreview(pub Option<Region>);

impl Default for RegionPreview {
    fn default() -> Self {
        Self(Some(Region::default()))
    }
}

// Ringpuffer fester Größe: das älteste Element fällt heraus.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    max_size: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(max_size: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(max_size.min(4096)),
            max_size,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.max_size == 0 {
            return;
        }
        if self.items.len() == self.max_size {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> RingBuffer<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

/// Zuletzt gezogene Punkte für die Darstellung.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct PointBuffer(pub RingBuffer<ClassifiedSample>);

/// Zuletzt gezogene Punkte für das Log-Panel.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct SampleLog(pub RingBuffer<ClassifiedSample>);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatePoint {
    pub total_count: u64,
    pub pi: f64,
}

/// π-Schätzung nach jedem Batch, für das Konvergenzdiagramm.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct EstimateHistory(pub RingBuffer<EstimatePoint>);

impl FromWorld for PointBuffer {
    fn from_world(world: &mut World) -> Self {
        let capacity = world
            .get_resource::<SimulationParameters>()
            .map_or(SimulationParameters::default().point_buffer_capacity, |p| {
                p.point_buffer_capacity
            });
        Self(RingBuffer::new(capacity))
    }
}

impl FromWorld for SampleLog {
    fn from_world(world: &mut World) -> Self {
        let capacity = world
            .get_resource::<SimulationParameters>()
            .map_or(SimulationParameters::default().log_capacity, |p| {
                p.log_capacity
            });
        Self(RingBuffer::new(capacity))
    }
}

impl FromWorld for EstimateHistory {
    fn from_world(world: &mut World) -> Self {
        let capacity = world
            .get_resource::<SimulationParameters>()
            .map_or(SimulationParameters::default().history_capacity, |p| {
                p.history_capacity
            });
        Self(RingBuffer::new(capacity))
    }
}

/// Vom Graph gezeichneter Stand. Wird nur mit der Redraw-Rate erneuert,
/// damit Zeichnen und Ziehen der Stichproben entkoppelt sind.
#[derive(Resource, Debug, Clone)]
pub struct PlotSnapshot {
    pub region: Option<Region>,
    pub samples: Vec<ClassifiedSample>,
    pub timer: Timer,
    dirty: bool,
}

impl PlotSnapshot {
    pub fn new(interval: Duration) -> Self {
        Self {
            region: Some(Region::default()),
            samples: Vec::new(),
            timer: Timer::new(interval, TimerMode::Repeating),
            dirty: true,
        }
    }

    /// Erzwingt eine Aktualisierung beim nächsten Refresh, unabhängig vom Timer.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn refresh(&mut self, region: Option<Region>, buffer: &PointBuffer) {
        self.region = region;
        self.samples = buffer.to_vec();
        self.dirty = false;
    }
}

impl FromWorld for PlotSnapshot {
    fn from_world(world: &mut World) -> Self {
        let interval = world
            .get_resource::<SimulationParameters>()
            .map_or(SimulationParameters::default().redraw_interval(), |p| {
                p.redraw_interval()
            });
        Self::new(interval)
    }
}
