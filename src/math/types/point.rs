use super::*;

/// Eine gezogene Stichprobe samt Klassifikation gegen den Kreis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifiedSample {
    pub position: Point2D,
    pub hit: bool,
}

impl ClassifiedSample {
    pub fn new(position: Point2D, hit: bool) -> Self {
        Self { position, hit }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}
