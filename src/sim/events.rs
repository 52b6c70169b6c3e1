use bevy::prelude::*;

/// Rohtext der drei Eingabefelder, wird erst im Handler validiert.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct RegionSubmittedEvent {
    pub a: String,
    pub b: String,
    pub r: String,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetRequestedEvent;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ExportRequestedEvent;
