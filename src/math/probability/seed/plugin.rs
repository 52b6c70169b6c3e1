//! Provides a Bevy `Plugin` for integrating seed-based random number generation.
//!
//! This plugin initializes the `SeedResource` and sets up an event handler
//! for `SeedChangedEvent` to update the resource when the seed changes.

use super::{events::SeedChangedEvent, resource::SeedResource};
use bevy::prelude::*;

/// A Bevy `Plugin` responsible for managing the global `SeedResource`.
///
/// This plugin performs the following actions:
/// - Initializes the `SeedResource` if it doesn't already exist.
/// - Registers the `SeedChangedEvent`.
/// - Adds a system (`seed_changed_event_handler`) to listen for `SeedChangedEvent`
///   and reseed the resource accordingly.
pub struct SeedPlugin;

impl Plugin for SeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SeedResource>()
            .add_event::<SeedChangedEvent>()
            .add_systems(Update, seed_changed_event_handler);
    }
}

/// Event handler system that listens for `SeedChangedEvent`.
///
/// Reseeding restarts the random stream. Resetting the run that used the old
/// stream is up to the consumers of the event.
pub(crate) fn seed_changed_event_handler(
    mut events: EventReader<SeedChangedEvent>,
    mut seed_resource: ResMut<SeedResource>,
) {
    for event in events.read() {
        info!(
            "SeedResource is being updated due to SeedChangedEvent: {}",
            event.new_seed
        );
        seed_resource.reset_with_new_seed(event.new_seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_event_reseeds_resource() {
        let mut app = App::new();
        app.insert_resource(SeedResource::from_seed(1))
            .add_event::<SeedChangedEvent>()
            .add_systems(Update, seed_changed_event_handler);

        app.world.send_event(SeedChangedEvent { new_seed: 99 });
        app.update();

        let seed = app.world.resource::<SeedResource>();
        assert_eq!(seed.seed, 99);
    }
}
