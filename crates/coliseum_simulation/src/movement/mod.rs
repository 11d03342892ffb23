//! Movement domain: arena geometry, fighter locomotion, facing
//!
//! Contents:
//! - arena: `constrain`, `horizontal_distance`, `horizontal_direction`
//! - events: `BoundaryHit`
//! - systems: `move_fighters`, `face_opponents`

use bevy::prelude::*;

pub mod arena;
pub mod events;
pub mod systems;

pub use arena::*;
pub use events::*;
pub use systems::*;

use crate::DuelSet;

/// Arena Plugin
///
/// Movement runs before the combatant step so that a swing started this
/// frame does not freeze the fighter until the next one.
pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BoundaryHit>();

        app.add_systems(
            FixedUpdate,
            (move_fighters, face_opponents)
                .chain()
                .in_set(DuelSet::Movement),
        );
    }
}
