//! Player input: raw keys → `PlayerInput` → player `FighterIntent`
//!
//! - keys: `KeyState`, `PlayerInput`
//! - systems: `apply_player_input`, `movement_basis`

use bevy::prelude::*;

pub mod keys;
pub mod systems;

pub use keys::*;
pub use systems::*;

use crate::DuelSet;

/// Player Input Plugin
///
/// The host writes `PlayerInput` (or maps a `KeyState`) before each update.
pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>();
        app.add_systems(FixedUpdate, apply_player_input.in_set(DuelSet::Intent));
    }
}
