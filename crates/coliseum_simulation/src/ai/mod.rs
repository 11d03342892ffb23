//! Enemy AI: a randomized reactive policy layered on the shared combatant.
//!
//! The brain owns two periodic timers (decision, behavior) plus the
//! auto-release countdown of a random guard, and writes `FighterIntent`
//! exactly like the player's input path does.

use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::{Behavior, BlockRelease, EnemyBrain};
pub use systems::{
    behavior_movement, make_decision, retreat_on_boundary, think, tick_enemy_brains, Sighting,
};

use crate::DuelSet;

/// AI Plugin
///
/// Runs in FixedUpdate, before movement:
/// 1. retreat_on_boundary: wall contact from the previous frame
/// 2. tick_enemy_brains: timers, decisions, random attack/guard → intent
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<EnemyBrain>();

        app.add_systems(
            FixedUpdate,
            (retreat_on_boundary, tick_enemy_brains)
                .chain()
                .in_set(DuelSet::Ai),
        );
    }
}
