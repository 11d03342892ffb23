//! Controller intent: what a fighter wants to do this frame.

use bevy::prelude::*;

use crate::combat::SwingDirection;

/// Per-frame intent written by the controller (player input or enemy brain)
/// and consumed by the shared combatant systems.
///
/// - `movement`: world-space horizontal direction, any length (normalized on use)
/// - `attack`: start a swing in this direction (ignored while swinging/on cooldown)
/// - `block`: hold a guard in this direction; `None` releases it
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FighterIntent {
    pub movement: Vec3,
    pub attack: Option<SwingDirection>,
    pub block: Option<SwingDirection>,
}

impl FighterIntent {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
