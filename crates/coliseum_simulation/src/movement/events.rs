//! Movement events

use bevy::prelude::*;

/// Event: a fighter tried to leave the walkable circle.
///
/// Sent after the position was nudged back toward the centre.
/// Consumed by the enemy brain (switch to Retreat) and by feedback layers.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct BoundaryHit {
    pub entity: Entity,
    pub position: Vec3,
}
