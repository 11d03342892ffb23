//! AI movement: behavior → movement vector.

use bevy::prelude::*;

use crate::ai::Behavior;

/// Movement vector for `behavior`, given the unit vector toward the opponent.
///
/// No opponent (or standing on top of it) means no movement.
pub fn behavior_movement(behavior: Behavior, to_opponent: Option<Vec3>) -> Vec3 {
    let Some(direction) = to_opponent else {
        return Vec3::ZERO;
    };

    match behavior {
        Behavior::Approach => direction,
        Behavior::Retreat => -direction,
        Behavior::Circle => Vec3::Y.cross(direction),
        Behavior::Idle => Vec3::ZERO,
    }
}
