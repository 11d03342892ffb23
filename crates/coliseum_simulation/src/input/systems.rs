//! Player input systems: `PlayerInput` → `FighterIntent`.

use bevy::prelude::*;

use crate::components::{Dead, Fighter, FighterIntent, PlayerControlled};
use crate::input::PlayerInput;
use crate::movement::horizontal_direction;

/// Forward/right basis of the player's movement frame.
///
/// Forward points at the opponent (or world -Z without one), right is
/// `forward × Y`.
pub fn movement_basis(own: Vec3, opponent: Option<Vec3>) -> (Vec3, Vec3) {
    let forward = opponent
        .and_then(|target| horizontal_direction(own, target))
        .unwrap_or(Vec3::NEG_Z);
    (forward, forward.cross(Vec3::Y))
}

/// System: translate `PlayerInput` into the player fighter's intent.
///
/// Movement is opponent-relative: W walks toward the enemy, A/D circle it.
pub fn apply_player_input(
    input: Res<PlayerInput>,
    mut players: Query<(&Fighter, &Transform, &mut FighterIntent), (With<PlayerControlled>, Without<Dead>)>,
    fighters: Query<(&Fighter, &Transform), Without<Dead>>,
) {
    for (fighter, transform, mut intent) in players.iter_mut() {
        let opponent_side = fighter.side.opponent();
        let opponent = fighters
            .iter()
            .find(|(other, _)| other.side == opponent_side)
            .map(|(_, other)| other.translation);

        let (forward, right) = movement_basis(transform.translation, opponent);

        intent.movement = forward * input.movement.y + right * input.movement.x;
        intent.attack = input.attack;
        intent.block = if input.attack.is_some() { None } else { input.block };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_without_opponent() {
        let (forward, right) = movement_basis(Vec3::ZERO, None);
        assert_eq!(forward, Vec3::NEG_Z);
        assert!((right - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_basis_faces_opponent() {
        // Player south of the enemy, like at spawn
        let (forward, right) = movement_basis(Vec3::new(0.0, 0.0, 5.0), Some(Vec3::new(0.0, 0.0, -5.0)));
        assert!((forward - Vec3::NEG_Z).length() < 1e-6);
        assert!((right - Vec3::X).length() < 1e-6);

        // Enemy to the east: forward is +X, right is +Z
        let (forward, right) = movement_basis(Vec3::ZERO, Some(Vec3::new(4.0, 0.0, 0.0)));
        assert!((forward - Vec3::X).length() < 1e-6);
        assert!((right - Vec3::Z).length() < 1e-6);
    }
}
