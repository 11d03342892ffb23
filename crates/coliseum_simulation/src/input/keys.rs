//! Raw key state → `PlayerInput`.
//!
//! Hosts that already speak in actions write `PlayerInput` directly; hosts
//! that only track keys fill a `KeyState` and call `to_player_input`.

use bevy::prelude::*;

use crate::combat::SwingDirection;

/// Player controls for the current frame.
///
/// # Coordinate System
/// Logical, relative to the opponent:
/// - `movement.x`: -1.0 (strafe left) → +1.0 (strafe right)
/// - `movement.y`: -1.0 (back off) → +1.0 (toward the opponent)
///
/// `attack` and `block` are never both set.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub movement: Vec2,
    pub attack: Option<SwingDirection>,
    pub block: Option<SwingDirection>,
}

/// Held keys. WASD move; arrows move too and pick the swing/guard direction;
/// `modifier` (Shift) turns the arrow into a guard instead of an attack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub modifier: bool,
    pub arrow_up: bool,
    pub arrow_down: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
}

fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

impl KeyState {
    /// First held arrow, in up/down/left/right priority.
    pub fn arrow(&self) -> Option<SwingDirection> {
        [
            (self.arrow_up, SwingDirection::Up),
            (self.arrow_down, SwingDirection::Down),
            (self.arrow_left, SwingDirection::Left),
            (self.arrow_right, SwingDirection::Right),
        ]
        .into_iter()
        .find_map(|(held, direction)| held.then_some(direction))
    }

    pub fn to_player_input(&self) -> PlayerInput {
        let movement = Vec2::new(
            axis(self.right || self.arrow_right, self.left || self.arrow_left),
            axis(self.forward || self.arrow_up, self.back || self.arrow_down),
        );

        let arrow = self.arrow();
        let (attack, block) = if self.modifier {
            (None, arrow)
        } else {
            (arrow, None)
        };

        PlayerInput {
            movement,
            attack,
            block,
        }
    }
}
