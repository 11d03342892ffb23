//! Fighter identity and vitals: Fighter, Side, Health, Dead, PlayerControlled

use bevy::prelude::*;

use crate::combat::Combatant;
use crate::components::FighterIntent;

/// Which corner of the duel an entity fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        }
    }
}

/// A duel participant (one per side).
///
/// Pulls in the shared state machine, vitals and intent through Required
/// Components; `FighterTuning` is inserted explicitly at spawn.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Health, Combatant, FighterIntent, Transform)]
pub struct Fighter {
    pub side: Side,
}

/// Health of a fighter
///
/// Invariant: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Saturating; returns the amount actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current);
        self.current -= applied;
        applied
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

/// Marker: fighter reached 0 HP. Terminal until the match is reset.
#[derive(Component, Debug)]
pub struct Dead;

/// Marker: intent comes from `PlayerInput` instead of an `EnemyBrain`.
///
/// Swap it for a brain to let the AI play the player's side
/// (the headless runner does exactly that).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerControlled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(100);
        assert_eq!(health.current, 100);

        assert_eq!(health.take_damage(30), 30);
        assert_eq!(health.current, 70);
        assert!(health.is_alive());

        assert_eq!(health.take_damage(100), 70); // Saturating sub
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_health_restore() {
        let mut health = Health::new(100);
        health.take_damage(75);
        assert_eq!(health.current, 25);

        health.restore();
        assert_eq!(health.current, 100);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }
}
