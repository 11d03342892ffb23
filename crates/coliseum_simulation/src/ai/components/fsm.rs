//! Enemy brain components (behavior, timers, held guard).

use bevy::prelude::*;

use crate::combat::SwingDirection;

/// Coarse movement policy of the enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum Behavior {
    #[default]
    Idle,
    Approach,
    Retreat,
    Circle,
}

impl Behavior {
    /// Weighted pick from one uniform roll in `[0, 1)`.
    ///
    /// `weights` order: idle, approach, retreat, circle. Anything past the
    /// first three buckets lands on `Circle`.
    pub fn from_roll(roll: f64, weights: [f64; 4]) -> Behavior {
        let mut threshold = 0.0;
        for (behavior, weight) in [Behavior::Idle, Behavior::Approach, Behavior::Retreat]
            .into_iter()
            .zip(weights)
        {
            threshold += weight;
            if roll < threshold {
                return behavior;
            }
        }
        Behavior::Circle
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Idle => "idle",
            Behavior::Approach => "approach",
            Behavior::Retreat => "retreat",
            Behavior::Circle => "circle",
        }
    }
}

/// Guard raised by the brain on its own, dropped when `remaining` runs out.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct BlockRelease {
    pub direction: SwingDirection,
    /// Seconds until the guard is released
    pub remaining: f32,
}

/// Enemy AI state.
///
/// Both timers start at 0 so the very first tick decides.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct EnemyBrain {
    pub behavior: Behavior,
    /// Seconds until the next distance-based decision
    pub decision_timer: f32,
    /// Seconds until the next random behavior re-roll
    pub behavior_timer: f32,
    /// Pending auto-release of a random guard
    pub block_release: Option<BlockRelease>,
}

impl EnemyBrain {
    /// Wall contact: back off and keep backing off for a full behavior period.
    pub fn retreat_from_wall(&mut self, behavior_interval: f32) {
        self.behavior = Behavior::Retreat;
        self.behavior_timer = behavior_interval;
    }

    pub fn cancel_block_release(&mut self) {
        self.block_release = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
