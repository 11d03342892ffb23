//! Combat events
//!
//! The core never touches presentation: everything a renderer, HUD or audio
//! layer needs leaves the simulation through these events.

use bevy::prelude::*;

use crate::combat::{Pose, SwingDirection};
use crate::components::Side;

/// Event: resolver decided a swing connected (damage not yet applied).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MeleeHit {
    pub attacker: Entity,
    pub target: Entity,
    pub direction: SwingDirection,
    pub damage: u32,
}

/// Event: health actually changed because of a hit.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    /// Amount removed (saturated at remaining health)
    pub damage: u32,
    pub target_died: bool,
}

/// Event: fighter reached 0 HP. Sent exactly once per death.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FighterDied {
    pub entity: Entity,
    pub side: Side,
    pub killer: Option<Entity>,
}

/// Event: HUD health bar update.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct HealthChanged {
    pub entity: Entity,
    pub side: Side,
    pub current: u32,
    pub max: u32,
}

/// Event: stance key changed (renderer swaps the pose).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PoseChanged {
    pub entity: Entity,
    pub side: Side,
    pub pose: Pose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Hit,
    Blocked,
}

/// Event: transient "HIT!" / "BLOCKED!" cue at the target's position.
///
/// Fire-and-forget; the core never waits on it.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct CombatFeedback {
    pub kind: FeedbackKind,
    pub target: Entity,
    pub position: Vec3,
}

impl FeedbackKind {
    pub fn label(self) -> &'static str {
        match self {
            FeedbackKind::Hit => "HIT!",
            FeedbackKind::Blocked => "BLOCKED!",
        }
    }
}
