//! Combat module
//!
//! - components: `Combatant` state machine (`Swing`, `Guard`, `Pose`, `SwingDirection`)
//! - events: hits, damage, death, health/pose/feedback outputs
//! - resolver: swing arbitration (`HitResolution::{Centralized, SelfResolved}`)
//! - systems: intent → combatant, hits → health
//!
//! Presentation (pose rendering, health bars, "HIT!" text) lives outside the
//! core and only listens to the events declared here.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod resolver;
pub mod systems;

pub use components::{Combatant, Guard, Pose, StepReport, Swing, SwingDirection};
pub use events::*;
pub use resolver::{resolve_centralized, resolve_melee_swings, resolve_self, Contact, SwingOutcome};
pub use systems::{apply_melee_hits, drive_combatants};

use crate::DuelSet;

/// Combat Plugin
///
/// Registers combat events and systems in FixedUpdate.
///
/// Execution order:
/// 1. drive_combatants (`DuelSet::Actions`): attack → guard → cooldowns
/// 2. resolve_melee_swings (`DuelSet::Resolve`): swing vs defender
/// 3. apply_melee_hits (`DuelSet::Damage`): health, death
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MeleeHit>()
            .add_event::<DamageDealt>()
            .add_event::<FighterDied>()
            .add_event::<HealthChanged>()
            .add_event::<PoseChanged>()
            .add_event::<CombatFeedback>();

        app.register_type::<Combatant>();

        app.add_systems(FixedUpdate, drive_combatants.in_set(DuelSet::Actions))
            .add_systems(FixedUpdate, resolve_melee_swings.in_set(DuelSet::Resolve))
            .add_systems(FixedUpdate, apply_melee_hits.in_set(DuelSet::Damage));
    }
}
