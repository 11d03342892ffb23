//! Combat resolver: decides whether an in-progress swing lands.
//!
//! Two arbitration modes (`HitResolution`):
//! - Centralized: every frame inside the hit window, 25 damage, latch reset
//!   once the swing leaves the window
//! - SelfResolved: one check per swing past the midpoint, 10 damage, the
//!   latch is consumed even when the swing misses or is blocked
//!
//! The resolver only decides. Health is touched later by `apply_melee_hits`.

use bevy::prelude::*;

use crate::combat::{CombatFeedback, Combatant, FeedbackKind, Guard, MeleeHit, Swing};
use crate::components::{Dead, Fighter, Side};
use crate::config::{DuelConfig, HitResolution, ResolverTuning};
use crate::movement::horizontal_distance;

/// Defender as seen by the attacker's swing this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub distance: f32,
    pub guard: Option<Guard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingOutcome {
    Nothing,
    Hit { damage: u32 },
    /// First blocked contact of this swing
    Blocked,
}

fn guard_matches(contact: &Contact, swing: &Swing) -> bool {
    contact
        .guard
        .is_some_and(|guard| guard.direction == swing.direction)
}

fn report_block(swing: &mut Swing) -> SwingOutcome {
    if swing.block_reported {
        return SwingOutcome::Nothing;
    }
    swing.block_reported = true;
    SwingOutcome::Blocked
}

/// Centralized arbitration for one swing on one frame.
///
/// `contact` is `None` when there is no living opponent.
pub fn resolve_centralized(
    swing: &mut Swing,
    contact: Option<Contact>,
    tuning: &ResolverTuning,
) -> SwingOutcome {
    if !swing.in_window(tuning.hit_window) {
        swing.has_dealt_damage = false;
        return SwingOutcome::Nothing;
    }
    if swing.has_dealt_damage {
        return SwingOutcome::Nothing;
    }
    let Some(contact) = contact else {
        return SwingOutcome::Nothing;
    };
    if contact.distance >= tuning.melee_range {
        return SwingOutcome::Nothing;
    }
    if guard_matches(&contact, swing) {
        return report_block(swing);
    }

    swing.has_dealt_damage = true;
    SwingOutcome::Hit {
        damage: tuning.centralized_damage,
    }
}

/// Self-resolved arbitration: a single check once the swing passes the midpoint.
pub fn resolve_self(
    swing: &mut Swing,
    contact: Option<Contact>,
    tuning: &ResolverTuning,
) -> SwingOutcome {
    if swing.progress <= tuning.self_check_progress || swing.has_dealt_damage {
        return SwingOutcome::Nothing;
    }
    swing.has_dealt_damage = true;

    let Some(contact) = contact else {
        return SwingOutcome::Nothing;
    };
    if contact.distance > tuning.self_hit_range {
        return SwingOutcome::Nothing;
    }
    if guard_matches(&contact, swing) {
        return report_block(swing);
    }

    SwingOutcome::Hit {
        damage: tuning.self_resolved_damage,
    }
}

/// System: arbitrate every active swing against the opposing fighter.
///
/// Emits `MeleeHit` + `CombatFeedback::Hit` for contact, `CombatFeedback::Blocked`
/// once per blocked swing.
pub fn resolve_melee_swings(
    mut fighters: Query<(Entity, &Fighter, &Transform, &mut Combatant), Without<Dead>>,
    config: Res<DuelConfig>,
    mut hit_events: EventWriter<MeleeHit>,
    mut feedback_events: EventWriter<CombatFeedback>,
) {
    let defenders: Vec<(Entity, Side, Vec3, Option<Guard>)> = fighters
        .iter()
        .map(|(entity, fighter, transform, combatant)| {
            (entity, fighter.side, transform.translation, combatant.guard)
        })
        .collect();

    for (attacker, fighter, transform, mut combatant) in fighters.iter_mut() {
        let Some(swing) = combatant.swing.as_mut() else {
            continue;
        };

        let defender = defenders
            .iter()
            .find(|(_, side, _, _)| *side == fighter.side.opponent());
        let contact = defender.map(|(_, _, position, guard)| Contact {
            distance: horizontal_distance(transform.translation, *position),
            guard: *guard,
        });

        let outcome = match config.resolver.mode {
            HitResolution::Centralized => resolve_centralized(swing, contact, &config.resolver),
            HitResolution::SelfResolved => resolve_self(swing, contact, &config.resolver),
        };

        let Some(&(target, _, position, _)) = defender else {
            continue;
        };

        match outcome {
            SwingOutcome::Nothing => {}
            SwingOutcome::Hit { damage } => {
                crate::logger::log(&format!(
                    "💥 {} {} {} swing connects ({} dmg, progress {:.2})",
                    FeedbackKind::Hit.label(),
                    fighter.side.as_str(),
                    swing.direction.as_str(),
                    damage,
                    swing.progress
                ));
                hit_events.write(MeleeHit {
                    attacker,
                    target,
                    direction: swing.direction,
                    damage,
                });
                feedback_events.write(CombatFeedback {
                    kind: FeedbackKind::Hit,
                    target,
                    position,
                });
            }
            SwingOutcome::Blocked => {
                crate::logger::log(&format!(
                    "🛡️ {} {} stopped {} swing",
                    FeedbackKind::Blocked.label(),
                    fighter.side.opponent().as_str(),
                    swing.direction.as_str()
                ));
                feedback_events.write(CombatFeedback {
                    kind: FeedbackKind::Blocked,
                    target,
                    position,
                });
            }
        }
    }
}
