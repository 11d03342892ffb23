//! Melee systems: intent → combatant transitions.

use bevy::prelude::*;

use crate::combat::{Combatant, PoseChanged};
use crate::components::{Dead, Fighter, FighterIntent};
use crate::config::FighterTuning;

/// System: step every living combatant with its current intent.
///
/// Order inside the step: attack, guard, cooldowns. Movement already ran.
/// Emits `PoseChanged` whenever the stance key changes.
pub fn drive_combatants(
    mut fighters: Query<
        (Entity, &Fighter, &FighterTuning, &FighterIntent, &mut Combatant),
        Without<Dead>,
    >,
    time: Res<Time<Fixed>>,
    mut pose_events: EventWriter<PoseChanged>,
) {
    let delta = time.delta_secs();

    for (entity, fighter, tuning, intent, mut combatant) in fighters.iter_mut() {
        let before = combatant.pose;
        let report = combatant.step(intent, tuning, delta);

        if let Some(direction) = report.swing_started {
            crate::logger::log(&format!(
                "⚔️ {} swing {} started ({:.2}s)",
                fighter.side.as_str(),
                direction.as_str(),
                tuning.attack_duration
            ));
        }
        if report.swing_finished {
            crate::logger::log(&format!("✅ {} swing finished", fighter.side.as_str()));
        }
        if let Some(direction) = report.guard_raised {
            crate::logger::log(&format!(
                "🛡️ {} guard {}",
                fighter.side.as_str(),
                direction.as_str()
            ));
        }

        if combatant.pose != before {
            pose_events.write(PoseChanged {
                entity,
                side: fighter.side,
                pose: combatant.pose,
            });
        }
    }
}
