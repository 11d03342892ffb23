//! Damage application and death.

use bevy::prelude::*;

use crate::ai::EnemyBrain;
use crate::combat::{Combatant, DamageDealt, FighterDied, HealthChanged, MeleeHit, PoseChanged};
use crate::components::{Dead, Fighter, FighterIntent, Health};

/// System: apply resolved hits to health.
///
/// 1. `MeleeHit` → `Health::take_damage` (saturating)
/// 2. `DamageDealt` + `HealthChanged`
/// 3. alive → 0: `Dead` marker, pose `Fallen`, brain guard cancelled,
///    `FighterDied` (exactly once, later hits find the target already at 0)
pub fn apply_melee_hits(
    mut commands: Commands,
    mut hit_events: EventReader<MeleeHit>,
    mut targets: Query<
        (
            &Fighter,
            &mut Health,
            &mut Combatant,
            &mut FighterIntent,
            Option<&mut EnemyBrain>,
        ),
        Without<Dead>,
    >,
    mut damage_events: EventWriter<DamageDealt>,
    mut health_events: EventWriter<HealthChanged>,
    mut died_events: EventWriter<FighterDied>,
    mut pose_events: EventWriter<PoseChanged>,
) {
    for hit in hit_events.read() {
        if hit.attacker == hit.target {
            continue;
        }

        let Ok((fighter, mut health, mut combatant, mut intent, brain)) =
            targets.get_mut(hit.target)
        else {
            continue;
        };
        if !health.is_alive() {
            continue;
        }

        let applied = health.take_damage(hit.damage);
        let target_died = !health.is_alive();

        damage_events.write(DamageDealt {
            attacker: hit.attacker,
            target: hit.target,
            damage: applied,
            target_died,
        });
        health_events.write(HealthChanged {
            entity: hit.target,
            side: fighter.side,
            current: health.current,
            max: health.max,
        });

        crate::logger::log(&format!(
            "🩸 {} takes {} damage ({}/{})",
            fighter.side.as_str(),
            applied,
            health.current,
            health.max
        ));

        if !target_died {
            continue;
        }

        combatant.fall();
        intent.clear();
        if let Some(mut brain) = brain {
            brain.cancel_block_release();
        }
        commands.entity(hit.target).insert(Dead);

        pose_events.write(PoseChanged {
            entity: hit.target,
            side: fighter.side,
            pose: combatant.pose,
        });
        died_events.write(FighterDied {
            entity: hit.target,
            side: fighter.side,
            killer: Some(hit.attacker),
        });

        crate::logger::log(&format!("💀 {} has fallen", fighter.side.as_str()));
    }
}
