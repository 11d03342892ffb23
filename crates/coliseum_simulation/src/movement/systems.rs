//! Movement systems: intent → position, arena wall, facing.

use bevy::prelude::*;

use crate::combat::Combatant;
use crate::components::{Dead, Fighter, FighterIntent, Side};
use crate::config::{DuelConfig, FighterTuning};
use crate::movement::{constrain, horizontal_direction, BoundaryHit, Constrained};

/// System: move fighters along their intent, clamped to the arena.
///
/// Swinging fighters stand still; guarding ones may move.
pub fn move_fighters(
    mut fighters: Query<
        (Entity, &FighterTuning, &FighterIntent, &Combatant, &mut Transform),
        (With<Fighter>, Without<Dead>),
    >,
    config: Res<DuelConfig>,
    time: Res<Time<Fixed>>,
    mut boundary_events: EventWriter<BoundaryHit>,
) {
    let delta = time.delta_secs();

    for (entity, tuning, intent, combatant, mut transform) in fighters.iter_mut() {
        if combatant.is_attacking() {
            continue;
        }

        let direction = Vec3::new(intent.movement.x, 0.0, intent.movement.z).normalize_or_zero();
        if direction == Vec3::ZERO {
            continue;
        }

        let current = transform.translation;
        let proposed = current + direction * tuning.move_speed * delta;

        let constrained = constrain(current, proposed, &config.arena);
        transform.translation = constrained.position();
        if let Constrained::Bounced(position) = constrained {
            boundary_events.write(BoundaryHit { entity, position });
        }
    }
}

/// System: every living fighter snaps to face its opponent.
pub fn face_opponents(mut fighters: Query<(&Fighter, &mut Transform), Without<Dead>>) {
    let mut player = None;
    let mut enemy = None;
    for (fighter, transform) in fighters.iter() {
        match fighter.side {
            Side::Player => player = Some(transform.translation),
            Side::Enemy => enemy = Some(transform.translation),
        }
    }

    for (fighter, mut transform) in fighters.iter_mut() {
        let opponent = match fighter.side {
            Side::Player => enemy,
            Side::Enemy => player,
        };
        let Some(opponent) = opponent else {
            continue;
        };
        if let Some(direction) = horizontal_direction(transform.translation, opponent) {
            transform.look_to(direction, Vec3::Y);
        }
    }
}
