//! Enemy brain tick: timers, decisions, random attacks and guards.
//!
//! The brain never touches the combatant directly. It writes the same
//! `FighterIntent` the human-input path writes and lets the shared state
//! machine do the rest.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::{behavior_movement, Behavior, BlockRelease, EnemyBrain};
use crate::combat::{Combatant, SwingDirection};
use crate::components::{Dead, Fighter, FighterIntent};
use crate::config::{AiTuning, DuelConfig};
use crate::movement::{horizontal_direction, horizontal_distance};
use crate::DeterministicRng;

/// Opponent as seen by the brain this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub distance: f32,
    /// Unit vector toward the opponent (`None` when standing on it)
    pub direction: Option<Vec3>,
}

impl Sighting {
    pub fn between(own: Vec3, opponent: Vec3) -> Self {
        Self {
            distance: horizontal_distance(own, opponent),
            direction: horizontal_direction(own, opponent),
        }
    }
}

fn random_direction(rng: &mut impl Rng) -> SwingDirection {
    SwingDirection::ALL[rng.gen_range(0..SwingDirection::ALL.len())]
}

/// Distance-based decision (every `decision_interval`).
///
/// Returns an attack request when the brain chooses to strike.
pub fn make_decision(
    brain: &mut EnemyBrain,
    combatant: &Combatant,
    sighting: Option<Sighting>,
    tuning: &AiTuning,
    rng: &mut impl Rng,
) -> Option<SwingDirection> {
    let distance = sighting.map_or(f32::INFINITY, |s| s.distance);

    if distance < tuning.close_range {
        if rng.gen::<f64>() < tuning.close_attack_chance && combatant.can_attack() {
            return Some(random_direction(rng));
        }
        brain.behavior = Behavior::Retreat;
    } else if distance < tuning.far_range {
        brain.behavior = if rng.gen::<f64>() < tuning.mid_approach_chance {
            Behavior::Approach
        } else if rng.gen::<f64>() < tuning.mid_circle_chance {
            Behavior::Circle
        } else {
            Behavior::Idle
        };
    } else {
        brain.behavior = Behavior::Approach;
    }
    None
}

/// One brain frame. Produces the intent for this frame.
///
/// Order: timers, decision, behavior re-roll, random attack, random guard.
pub fn think(
    brain: &mut EnemyBrain,
    combatant: &Combatant,
    sighting: Option<Sighting>,
    tuning: &AiTuning,
    delta: f32,
    rng: &mut impl Rng,
) -> FighterIntent {
    brain.decision_timer -= delta;
    brain.behavior_timer -= delta;

    // Held guard countdown (an attack preempting the guard ends it early)
    if let Some(release) = brain.block_release.as_mut() {
        release.remaining -= delta;
        if release.remaining <= 0.0 || combatant.is_attacking() {
            brain.block_release = None;
        }
    }

    let mut attack = None;

    if brain.decision_timer <= 0.0 {
        attack = make_decision(brain, combatant, sighting, tuning, rng);
        brain.decision_timer = tuning.decision_interval;
    }

    if brain.behavior_timer <= 0.0 {
        brain.behavior = Behavior::from_roll(rng.gen::<f64>(), tuning.behavior_weights);
        brain.behavior_timer = tuning.behavior_interval;
    }

    let busy = attack.is_some() || !combatant.can_attack();
    if !busy && rng.gen::<f64>() < tuning.random_attack_chance {
        attack = Some(random_direction(rng));
    }

    let idle_hands = attack.is_none()
        && !combatant.is_attacking()
        && !combatant.is_blocking()
        && brain.block_release.is_none()
        && combatant.block_cooldown <= 0.0;
    if idle_hands && rng.gen::<f64>() < tuning.random_block_chance {
        brain.block_release = Some(BlockRelease {
            direction: random_direction(rng),
            remaining: tuning.block_hold,
        });
    }

    FighterIntent {
        movement: behavior_movement(brain.behavior, sighting.and_then(|s| s.direction)),
        attack,
        block: brain.block_release.map(|release| release.direction),
    }
}

/// System: run every living brain and overwrite its fighter's intent.
pub fn tick_enemy_brains(
    mut brains: Query<
        (&Fighter, &Transform, &Combatant, &mut EnemyBrain, &mut FighterIntent),
        Without<Dead>,
    >,
    fighters: Query<(&Fighter, &Transform), Without<Dead>>,
    config: Res<DuelConfig>,
    time: Res<Time<Fixed>>,
    mut rng: ResMut<DeterministicRng>,
) {
    let delta = time.delta_secs();

    for (fighter, transform, combatant, mut brain, mut intent) in brains.iter_mut() {
        let opponent_side = fighter.side.opponent();
        let sighting = fighters
            .iter()
            .find(|(other, _)| other.side == opponent_side)
            .map(|(_, other)| Sighting::between(transform.translation, other.translation));

        let previous = brain.behavior;
        *intent = think(
            &mut brain,
            combatant,
            sighting,
            &config.ai,
            delta,
            &mut rng.rng,
        );

        if brain.behavior != previous {
            crate::logger::log(&format!(
                "🤖 {} brain: {} → {}",
                fighter.side.as_str(),
                previous.as_str(),
                brain.behavior.as_str()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Swing;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DT: f32 = 1.0 / 60.0;

    /// Only the decision timer fires; no random attacks or guards.
    fn decisions_only() -> AiTuning {
        AiTuning {
            random_attack_chance: 0.0,
            random_block_chance: 0.0,
            ..Default::default()
        }
    }

    fn brain_waiting_on_behavior() -> EnemyBrain {
        EnemyBrain {
            behavior_timer: 100.0,
            ..Default::default()
        }
    }

    /// Both timers far away: only the per-frame rolls can act.
    fn brain_between_timers() -> EnemyBrain {
        EnemyBrain {
            decision_timer: 100.0,
            behavior_timer: 100.0,
            ..Default::default()
        }
    }

    fn swinging() -> Combatant {
        Combatant {
            swing: Some(Swing::new(SwingDirection::Down, 0.5)),
            ..Default::default()
        }
    }

    fn seen_at(distance: f32) -> Option<Sighting> {
        Some(Sighting::between(Vec3::ZERO, Vec3::new(0.0, 0.0, distance)))
    }

    #[test]
    fn test_far_opponent_forces_approach() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut brain = brain_waiting_on_behavior();
        let intent = think(&mut brain, &Combatant::default(), seen_at(10.0), &decisions_only(), DT, &mut rng);

        assert_eq!(brain.behavior, Behavior::Approach);
        assert_eq!(brain.decision_timer, 2.0);
        assert_eq!(intent.movement, Vec3::Z);
        assert_eq!(intent.attack, None);
    }

    #[test]
    fn test_absent_opponent_counts_as_far() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut brain = brain_waiting_on_behavior();
        let intent = think(&mut brain, &Combatant::default(), None, &decisions_only(), DT, &mut rng);

        assert_eq!(brain.behavior, Behavior::Approach);
        assert_eq!(intent.movement, Vec3::ZERO);
    }

    #[test]
    fn test_close_opponent_attack_or_retreat() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let aggressive = AiTuning {
            close_attack_chance: 1.0,
            ..decisions_only()
        };
        let mut brain = brain_waiting_on_behavior();
        let intent = think(&mut brain, &Combatant::default(), seen_at(2.0), &aggressive, DT, &mut rng);
        assert!(intent.attack.is_some());
        assert_eq!(brain.behavior, Behavior::Idle);

        let timid = AiTuning {
            close_attack_chance: 0.0,
            ..decisions_only()
        };
        let mut brain = brain_waiting_on_behavior();
        let intent = think(&mut brain, &Combatant::default(), seen_at(2.0), &timid, DT, &mut rng);
        assert_eq!(intent.attack, None);
        assert_eq!(brain.behavior, Behavior::Retreat);
        assert_eq!(intent.movement, Vec3::NEG_Z);
    }

    #[test]
    fn test_close_opponent_on_cooldown_retreats() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let aggressive = AiTuning {
            close_attack_chance: 1.0,
            ..decisions_only()
        };
        let combatant = Combatant {
            attack_cooldown: 0.1,
            ..Default::default()
        };
        let mut brain = brain_waiting_on_behavior();
        let intent = think(&mut brain, &combatant, seen_at(2.0), &aggressive, DT, &mut rng);

        assert_eq!(intent.attack, None);
        assert_eq!(brain.behavior, Behavior::Retreat);
    }

    #[test]
    fn test_mid_range_rolls() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cases = [
            (1.0, 0.0, Behavior::Approach),
            (0.0, 1.0, Behavior::Circle),
            (0.0, 0.0, Behavior::Idle),
        ];
        for (approach, circle, expected) in cases {
            let tuning = AiTuning {
                mid_approach_chance: approach,
                mid_circle_chance: circle,
                ..decisions_only()
            };
            let mut brain = brain_waiting_on_behavior();
            think(&mut brain, &Combatant::default(), seen_at(4.5), &tuning, DT, &mut rng);
            assert_eq!(brain.behavior, expected);
        }
    }

    #[test]
    fn test_decision_waits_for_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let tuning = decisions_only();
        let mut brain = brain_waiting_on_behavior();
        think(&mut brain, &Combatant::default(), seen_at(10.0), &tuning, DT, &mut rng);
        assert_eq!(brain.behavior, Behavior::Approach);

        // Opponent closes in, but the next decision is ~2s away
        brain.behavior = Behavior::Idle;
        for _ in 0..60 {
            think(&mut brain, &Combatant::default(), seen_at(1.0), &tuning, DT, &mut rng);
        }
        assert_eq!(brain.behavior, Behavior::Idle);
    }

    #[test]
    fn test_random_guard_held_then_released() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut tuning = AiTuning {
            random_block_chance: 1.0,
            ..decisions_only()
        };
        let mut brain = EnemyBrain {
            decision_timer: 100.0,
            behavior_timer: 100.0,
            ..Default::default()
        };
        let combatant = Combatant::default();

        let first = think(&mut brain, &combatant, seen_at(4.0), &tuning, 0.25, &mut rng);
        let direction = first.block.expect("guard requested");
        tuning.random_block_chance = 0.0;

        for _ in 0..3 {
            let intent = think(&mut brain, &combatant, seen_at(4.0), &tuning, 0.25, &mut rng);
            assert_eq!(intent.block, Some(direction));
        }
        let released = think(&mut brain, &combatant, seen_at(4.0), &tuning, 0.25, &mut rng);
        assert_eq!(released.block, None);
        assert!(brain.block_release.is_none());
    }

    #[test]
    fn test_random_attack_when_ready() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let trigger_happy = AiTuning {
            random_attack_chance: 1.0,
            ..decisions_only()
        };

        let mut brain = brain_between_timers();
        let intent = think(&mut brain, &Combatant::default(), seen_at(4.0), &trigger_happy, DT, &mut rng);
        assert!(intent.attack.is_some());
        assert_eq!(brain.behavior, Behavior::Idle);
    }

    #[test]
    fn test_random_attack_waits_for_cooldown_and_swing() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let trigger_happy = AiTuning {
            random_attack_chance: 1.0,
            ..decisions_only()
        };

        let cooling = Combatant {
            attack_cooldown: 0.1,
            ..Default::default()
        };
        let mut brain = brain_between_timers();
        let intent = think(&mut brain, &cooling, seen_at(4.0), &trigger_happy, DT, &mut rng);
        assert_eq!(intent.attack, None);

        let mut brain = brain_between_timers();
        let intent = think(&mut brain, &swinging(), seen_at(4.0), &trigger_happy, DT, &mut rng);
        assert_eq!(intent.attack, None);
    }

    #[test]
    fn test_swing_cancels_held_guard() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut brain = EnemyBrain {
            block_release: Some(BlockRelease {
                direction: SwingDirection::Left,
                remaining: 1.0,
            }),
            ..brain_between_timers()
        };

        let intent = think(&mut brain, &swinging(), seen_at(4.0), &decisions_only(), DT, &mut rng);
        assert_eq!(intent.block, None);
        assert!(brain.block_release.is_none());
    }

    #[test]
    fn test_same_seed_same_brain() {
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut brain = EnemyBrain::default();
            let tuning = AiTuning::default();
            (0..600)
                .map(|frame| {
                    let distance = 1.0 + (frame % 80) as f32 * 0.1;
                    think(&mut brain, &Combatant::default(), seen_at(distance), &tuning, DT, &mut rng)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
