//! Match flow: start / restart / return-to-menu, winner announcement.
//!
//! The host drives the lifecycle with `MatchRequest` events; the core reports
//! the outcome with a single `MatchEnded`.

use bevy::prelude::*;

use crate::ai::EnemyBrain;
use crate::combat::{Combatant, FighterDied, HealthChanged, PoseChanged};
use crate::components::{Dead, Fighter, FighterIntent, Health, PlayerControlled, Side};
use crate::config::{DuelConfig, FighterTuning};
use crate::DuelSet;

// ============================================================================
// State & Events
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPhase {
    #[default]
    Menu,
    Running,
    Ended { winner: Side },
}

/// Current match lifecycle phase.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchState {
    pub phase: MatchPhase,
}

impl MatchState {
    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Ended { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Event: host request (menu buttons, "play again").
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRequest {
    /// Fresh fighters, fight
    Start,
    /// Same fighters back to full health at their start positions
    Restart,
    /// Remove fighters, back to the menu
    ReturnToMenu,
}

/// Event: the duel is over. Sent once per match.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEnded {
    pub winner: Side,
}

/// Run condition: gameplay systems only tick while a match is running.
pub fn match_running(state: Res<MatchState>) -> bool {
    state.is_running()
}

// ============================================================================
// Spawning
// ============================================================================

/// Spawn one side with full health at its start position.
///
/// The player side gets `PlayerControlled`, the enemy side an `EnemyBrain`.
pub fn spawn_fighter(commands: &mut Commands, side: Side, tuning: &FighterTuning) -> Entity {
    let mut entity = commands.spawn((
        Fighter { side },
        Health::new(tuning.max_health),
        tuning.clone(),
        Transform::from_translation(tuning.start_translation()),
    ));

    match side {
        Side::Player => entity.insert(PlayerControlled),
        Side::Enemy => entity.insert(EnemyBrain::default()),
    };

    entity.id()
}

// ============================================================================
// Systems
// ============================================================================

/// System: apply host `MatchRequest`s.
pub fn handle_match_requests(
    mut commands: Commands,
    mut requests: EventReader<MatchRequest>,
    mut state: ResMut<MatchState>,
    config: Res<DuelConfig>,
    mut fighters: Query<(
        Entity,
        &Fighter,
        &mut FighterTuning,
        &mut Health,
        &mut Combatant,
        &mut FighterIntent,
        &mut Transform,
        Option<&mut EnemyBrain>,
    )>,
    mut health_events: EventWriter<HealthChanged>,
    mut pose_events: EventWriter<PoseChanged>,
) {
    for request in requests.read() {
        match request {
            MatchRequest::Start => {
                for (entity, ..) in fighters.iter() {
                    commands.entity(entity).despawn();
                }

                for side in [Side::Player, Side::Enemy] {
                    let tuning = config.fighter(side);
                    let entity = spawn_fighter(&mut commands, side, tuning);
                    health_events.write(HealthChanged {
                        entity,
                        side,
                        current: tuning.max_health,
                        max: tuning.max_health,
                    });
                }

                state.phase = MatchPhase::Running;
                crate::logger::log_info("🏟️ Match started");
            }
            MatchRequest::Restart => {
                for (entity, fighter, mut tuning, mut health, mut combatant, mut intent, mut transform, brain) in
                    fighters.iter_mut()
                {
                    *tuning = config.fighter(fighter.side).clone();
                    *health = Health::new(tuning.max_health);
                    combatant.reset();
                    intent.clear();
                    *transform = Transform::from_translation(tuning.start_translation());
                    if let Some(mut brain) = brain {
                        brain.reset();
                    }
                    commands.entity(entity).remove::<Dead>();

                    health_events.write(HealthChanged {
                        entity,
                        side: fighter.side,
                        current: health.current,
                        max: health.max,
                    });
                    pose_events.write(PoseChanged {
                        entity,
                        side: fighter.side,
                        pose: combatant.pose,
                    });
                }

                state.phase = MatchPhase::Running;
                crate::logger::log_info("🔄 Match restarted");
            }
            MatchRequest::ReturnToMenu => {
                for (entity, ..) in fighters.iter() {
                    commands.entity(entity).despawn();
                }
                state.phase = MatchPhase::Menu;
                crate::logger::log_info("📋 Back to menu");
            }
        }
    }
}

/// System: first death of a running match ends it.
pub fn end_match_on_death(
    mut deaths: EventReader<FighterDied>,
    mut state: ResMut<MatchState>,
    mut ended_events: EventWriter<MatchEnded>,
) {
    for death in deaths.read() {
        if !state.is_running() {
            continue;
        }

        let winner = death.side.opponent();
        state.phase = MatchPhase::Ended { winner };
        ended_events.write(MatchEnded { winner });
        crate::logger::log_info(&format!("🏆 {} wins", winner.as_str()));
    }
}

/// Match Plugin
///
/// Runs after the gameplay sets and is not gated by `match_running`,
/// so requests are honored in every phase.
pub struct MatchPlugin;

impl Plugin for MatchPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MatchState>()
            .add_event::<MatchRequest>()
            .add_event::<MatchEnded>();

        app.add_systems(
            FixedUpdate,
            (end_match_on_death, handle_match_requests)
                .chain()
                .in_set(DuelSet::Flow),
        );
    }
}
