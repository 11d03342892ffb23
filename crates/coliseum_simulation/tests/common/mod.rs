//! Shared helpers for the headless duel integration tests

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use coliseum_simulation::*;

/// Headless duel where every `update()` runs exactly one 60Hz fixed step.
pub fn duel_app(seed: u64) -> App {
    duel_app_with_config(seed, DuelConfig::default())
}

pub fn duel_app_with_config(seed: u64, config: DuelConfig) -> App {
    let mut app = create_headless_app_with_config(seed, config);
    set_log_level(LogLevel::Warning);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));
    // First update only primes the clock (zero delta, no fixed step)
    app.update();
    app
}

/// Start a match and return (player, enemy).
pub fn start_match(app: &mut App) -> (Entity, Entity) {
    app.world_mut().send_event(MatchRequest::Start);
    app.update();
    assert!(app.world().resource::<MatchState>().is_running());
    (fighter(app, Side::Player), fighter(app, Side::Enemy))
}

pub fn fighter(app: &mut App, side: Side) -> Entity {
    let mut query = app.world_mut().query::<(Entity, &Fighter)>();
    query
        .iter(app.world())
        .find(|(_, fighter)| fighter.side == side)
        .map(|(entity, _)| entity)
        .expect("fighter spawned")
}

/// Take the brain away so the test writes the enemy's intent by hand.
pub fn freeze_enemy(app: &mut App, enemy: Entity) {
    app.world_mut().entity_mut(enemy).remove::<EnemyBrain>();
}

/// Let a brain drive the player too.
pub fn hand_player_to_ai(app: &mut App, player: Entity) {
    app.world_mut()
        .entity_mut(player)
        .remove::<PlayerControlled>()
        .insert(EnemyBrain::default());
}

pub fn place(app: &mut App, entity: Entity, position: Vec3) {
    let mut entity = app.world_mut().entity_mut(entity);
    if let Some(mut transform) = entity.get_mut::<Transform>() {
        transform.translation = position;
    }
}

pub fn set_input(app: &mut App, input: PlayerInput) {
    *app.world_mut().resource_mut::<PlayerInput>() = input;
}

pub fn set_intent(app: &mut App, entity: Entity, intent: FighterIntent) {
    if let Some(mut current) = app.world_mut().get_mut::<FighterIntent>(entity) {
        *current = intent;
    }
}

pub fn step(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn health(app: &App, entity: Entity) -> u32 {
    app.world().get::<Health>(entity).map_or(0, |h| h.current)
}

pub fn combatant(app: &App, entity: Entity) -> Combatant {
    app.world().get::<Combatant>(entity).cloned().unwrap_or_default()
}

pub fn position(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .map_or(Vec3::ZERO, |t| t.translation)
}

/// Take every pending event of type `E` out of the queue.
pub fn drain_events<E: Event>(app: &mut App) -> Vec<E> {
    app.world_mut().resource_mut::<Events<E>>().drain().collect()
}

/// Player one frame of attack, then hands off the keys.
pub fn tap_attack(app: &mut App, direction: SwingDirection) {
    set_input(
        app,
        PlayerInput {
            attack: Some(direction),
            ..Default::default()
        },
    );
    app.update();
    set_input(app, PlayerInput::default());
}
